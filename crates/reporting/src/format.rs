//! Display formatting for dashboard figures (Indonesian locale).

/// Non-breaking space the id-ID currency format puts after the symbol.
const NBSP: char = '\u{a0}';

/// Enough fraction digits to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Rupiah with no fraction digits and `.` thousands grouping: `Rp 20.000`.
pub fn format_idr(amount: f64) -> String {
    if amount.is_nan() {
        return format!("Rp{NBSP}NaN");
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}Rp{NBSP}∞");
    }

    // Small negatives keep their sign even when they round to zero.
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}Rp{NBSP}{}", group_thousands(amount.abs().round() as u128))
}

/// Fixed-decimal rendering where an exact tie rounds away from zero
/// (`to_fixed(0.125, 2) == "0.13"`). `{:.N}` alone rounds ties to even.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() || !is_exact_tie(value, decimals) {
        return format!("{value:.decimals$}");
    }
    // One ulp further from zero leaves the tie on the upper side.
    let nudged = f64::from_bits(value.to_bits() + 1);
    format!("{nudged:.decimals$}")
}

/// Fixed-decimal percentage, e.g. `percent(2.456, 1) == "2.5%"`.
pub fn percent(value: f64, decimals: usize) -> String {
    format!("{}%", to_fixed(value, decimals))
}

/// Multiplier with two decimals, e.g. `"2.50x"`.
pub fn multiplier(value: f64) -> String {
    format!("{}x", to_fixed(value, 2))
}

fn is_exact_tie(value: f64, decimals: usize) -> bool {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let Some((_, fraction)) = exact.split_once('.') else {
        return false;
    };
    fraction
        .get(decimals..)
        .is_some_and(|rest| rest.trim_end_matches('0') == "5")
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_idr() {
        assert_eq!(format_idr(20_000.0), "Rp\u{a0}20.000");
        assert_eq!(format_idr(0.0), "Rp\u{a0}0");
        assert_eq!(format_idr(999.4), "Rp\u{a0}999");
        assert_eq!(format_idr(1_234_567.5), "Rp\u{a0}1.234.568");
        assert_eq!(format_idr(-5_000.0), "-Rp\u{a0}5.000");
    }

    #[test]
    fn test_format_idr_small_negative_keeps_sign() {
        assert_eq!(format_idr(-0.2), "-Rp\u{a0}0");
        assert_eq!(format_idr(-0.0), "Rp\u{a0}0");
    }

    #[test]
    fn test_percent_and_multiplier() {
        assert_eq!(percent(2.456, 1), "2.5%");
        assert_eq!(percent(3.75, 2), "3.75%");
        assert_eq!(multiplier(2.5), "2.50x");
        assert_eq!(multiplier(0.0), "0.00x");
    }

    #[test]
    fn test_to_fixed_ties_round_up() {
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(1.125, 2), "1.13");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
    }

    #[test]
    fn test_to_fixed_non_ties_unchanged() {
        // 1.005 is stored just below the tie, so it rounds down
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.24, 1), "0.2");
        assert_eq!(to_fixed(3.75, 2), "3.75");
        assert_eq!(to_fixed(0.0, 2), "0.00");
    }
}
