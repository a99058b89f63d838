//! KOL scorecard — judge a quoted price against recent view counts.

use serde::{Deserialize, Serialize};

use crate::metrics::calculate_cpm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictLevel {
    SuperWorthIt,
    Good,
    Standard,
    NeedsImprovement,
    Overpriced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub level: VerdictLevel,
    pub label: String,
    pub description: String,
}

/// Arithmetic mean, 0 for an empty slice.
pub fn calculate_average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median, 0 for an empty slice. Even lengths average the middle pair.
pub fn calculate_median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Grade a CPM (IDR) into one of five price bands.
pub fn verdict_for_cpm(cpm: f64) -> Verdict {
    let (level, label, description) = if cpm < 1_000.0 {
        (
            VerdictLevel::SuperWorthIt,
            "SUPER WORTH IT",
            "Incredible value! This is a steal.",
        )
    } else if cpm < 5_000.0 {
        (VerdictLevel::Good, "GOOD", "Solid performance for the price.")
    } else if cpm < 15_000.0 {
        (VerdictLevel::Standard, "STANDARD", "Fair market rate.")
    } else if cpm < 25_000.0 {
        (
            VerdictLevel::NeedsImprovement,
            "NEEDS IMPROVEMENT",
            "Slightly expensive, try to negotiate.",
        )
    } else {
        (
            VerdictLevel::Overpriced,
            "OVERPRICED",
            "Way above market norms. Not recommended.",
        )
    };

    Verdict {
        level,
        label: label.to_string(),
        description: description.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    pub price: f64,
    pub slots: u32,
    pub total_cost: f64,
    pub average_views: f64,
    pub median_views: f64,
    pub average_cpm: f64,
    pub median_cpm: f64,
    pub average_verdict: Verdict,
    pub median_verdict: Verdict,
}

/// Build a scorecard for a quoted per-slot `price` from recent per-video
/// view counts. Returns `None` until a positive price is quoted. A `slots`
/// of 0 is treated as 1.
pub fn build_scorecard(price: f64, slots: u32, recent_views: &[f64]) -> Option<Scorecard> {
    if price <= 0.0 {
        return None;
    }

    let slots = slots.max(1);
    let average_views = calculate_average(recent_views);
    let median_views = calculate_median(recent_views);
    let average_cpm = calculate_cpm(price, average_views);
    let median_cpm = calculate_cpm(price, median_views);

    Some(Scorecard {
        price,
        slots,
        total_cost: price * f64::from(slots),
        average_views,
        median_views,
        average_cpm,
        median_cpm,
        average_verdict: verdict_for_cpm(average_cpm),
        median_verdict: verdict_for_cpm(median_cpm),
    })
}
