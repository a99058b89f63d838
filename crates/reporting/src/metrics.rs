//! Campaign KPI formulas — ER, CPM, CPE, ROAS, ROI, efficiency, virality, CVR.
//!
//! Every formula is total: a zero denominator yields 0 (or `"0%"` for the
//! formatted rates). Negative or non-finite inputs are not rejected and
//! flow through the arithmetic unchanged.

use crate::format::percent;

/// Engagement rate: `engagements / views * 100`.
pub fn calculate_er(engagements: f64, views: f64) -> f64 {
    if views == 0.0 {
        return 0.0;
    }
    engagements / views * 100.0
}

/// Cost per mille: `cost / views * 1000`.
pub fn calculate_cpm(cost: f64, views: f64) -> f64 {
    if views == 0.0 {
        return 0.0;
    }
    cost / views * 1000.0
}

/// Cost per engagement: `cost / engagements`.
pub fn calculate_cpe(cost: f64, engagements: f64) -> f64 {
    if engagements == 0.0 {
        return 0.0;
    }
    cost / engagements
}

/// Return on ad spend: `revenue / cost`.
pub fn calculate_roas(revenue: f64, cost: f64) -> f64 {
    if cost == 0.0 {
        return 0.0;
    }
    revenue / cost
}

/// Return on investment in percent: `(revenue - cost) / cost * 100`.
pub fn calculate_roi(revenue: f64, cost: f64) -> f64 {
    if cost == 0.0 {
        return 0.0;
    }
    (revenue - cost) / cost * 100.0
}

/// Views bought per 1,000 currency units spent.
pub fn calculate_efficiency_score(views: f64, cost: f64) -> f64 {
    if cost == 0.0 {
        return 0.0;
    }
    views / cost * 1000.0
}

/// Shares as a percentage of views.
pub fn virality_ratio(shares: f64, views: f64) -> f64 {
    if views == 0.0 {
        return 0.0;
    }
    shares / views * 100.0
}

/// Orders as a percentage of clicks.
pub fn conversion_ratio(orders: f64, clicks: f64) -> f64 {
    if clicks == 0.0 {
        return 0.0;
    }
    orders / clicks * 100.0
}

/// Virality rate formatted with one decimal, e.g. `"2.5%"`.
pub fn calculate_virality_rate(shares: f64, views: f64) -> String {
    if views == 0.0 {
        return "0%".to_string();
    }
    percent(virality_ratio(shares, views), 1)
}

/// Conversion rate formatted with two decimals, e.g. `"3.75%"`.
pub fn calculate_cvr(orders: f64, clicks: f64) -> String {
    if clicks == 0.0 {
        return "0%".to_string();
    }
    percent(conversion_ratio(orders, clicks), 2)
}
