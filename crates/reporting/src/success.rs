//! Objective-aware campaign success classification.

use kol_core::Objective;
use serde::{Deserialize, Serialize};

use crate::format::{format_idr, multiplier};
use crate::metrics::{calculate_cpm, calculate_cvr, calculate_roas, calculate_virality_rate};

/// Conversion campaigns succeed above this ROAS.
pub const ROAS_SUCCESS_THRESHOLD: f64 = 2.0;
/// Awareness campaigns succeed below this CPM (IDR).
pub const CPM_SUCCESS_THRESHOLD: f64 = 25_000.0;

/// Display classification for the performance badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceColor {
    /// Green: the campaign met its objective threshold.
    Positive,
    /// Amber: a conversion campaign below the ROAS threshold.
    Warning,
    /// Blue: an awareness campaign at or above the CPM threshold.
    Neutral,
}

/// Optional funnel counters. All default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SuccessCounters {
    pub shares: f64,
    pub clicks: f64,
    pub orders: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSuccessMetrics {
    pub performance_label: String,
    pub performance_color: PerformanceColor,
    pub primary_metric_label: String,
    pub primary_metric_value: String,
    pub secondary_metric_label: String,
    pub secondary_metric_value: String,
}

/// Classify aggregate campaign results against the objective's success policy.
///
/// Conversion campaigns are judged on ROAS (headline ROAS + CVR), awareness
/// campaigns on CPM (headline CPM + virality rate).
pub fn calculate_campaign_success(
    objective: Objective,
    total_spend: f64,
    total_revenue: f64,
    total_views: f64,
    counters: SuccessCounters,
) -> CampaignSuccessMetrics {
    match objective {
        Objective::Conversion => {
            let roas = calculate_roas(total_revenue, total_spend);
            let is_success = roas > ROAS_SUCCESS_THRESHOLD;

            CampaignSuccessMetrics {
                performance_label: if is_success {
                    "High Performance"
                } else {
                    "Needs Optimization"
                }
                .to_string(),
                performance_color: if is_success {
                    PerformanceColor::Positive
                } else {
                    PerformanceColor::Warning
                },
                primary_metric_label: "ROAS".to_string(),
                primary_metric_value: multiplier(roas),
                secondary_metric_label: "CVR".to_string(),
                secondary_metric_value: calculate_cvr(counters.orders, counters.clicks),
            }
        }
        Objective::Awareness => {
            let cpm = calculate_cpm(total_spend, total_views);
            let is_success = cpm < CPM_SUCCESS_THRESHOLD;

            CampaignSuccessMetrics {
                performance_label: if is_success {
                    "High Performance"
                } else {
                    "Standard Performance"
                }
                .to_string(),
                performance_color: if is_success {
                    PerformanceColor::Positive
                } else {
                    PerformanceColor::Neutral
                },
                primary_metric_label: "CPM".to_string(),
                primary_metric_value: format_idr(cpm),
                secondary_metric_label: "Virality Rate".to_string(),
                secondary_metric_value: calculate_virality_rate(counters.shares, total_views),
            }
        }
    }
}
