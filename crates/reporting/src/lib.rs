//! Campaign analytics and reporting — KPI formulas, success classification,
//! campaign roll-ups, KOL performance tables, scorecards and invoices.

pub mod engagement;
pub mod format;
pub mod invoice;
pub mod metrics;
pub mod performance;
pub mod scorecard;
pub mod success;
pub mod summary;

pub use metrics::{
    calculate_cpe, calculate_cpm, calculate_cvr, calculate_efficiency_score, calculate_er,
    calculate_roas, calculate_roi, calculate_virality_rate,
};
pub use performance::{kol_performance_rows, KolPerformanceRow};
pub use scorecard::{build_scorecard, Scorecard};
pub use success::{calculate_campaign_success, CampaignSuccessMetrics, SuccessCounters};
pub use summary::{summarize_campaign, CampaignSummary};
