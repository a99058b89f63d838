//! Campaign roll-up — spend, revenue and reach totals over all deliverables,
//! budget utilization, best performer and the objective-aware success badge.

use kol_core::{Campaign, Kol, Objective};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metrics::{calculate_er, calculate_roi};
use crate::success::{calculate_campaign_success, CampaignSuccessMetrics, SuccessCounters};

/// Raw sums across every deliverable whose KOL is known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignTotals {
    pub spend: f64,
    pub revenue: f64,
    pub views: u64,
    pub engagements: u64,
    pub shares: u64,
    pub clicks: u64,
    pub orders: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestPerformer {
    pub name: String,
    pub value: f64,
    /// `"Views"` for awareness campaigns, `"Sales"` for conversion.
    pub metric_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    pub campaign_id: String,
    pub campaign_name: String,
    pub objective: Objective,
    pub totals: CampaignTotals,
    pub success: CampaignSuccessMetrics,
    pub roi_percent: f64,
    pub engagement_rate: f64,
    /// Spend as a share of budget, capped at 100.
    pub budget_used_percent: f64,
    pub budget_remaining: f64,
    pub best_performer: BestPerformer,
    /// Deliverables skipped because their KOL is not in the roster.
    pub unmatched_deliverables: usize,
}

/// Summarize `campaign` using rate cards from `kols`.
///
/// Deliverables whose KOL id is missing from the roster contribute nothing.
pub fn summarize_campaign(campaign: &Campaign, kols: &[Kol]) -> CampaignSummary {
    let platform = campaign.platform.unwrap_or_default();
    let objective = campaign.objective.unwrap_or_default();
    let metric_label = match objective {
        Objective::Awareness => "Views",
        Objective::Conversion => "Sales",
    };

    let mut totals = CampaignTotals::default();
    let mut best = BestPerformer {
        name: "N/A".to_string(),
        value: 0.0,
        metric_label: metric_label.to_string(),
    };
    let mut unmatched = 0usize;

    for del in &campaign.deliverables {
        let Some(kol) = kols.iter().find(|k| k.id == del.kol_id) else {
            debug!(
                campaign_id = %campaign.id,
                kol_id = %del.kol_id,
                "Deliverable references unknown KOL, skipping"
            );
            unmatched += 1;
            continue;
        };

        let cost = del.cost(kol.rate_for(platform).unwrap_or(0.0));
        totals.spend += cost;
        totals.revenue += del.sales_generated;
        totals.views += del.total_views;
        totals.engagements += del.total_engagements;
        totals.shares += del.shares();
        totals.clicks += del.clicks.unwrap_or(0);
        totals.orders += del.orders.unwrap_or(0);

        let metric_value = match objective {
            Objective::Awareness => del.total_views as f64,
            Objective::Conversion => del.sales_generated,
        };
        if metric_value > best.value {
            best.name = kol.name.clone();
            best.value = metric_value;
        }
    }

    let success = calculate_campaign_success(
        objective,
        totals.spend,
        totals.revenue,
        totals.views as f64,
        SuccessCounters {
            shares: totals.shares as f64,
            clicks: totals.clicks as f64,
            orders: totals.orders as f64,
        },
    );

    let budget_used_percent = if campaign.budget > 0.0 {
        (totals.spend / campaign.budget * 100.0).min(100.0)
    } else {
        0.0
    };

    debug!(
        campaign_id = %campaign.id,
        spend = totals.spend,
        revenue = totals.revenue,
        views = totals.views,
        "Campaign summarized"
    );

    CampaignSummary {
        campaign_id: campaign.id.clone(),
        campaign_name: campaign.name.clone(),
        objective,
        roi_percent: calculate_roi(totals.revenue, totals.spend),
        engagement_rate: calculate_er(totals.engagements as f64, totals.views as f64),
        budget_used_percent,
        budget_remaining: (campaign.budget - totals.spend).max(0.0),
        best_performer: best,
        unmatched_deliverables: unmatched,
        totals,
        success,
    }
}
