//! Per-KOL performance rows for a single campaign.

use kol_core::{Campaign, Deliverable, Kol};
use serde::{Deserialize, Serialize};

use crate::metrics::{calculate_cpm, calculate_efficiency_score, calculate_er};

/// Follower-count tier shown next to the KOL name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FollowerTier {
    #[serde(rename = "Nano-Tier")]
    Nano,
    #[serde(rename = "Micro-Tier")]
    Micro,
    #[serde(rename = "Macro-Tier")]
    Macro,
    #[serde(rename = "Mega-Tier")]
    Mega,
}

impl FollowerTier {
    pub fn from_followers(followers: u64) -> Self {
        match followers {
            f if f >= 1_000_000 => FollowerTier::Mega,
            f if f >= 100_000 => FollowerTier::Macro,
            f if f >= 10_000 => FollowerTier::Micro,
            _ => FollowerTier::Nano,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KolPerformanceRow {
    pub kol_id: String,
    pub kol_name: String,
    pub tier: FollowerTier,
    pub cost: f64,
    pub views: u64,
    pub engagement_rate: f64,
    pub cpm: f64,
    pub efficiency: f64,
}

impl KolPerformanceRow {
    fn build(kol: &Kol, del: &Deliverable, rate: f64) -> Self {
        let cost = del.cost(rate);
        let views = del.total_views as f64;
        Self {
            kol_id: kol.id.clone(),
            kol_name: kol.name.clone(),
            tier: FollowerTier::from_followers(kol.followers),
            cost,
            views: del.total_views,
            engagement_rate: calculate_er(del.total_engagements as f64, views),
            cpm: calculate_cpm(cost, views),
            efficiency: calculate_efficiency_score(views, cost),
        }
    }
}

/// Columns the performance table can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Cost,
    Views,
    EngagementRate,
    Cpm,
    Efficiency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// One row per deliverable with a known KOL, in deliverable order.
pub fn kol_performance_rows(campaign: &Campaign, kols: &[Kol]) -> Vec<KolPerformanceRow> {
    let platform = campaign.platform.unwrap_or_default();
    campaign
        .deliverables
        .iter()
        .filter_map(|del| {
            let kol = kols.iter().find(|k| k.id == del.kol_id)?;
            Some(KolPerformanceRow::build(
                kol,
                del,
                kol.rate_for(platform).unwrap_or(0.0),
            ))
        })
        .collect()
}

/// Stable in-place sort of performance rows.
pub fn sort_rows(rows: &mut [KolPerformanceRow], key: SortKey, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ord = match key {
            SortKey::Name => a.kol_name.cmp(&b.kol_name),
            SortKey::Cost => a.cost.total_cmp(&b.cost),
            SortKey::Views => a.views.cmp(&b.views),
            SortKey::EngagementRate => a.engagement_rate.total_cmp(&b.engagement_rate),
            SortKey::Cpm => a.cpm.total_cmp(&b.cpm),
            SortKey::Efficiency => a.efficiency.total_cmp(&b.efficiency),
        };
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use kol_core::types::{CampaignStatus, DeliverableStatus, KolType};
    use kol_core::Platform;

    fn kol(id: &str, followers: u64, rate: f64) -> Kol {
        Kol {
            id: id.to_string(),
            name: id.to_uppercase(),
            kol_type: KolType::Micro,
            category: "Food".to_string(),
            category_id: None,
            followers,
            avg_views: 10_000,
            tiktok_username: Some(id.to_string()),
            tiktok_profile_link: None,
            tiktok_followers: None,
            instagram_username: None,
            instagram_profile_link: None,
            instagram_followers: None,
            rate_card_tiktok: Some(rate),
            rate_card_reels: None,
            rate_card_pdf_link: None,
        }
    }

    fn deliverable(kol_id: &str, videos: u32, views: u64, engagements: u64) -> Deliverable {
        Deliverable {
            kol_id: kol_id.to_string(),
            videos_count: videos,
            total_views: views,
            total_engagements: engagements,
            detailed_engagements: None,
            clicks: None,
            orders: None,
            sales_generated: 0.0,
            status: DeliverableStatus::Completed,
            content_link: None,
            due_date: None,
            notes: None,
        }
    }

    fn campaign(platform: Platform, deliverables: Vec<Deliverable>) -> Campaign {
        Campaign {
            id: "c".to_string(),
            name: "Test".to_string(),
            budget: 50_000_000.0,
            start_date: None,
            end_date: None,
            platform: Some(platform),
            objective: None,
            status: CampaignStatus::Completed,
            deliverables,
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(FollowerTier::from_followers(9_999), FollowerTier::Nano);
        assert_eq!(FollowerTier::from_followers(10_000), FollowerTier::Micro);
        assert_eq!(FollowerTier::from_followers(100_000), FollowerTier::Macro);
        assert_eq!(FollowerTier::from_followers(1_000_000), FollowerTier::Mega);
        assert_eq!(serde_json::to_value(FollowerTier::Mega).unwrap(), "Mega-Tier");
    }

    #[test]
    fn test_row_metrics() {
        let kols = vec![kol("a", 250_000, 2_000_000.0)];
        let c = campaign(Platform::TikTok, vec![deliverable("a", 2, 200_000, 10_000)]);

        let rows = kol_performance_rows(&c, &kols);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.tier, FollowerTier::Macro);
        assert!((row.cost - 4_000_000.0).abs() < f64::EPSILON);
        assert!((row.engagement_rate - 5.0).abs() < 1e-9);
        assert!((row.cpm - 20_000.0).abs() < 1e-9);
        assert!((row.efficiency - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_rate_gives_zero_cost_metrics() {
        let kols = vec![kol("a", 5_000, 2_000_000.0)];
        // Instagram campaign, KOL only has a TikTok rate
        let c = campaign(Platform::Instagram, vec![deliverable("a", 3, 1_000, 10)]);

        let rows = kol_performance_rows(&c, &kols);
        assert_eq!(rows[0].cost, 0.0);
        assert_eq!(rows[0].cpm, 0.0);
        assert_eq!(rows[0].efficiency, 0.0);
        assert_eq!(rows[0].tier, FollowerTier::Nano);
    }

    #[test]
    fn test_unknown_kol_dropped() {
        let c = campaign(Platform::TikTok, vec![deliverable("ghost", 1, 1_000, 10)]);
        assert!(kol_performance_rows(&c, &[]).is_empty());
    }

    #[test]
    fn test_sort_rows() {
        let kols = vec![
            kol("a", 1_000, 1_000_000.0),
            kol("b", 1_000, 1_000_000.0),
            kol("c", 1_000, 1_000_000.0),
        ];
        let c = campaign(
            Platform::TikTok,
            vec![
                deliverable("a", 1, 30_000, 100),
                deliverable("b", 1, 10_000, 900),
                deliverable("c", 1, 20_000, 100),
            ],
        );
        let mut rows = kol_performance_rows(&c, &kols);

        sort_rows(&mut rows, SortKey::Views, SortDirection::Desc);
        let ids: Vec<_> = rows.iter().map(|r| r.kol_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);

        sort_rows(&mut rows, SortKey::Cpm, SortDirection::Asc);
        let ids: Vec<_> = rows.iter().map(|r| r.kol_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);

        sort_rows(&mut rows, SortKey::EngagementRate, SortDirection::Desc);
        assert_eq!(rows[0].kol_id, "b");
    }
}
