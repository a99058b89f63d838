//! Smart recommendations — rank a KOL roster for a campaign.

use kol_core::{Campaign, Kol};
use tracing::debug;

use crate::scorer::{calculate_match_score, MatchResult};

/// Score every KOL in `kols`, drop zero scores, and sort best first.
///
/// The sort is stable, so equal scores keep roster order. Nothing is
/// truncated; callers decide how many to show.
pub fn get_smart_recommendations(kols: &[Kol], campaign: &Campaign) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = kols
        .iter()
        .map(|kol| calculate_match_score(kol, campaign))
        .filter(|result| result.score > 0)
        .collect();
    results.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(
        campaign_id = %campaign.id,
        roster = kols.len(),
        recommended = results.len(),
        "Smart recommendations computed"
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use kol_core::types::{CampaignStatus, KolType};
    use kol_core::{Objective, Platform};

    fn kol(id: &str, followers: u64, rate: Option<f64>) -> Kol {
        Kol {
            id: id.to_string(),
            name: id.to_string(),
            kol_type: KolType::Micro,
            category: "Lifestyle".to_string(),
            category_id: None,
            followers,
            avg_views: 0,
            tiktok_username: Some(id.to_string()),
            tiktok_profile_link: None,
            tiktok_followers: None,
            instagram_username: None,
            instagram_profile_link: None,
            instagram_followers: None,
            rate_card_tiktok: rate,
            rate_card_reels: None,
            rate_card_pdf_link: None,
        }
    }

    fn campaign(budget: f64) -> Campaign {
        Campaign {
            id: "c".to_string(),
            name: "Back to School".to_string(),
            budget,
            start_date: None,
            end_date: None,
            platform: Some(Platform::TikTok),
            objective: Some(Objective::Awareness),
            status: CampaignStatus::Active,
            deliverables: Vec::new(),
        }
    }

    #[test]
    fn test_sorted_descending() {
        let kols = vec![
            kol("small", 50_000, None),
            kol("mega", 2_000_000, None),
            kol("macro", 700_000, None),
        ];
        let ids: Vec<_> = get_smart_recommendations(&kols, &campaign(1e9))
            .into_iter()
            .map(|r| r.kol.id)
            .collect();
        assert_eq!(ids, vec!["mega", "macro", "small"]);
    }

    #[test]
    fn test_zero_scores_dropped() {
        // 20 + 20 + 10 - 50 clamps to 0
        let kols = vec![kol("pricey", 50_000, Some(5_000_000.0)), kol("ok", 50_000, None)];
        let results = get_smart_recommendations(&kols, &campaign(1_000_000.0));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kol.id, "ok");
    }

    #[test]
    fn test_ties_keep_roster_order() {
        let kols = vec![
            kol("first", 200_000, None),
            kol("mega", 2_000_000, None),
            kol("second", 300_000, None),
            kol("third", 400_000, None),
        ];
        let ids: Vec<_> = get_smart_recommendations(&kols, &campaign(1e9))
            .into_iter()
            .map(|r| r.kol.id)
            .collect();
        assert_eq!(ids, vec!["mega", "first", "second", "third"]);
    }

    #[test]
    fn test_empty_roster() {
        assert!(get_smart_recommendations(&[], &campaign(1e9)).is_empty());
    }
}
