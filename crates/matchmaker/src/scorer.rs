//! Additive KOL ↔ campaign suitability score (0–100) with reason tags.
//!
//! Four independent factors are summed and the total clamped:
//!
//! | Factor    | Points                                   |
//! |-----------|------------------------------------------|
//! | Category  | +20                                      |
//! | Platform  | +20 when active on the campaign platform |
//! | Objective | +10 … +40 by reach or average views      |
//! | Budget    | +10 affordable, −50 over budget          |
//!
//! Not every tier emits a reason; callers should treat `reasons` as the
//! notable highlights, not a full breakdown.

use kol_core::{Campaign, Kol, Objective, Platform};
use serde::Serialize;

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;

/// Category every KOL is treated as overlapping with.
pub const GENERAL_CATEGORY: &str = "General";

/// A rate at or below this share of the budget is a good fit.
const AFFORDABLE_BUDGET_SHARE: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub kol: Kol,
    /// Always within `0..=100`.
    pub score: u32,
    pub reasons: Vec<String>,
}

#[derive(Default)]
struct Tally {
    score: i64,
    reasons: Vec<String>,
}

impl Tally {
    fn add(&mut self, points: i64, reason: Option<&str>) {
        self.score += points;
        if let Some(reason) = reason {
            self.reasons.push(reason.to_string());
        }
    }
}

/// Score `kol` against `campaign`.
///
/// An unset campaign platform is treated as TikTok and an unset objective
/// as awareness.
pub fn calculate_match_score(kol: &Kol, campaign: &Campaign) -> MatchResult {
    let platform = campaign.platform.unwrap_or_default();
    let objective = campaign.objective.unwrap_or_default();

    let mut tally = Tally::default();
    score_category(kol, &mut tally);
    score_platform(kol, platform, &mut tally);
    score_objective(kol, objective, &mut tally);
    score_budget(kol, platform, campaign.budget, &mut tally);

    MatchResult {
        kol: kol.clone(),
        score: tally.score.clamp(MIN_SCORE, MAX_SCORE) as u32,
        reasons: tally.reasons,
    }
}

// Campaigns carry no category yet, so every KOL gets the same base points.
// Only "General" is called out.
fn score_category(kol: &Kol, tally: &mut Tally) {
    if kol.category == GENERAL_CATEGORY {
        tally.add(20, Some("General category overlap"));
    } else {
        tally.add(20, None);
    }
}

fn score_platform(kol: &Kol, platform: Platform, tally: &mut Tally) {
    if !kol.is_active_on(platform) {
        return;
    }
    let reason = match platform {
        Platform::TikTok => "Active on TikTok",
        Platform::Instagram => "Active on Instagram",
    };
    tally.add(20, Some(reason));
}

fn score_objective(kol: &Kol, objective: Objective, tally: &mut Tally) {
    match objective {
        Objective::Awareness => match kol.followers {
            f if f > 1_000_000 => tally.add(40, Some("Mega Influencer (High Reach)")),
            f if f > 500_000 => tally.add(30, Some("Macro Influencer (Good Reach)")),
            f if f > 100_000 => tally.add(20, None),
            _ => tally.add(10, None),
        },
        // Average views stand in for the active, buying audience.
        Objective::Conversion => match kol.avg_views {
            v if v > 500_000 => tally.add(40, Some("High Average Views (Conversion Potential)")),
            v if v > 100_000 => tally.add(25, None),
            _ => tally.add(10, None),
        },
    }
}

fn score_budget(kol: &Kol, platform: Platform, budget: f64, tally: &mut Tally) {
    let Some(rate) = kol.rate_for(platform).filter(|r| *r != 0.0) else {
        return;
    };
    if rate <= budget * AFFORDABLE_BUDGET_SHARE {
        tally.add(10, Some("Good Budget Fit"));
    } else if rate > budget {
        tally.add(-50, Some("Exceeds Campaign Budget"));
    }
}
