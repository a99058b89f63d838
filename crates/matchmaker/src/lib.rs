//! KOL matchmaking — suitability scoring of influencers against a campaign
//! and ranked smart recommendations.

pub mod recommendations;
pub mod scorer;

pub use recommendations::get_smart_recommendations;
pub use scorer::{calculate_match_score, MatchResult};
