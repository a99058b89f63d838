//! Follower-based engagement rate, as used by the standalone ER calculator.
//!
//! Unlike [`crate::metrics::calculate_er`], the denominator here is the
//! audience size, not the view count.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementQuality {
    NotAvailable,
    Excellent,
    Good,
    Average,
    Low,
}

impl EngagementQuality {
    pub fn label(&self) -> &'static str {
        match self {
            EngagementQuality::NotAvailable => "N/A",
            EngagementQuality::Excellent => "Excellent",
            EngagementQuality::Good => "Good",
            EngagementQuality::Average => "Average",
            EngagementQuality::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInteractions {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

/// `(likes + comments + shares) / followers * 100`, 0 without followers.
pub fn follower_engagement_rate(followers: u64, interactions: PostInteractions) -> f64 {
    if followers == 0 {
        return 0.0;
    }
    let total = interactions.likes + interactions.comments + interactions.shares;
    total as f64 / followers as f64 * 100.0
}

pub fn grade_engagement(rate: f64) -> EngagementQuality {
    if rate == 0.0 {
        EngagementQuality::NotAvailable
    } else if rate > 5.0 {
        EngagementQuality::Excellent
    } else if rate > 3.0 {
        EngagementQuality::Good
    } else if rate > 1.0 {
        EngagementQuality::Average
    } else {
        EngagementQuality::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follower_engagement_rate() {
        let interactions = PostInteractions {
            likes: 4_000,
            comments: 600,
            shares: 400,
        };
        assert!((follower_engagement_rate(100_000, interactions) - 5.0).abs() < f64::EPSILON);
        assert_eq!(follower_engagement_rate(0, interactions), 0.0);
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade_engagement(0.0), EngagementQuality::NotAvailable);
        assert_eq!(grade_engagement(5.01), EngagementQuality::Excellent);
        // Exactly 5% is only "Good"
        assert_eq!(grade_engagement(5.0), EngagementQuality::Good);
        assert_eq!(grade_engagement(3.0), EngagementQuality::Average);
        assert_eq!(grade_engagement(1.0), EngagementQuality::Low);
        assert_eq!(grade_engagement(0.2), EngagementQuality::Low);
        assert_eq!(EngagementQuality::NotAvailable.label(), "N/A");
    }
}
