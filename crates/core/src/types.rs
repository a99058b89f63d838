use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Social platform a campaign runs on. Campaigns target exactly one.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Platform {
    #[default]
    TikTok,
    Instagram,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a campaign is judged on.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Objective {
    #[default]
    Awareness,
    Conversion,
}

/// Size bucket recorded on the KOL profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum KolType {
    Mega,
    Macro,
    Micro,
    Nano,
}

/// Influencer profile as stored by the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Kol {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kol_type: KolType,
    pub category: String,
    #[serde(default)]
    pub category_id: Option<String>,
    /// Primary (total) follower count.
    pub followers: u64,
    pub avg_views: u64,
    #[serde(default)]
    pub tiktok_username: Option<String>,
    #[serde(default)]
    pub tiktok_profile_link: Option<String>,
    #[serde(default)]
    pub tiktok_followers: Option<u64>,
    #[serde(default)]
    pub instagram_username: Option<String>,
    #[serde(default)]
    pub instagram_profile_link: Option<String>,
    #[serde(default)]
    pub instagram_followers: Option<u64>,
    /// Flat rate per TikTok video.
    #[serde(default)]
    pub rate_card_tiktok: Option<f64>,
    /// Flat rate per Instagram Reel.
    #[serde(default)]
    pub rate_card_reels: Option<f64>,
    #[serde(default)]
    pub rate_card_pdf_link: Option<String>,
}

impl Kol {
    /// Username on `platform`, if present and non-empty.
    pub fn username_on(&self, platform: Platform) -> Option<&str> {
        let name = match platform {
            Platform::TikTok => self.tiktok_username.as_deref(),
            Platform::Instagram => self.instagram_username.as_deref(),
        };
        name.filter(|n| !n.is_empty())
    }

    pub fn is_active_on(&self, platform: Platform) -> bool {
        self.username_on(platform).is_some()
    }

    /// Rate card for one deliverable on `platform`. Instagram uses the Reels rate.
    pub fn rate_for(&self, platform: Platform) -> Option<f64> {
        match platform {
            Platform::TikTok => self.rate_card_tiktok,
            Platform::Instagram => self.rate_card_reels,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CampaignStatus {
    Active,
    Completed,
    Draft,
}

/// Lifecycle of a deliverable. Display only; nothing here transitions it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeliverableStatus {
    #[default]
    ToContact,
    Negotiating,
    ContentCreation,
    Posted,
    Completed,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailedEngagements {
    pub likes: u64,
    pub shares: u64,
    pub comments: u64,
}

/// One KOL's work on one campaign, with cumulative counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deliverable {
    pub kol_id: String,
    pub videos_count: u32,
    pub total_views: u64,
    pub total_engagements: u64,
    #[serde(default)]
    pub detailed_engagements: Option<DetailedEngagements>,
    #[serde(default)]
    pub clicks: Option<u64>,
    #[serde(default)]
    pub orders: Option<u64>,
    pub sales_generated: f64,
    #[serde(default)]
    pub status: DeliverableStatus,
    #[serde(default)]
    pub content_link: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Deliverable {
    /// Spend for this deliverable at a flat per-video rate.
    pub fn cost(&self, rate: f64) -> f64 {
        rate * f64::from(self.videos_count)
    }

    pub fn shares(&self) -> u64 {
        self.detailed_engagements.map_or(0, |d| d.shares)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub budget: f64,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Unset means TikTok.
    #[serde(default)]
    pub platform: Option<Platform>,
    /// Unset means awareness.
    #[serde(default)]
    pub objective: Option<Objective>,
    pub status: CampaignStatus,
    #[serde(default)]
    pub deliverables: Vec<Deliverable>,
}
