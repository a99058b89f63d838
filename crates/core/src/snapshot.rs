//! Read-only export of the dashboard's KOL roster and campaigns.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{KolError, KolResult};
use crate::types::{Campaign, Kol};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub kols: Vec<Kol>,
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
}

impl Snapshot {
    /// Parse a snapshot from JSON text. KOL and campaign ids must be unique.
    pub fn from_json(json: &str) -> KolResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn load(path: impl AsRef<Path>) -> KolResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            kols = snapshot.kols.len(),
            campaigns = snapshot.campaigns.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    pub fn campaign(&self, id: &str) -> KolResult<&Campaign> {
        self.campaigns
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| KolError::CampaignNotFound(id.to_string()))
    }

    fn validate(&self) -> KolResult<()> {
        let mut seen = HashSet::new();
        if let Some(dup) = self.kols.iter().find(|k| !seen.insert(k.id.as_str())) {
            return Err(KolError::Snapshot(format!("duplicate KOL id {}", dup.id)));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.campaigns.iter().find(|c| !seen.insert(c.id.as_str())) {
            return Err(KolError::Snapshot(format!("duplicate campaign id {}", dup.id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "kols": [
            {"id": "k1", "name": "Ayu", "type": "Mega", "category": "Beauty",
             "followers": 1200000, "avgViews": 400000, "tiktokUsername": "ayu"}
        ],
        "campaigns": [
            {"id": "c1", "name": "Launch", "budget": 50000000, "platform": "TikTok",
             "objective": "CONVERSION", "status": "Active", "deliverables": []}
        ]
    }"#;

    #[test]
    fn test_from_json_and_lookup() {
        let snapshot = Snapshot::from_json(SAMPLE).unwrap();
        assert_eq!(snapshot.kols.len(), 1);
        assert_eq!(snapshot.campaign("c1").unwrap().name, "Launch");
        assert!(matches!(
            snapshot.campaign("nope"),
            Err(KolError::CampaignNotFound(id)) if id == "nope"
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{
            "kols": [
                {"id": "k1", "name": "A", "type": "Nano", "category": "X", "followers": 1, "avgViews": 1},
                {"id": "k1", "name": "B", "type": "Nano", "category": "X", "followers": 1, "avgViews": 1}
            ]
        }"#;
        let err = Snapshot::from_json(json).unwrap_err();
        assert!(matches!(err, KolError::Snapshot(_)));
        assert!(err.to_string().contains("duplicate KOL id k1"));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = Snapshot::from_json("{ not json").unwrap_err();
        assert!(matches!(err, KolError::Serialization(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Snapshot::load("/nonexistent/snapshot.json").unwrap_err();
        assert!(matches!(err, KolError::Io(_)));
    }
}
