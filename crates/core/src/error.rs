use thiserror::Error;

pub type KolResult<T> = Result<T, KolError>;

#[derive(Error, Debug)]
pub enum KolError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Campaign not found: {0}")]
    CampaignNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<config::ConfigError> for KolError {
    fn from(err: config::ConfigError) -> Self {
        KolError::Config(err.to_string())
    }
}
