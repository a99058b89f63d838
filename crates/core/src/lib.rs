pub mod config;
pub mod error;
pub mod snapshot;
pub mod types;

pub use config::AppConfig;
pub use error::{KolError, KolResult};
pub use snapshot::Snapshot;
pub use types::{Campaign, Deliverable, Kol, Objective, Platform};
