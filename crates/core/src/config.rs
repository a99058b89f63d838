use serde::Deserialize;

use crate::error::KolResult;

/// Root application configuration. Loaded from an optional TOML file and
/// environment variables with the prefix `KOLBOARD__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// How many smart recommendations the CLI prints by default.
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,
    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_json")]
    pub json: bool,
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

// Default functions
fn default_recommendation_limit() -> usize {
    10
}
fn default_pretty() -> bool {
    false
}
fn default_log_json() -> bool {
    false
}
fn default_log_filter() -> String {
    "kolboard=info,kol_reporting=info,kol_matchmaker=info".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            recommendation_limit: default_recommendation_limit(),
            pretty: default_pretty(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            json: default_log_json(),
            filter: default_log_filter(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            report: ReportConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional config file, then environment
    /// variables. Environment wins.
    pub fn load(path: Option<&str>) -> KolResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(path.unwrap_or("kolboard")).required(false))
            .add_source(
                config::Environment::with_prefix("KOLBOARD")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.report.recommendation_limit, 10);
        assert!(!config.report.pretty);
        assert!(!config.log.json);
        assert!(config.log.filter.starts_with("kolboard=info"));
    }

    #[test]
    fn test_partial_section_falls_back_to_defaults() {
        let config: AppConfig = config::Config::builder()
            .set_override("report.recommendation_limit", 3)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.report.recommendation_limit, 3);
        assert!(!config.report.pretty);
        assert!(!config.log.json);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let path = std::env::temp_dir().join(format!("kolboard-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "report = [unterminated").unwrap();
        let err = AppConfig::load(path.to_str()).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, crate::KolError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let config = AppConfig::load(Some("/nonexistent/kolboard-test")).unwrap();
        assert_eq!(config.report.recommendation_limit, 10);
    }
}
