//! Workload configuration.

use serde::{Deserialize, Serialize};

use sole_observability::LogFormat;

/// Configuration for the storefront workload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store name shown in the page title and header.
    #[serde(default = "default_store_name")]
    pub store_name: String,
    /// Base path of the shoe detail route the cards link to.
    #[serde(default = "default_detail_base_path")]
    pub detail_base_path: String,
    /// Emit human-readable logs instead of JSON.
    #[serde(default)]
    pub human_logs: bool,
}

fn default_store_name() -> String {
    "Sole&Ankle".to_string()
}

fn default_detail_base_path() -> String {
    "/shoe".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: default_store_name(),
            detail_base_path: default_detail_base_path(),
            human_logs: false,
        }
    }
}

impl StoreConfig {
    /// Load configuration from the `STORE_CONFIG` environment variable
    /// (JSON), falling back to defaults when unset or malformed.
    pub fn load() -> Self {
        std::env::var("STORE_CONFIG")
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Log format implied by this configuration.
    pub fn log_format(&self) -> LogFormat {
        if self.human_logs {
            LogFormat::Human
        } else {
            LogFormat::Json
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = StoreConfig::default();
        assert_eq!(cfg.store_name, "Sole&Ankle");
        assert_eq!(cfg.detail_base_path, "/shoe");
        assert!(!cfg.human_logs);
    }

    #[test]
    fn test_partial_json() {
        let cfg: StoreConfig = serde_json::from_str(r#"{"human_logs": true}"#).unwrap();
        assert_eq!(cfg.store_name, "Sole&Ankle");
        assert_eq!(cfg.detail_base_path, "/shoe");
        assert!(cfg.human_logs);
    }

    #[test]
    fn test_custom_detail_base_path() {
        let cfg: StoreConfig =
            serde_json::from_str(r#"{"detail_base_path": "/sneakers"}"#).unwrap();
        assert_eq!(cfg.detail_base_path, "/sneakers");
    }
}
