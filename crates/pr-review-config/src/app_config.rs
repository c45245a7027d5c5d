//! Application configuration
//!
//! Configuration loaded from pr-review-dashboard.toml.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application configuration loaded from pr-review-dashboard.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the review backend (e.g., "http://127.0.0.1:5000")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// How often the pull request list is refreshed
    #[serde(default = "default_list_interval_ms")]
    pub pull_requests_interval_ms: u64,

    /// How often the review list is refreshed
    #[serde(default = "default_list_interval_ms")]
    pub reviews_interval_ms: u64,

    /// How often the metrics are refreshed
    #[serde(default = "default_metrics_interval_ms")]
    pub metrics_interval_ms: u64,

    /// How long a notification stays on screen
    #[serde(default = "default_notification_timeout_ms")]
    pub notification_timeout_ms: u64,

    /// Number of reviews listed under "Recent Reviews"
    #[serde(default = "default_recent_reviews_limit")]
    pub recent_reviews_limit: usize,

    /// Per-request timeout; unset means the HTTP client's defaults
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_list_interval_ms() -> u64 {
    8_000
}

fn default_metrics_interval_ms() -> u64 {
    15_000
}

fn default_notification_timeout_ms() -> u64 {
    4_000
}

fn default_recent_reviews_limit() -> usize {
    5
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            pull_requests_interval_ms: default_list_interval_ms(),
            reviews_interval_ms: default_list_interval_ms(),
            metrics_interval_ms: default_metrics_interval_ms(),
            notification_timeout_ms: default_notification_timeout_ms(),
            recent_reviews_limit: default_recent_reviews_limit(),
            request_timeout_ms: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    pub fn pull_requests_interval(&self) -> Duration {
        Duration::from_millis(self.pull_requests_interval_ms)
    }

    pub fn reviews_interval(&self) -> Duration {
        Duration::from_millis(self.reviews_interval_ms)
    }

    pub fn metrics_interval(&self) -> Duration {
        Duration::from_millis(self.metrics_interval_ms)
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}
