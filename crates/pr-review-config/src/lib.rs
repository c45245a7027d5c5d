//! Configuration for the pull request review dashboard
//!
//! The config file is looked up in the current working directory first, then
//! in `~/.config/pr-review-dashboard/`. A missing or broken file falls back to
//! the defaults.

mod app_config;

pub use app_config::AppConfig;

use std::env;
use std::fs;
use std::path::PathBuf;

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "pr-review-dashboard.toml";

/// Candidate locations for the config file, in lookup order
pub fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];

    if let Some(home) = env::var_os("HOME") {
        candidates.push(
            PathBuf::from(home)
                .join(".config")
                .join("pr-review-dashboard")
                .join(CONFIG_FILE_NAME),
        );
    }

    candidates
}

/// Read the first config file found, if any
pub fn load_config_file() -> Option<String> {
    for path in config_file_candidates() {
        match fs::read_to_string(&path) {
            Ok(content) => {
                log::debug!("Found config file at {}", path.display());
                return Some(content);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                log::warn!("Failed to read config file {}: {}", path.display(), e);
            }
        }
    }

    None
}
