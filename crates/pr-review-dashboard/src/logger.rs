//! File logger
//!
//! The terminal belongs to the TUI, so logs go to a file in the temp dir.

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

const LOG_FILE_NAME: &str = "pr-review-dashboard.log";

/// Install the file logger and return the log file path
///
/// `RUST_LOG=trace|debug|info|warn|error` overrides the default `debug` level.
pub fn init() -> anyhow::Result<PathBuf> {
    let path = std::env::temp_dir().join(LOG_FILE_NAME);
    let file = File::create(&path)?;

    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Debug);

    let config = ConfigBuilder::new()
        .add_filter_allow_str("pr_review")
        .set_time_format_rfc3339()
        .build();

    WriteLogger::init(level, config, file)?;
    Ok(path)
}
