//! Bootstrap actions
//!
//! Actions for application initialization.

/// Actions for application bootstrap
#[derive(Debug, Clone)]
pub enum BootstrapAction {
    /// Bootstrap started: pollers are activated
    Start,
}
