//! Actions represent all possible state changes in the application.
//!
//! Actions are tagged by scope to indicate which part of the app they affect.

mod bootstrap;
mod diff;
mod global;
mod notification;
mod poll;
mod pull_request;
mod review;

pub use bootstrap::BootstrapAction;
pub use diff::DiffAction;
pub use global::GlobalAction;
pub use notification::NotificationAction;
pub use poll::PollAction;
pub use pull_request::PullRequestAction;
pub use review::{ReviewAction, ReviewOutcome};

#[derive(Debug, Clone)]
pub enum Action {
    /// Global actions (not tied to any specific panel)
    Global(GlobalAction),
    /// Application startup
    Bootstrap(BootstrapAction),
    /// Fresh snapshots from the pollers
    Poll(PollAction),
    /// Pull request list navigation and selection
    PullRequest(PullRequestAction),
    /// Diff loading results
    Diff(DiffAction),
    /// AI review job
    Review(ReviewAction),
    /// Toast notifications
    Notification(NotificationAction),
}
