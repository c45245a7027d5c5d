//! Review job actions

use crate::state::{Notification, NotificationKind};
use pr_review_client::Identifier;

#[derive(Debug, Clone)]
pub enum ReviewAction {
    /// Run the AI review for the selected pull request
    Run,
    /// The review job for `pr_id` left the running state
    Finished {
        pr_id: Identifier,
        outcome: ReviewOutcome,
    },
    /// Scroll the review pane down
    ScrollDown { lines: usize },
    ScrollUp { lines: usize },
}

/// How a review job ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// The backend returned review text
    Reviewed(String),
    /// The backend accepted the request but returned no text yet
    Pending,
    /// The request failed; carries the failure detail
    Failed(String),
}

impl ReviewOutcome {
    /// The notification posted when a job ends this way
    pub fn notification(&self) -> Notification {
        match self {
            Self::Reviewed(_) | Self::Pending => {
                Notification::new(NotificationKind::Success, "Review Complete")
            }
            Self::Failed(_) => Notification::new(NotificationKind::Error, "Review failed"),
        }
    }
}
