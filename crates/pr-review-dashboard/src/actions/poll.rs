//! Poll actions
//!
//! Dispatched by the poll middleware whenever a poller commits a new
//! snapshot. The snapshots are shared read-only; reducers only swap the
//! reference.

use pr_review_client::{Metrics, PullRequest, Review};
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub enum PollAction {
    PullRequestsUpdated(Arc<Vec<PullRequest>>),
    ReviewsUpdated(Arc<Vec<Review>>),
    MetricsUpdated(Arc<Metrics>),
}

// Snapshots can be large; the action log only needs their size
impl fmt::Debug for PollAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PullRequestsUpdated(prs) => write!(f, "PullRequestsUpdated({} prs)", prs.len()),
            Self::ReviewsUpdated(reviews) => write!(f, "ReviewsUpdated({} reviews)", reviews.len()),
            Self::MetricsUpdated(metrics) => write!(
                f,
                "MetricsUpdated(total: {}, issues: {}, recent: {})",
                metrics.total,
                metrics.issues,
                metrics.recent.len()
            ),
        }
    }
}
