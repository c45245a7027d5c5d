use crate::actions::PollAction;
use crate::state::RemoteState;
use chrono::Local;

/// Swap in the latest snapshot and record when it arrived
pub fn reduce(mut state: RemoteState, action: &PollAction) -> RemoteState {
    let now = Local::now();

    match action {
        PollAction::PullRequestsUpdated(prs) => {
            state.pull_requests = Some(prs.clone());
            state.pull_requests_refreshed_at = Some(now);
        }
        PollAction::ReviewsUpdated(reviews) => {
            state.reviews = Some(reviews.clone());
            state.reviews_refreshed_at = Some(now);
        }
        PollAction::MetricsUpdated(metrics) => {
            state.metrics = Some(metrics.clone());
            state.metrics_refreshed_at = Some(now);
        }
    }

    state
}
