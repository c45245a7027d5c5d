use crate::actions::{Action, GlobalAction, PollAction};
use crate::reducers::{
    diff_reducer, notification_reducer, poll_reducer, pull_request_reducer, review_reducer,
};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
///
/// This is the root reducer: it handles global actions and delegates the
/// scoped ones to the sub-reducers.
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) | Action::Global(GlobalAction::Close) => {
            state.running = false;
        }

        Action::Global(GlobalAction::KeyPressed(_)) | Action::Bootstrap(_) => {
            // Handled by middleware
        }

        Action::Poll(poll_action) => {
            state.remote = poll_reducer::reduce(state.remote, poll_action);
            if let PollAction::PullRequestsUpdated(_) = poll_action {
                state = pull_request_reducer::reconcile(state);
            }
        }

        Action::PullRequest(pr_action) => {
            state = pull_request_reducer::reduce(state, pr_action);
        }

        Action::Diff(diff_action) => {
            state.diff = diff_reducer::reduce(state.diff, diff_action);
        }

        Action::Review(review_action) => {
            state.review_job = review_reducer::reduce(
                state.review_job,
                state.selection.selected.as_ref(),
                review_action,
            );
        }

        Action::Notification(notification_action) => {
            state.notification =
                notification_reducer::reduce(state.notification, notification_action);
        }
    }

    state
}
