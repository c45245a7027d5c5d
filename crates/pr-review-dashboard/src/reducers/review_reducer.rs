use crate::actions::{ReviewAction, ReviewOutcome};
use crate::state::{ReviewJobState, ReviewJobStatus, REVIEW_PENDING_TEXT};
use pr_review_client::PullRequest;

pub fn reduce(
    mut state: ReviewJobState,
    selected: Option<&PullRequest>,
    action: &ReviewAction,
) -> ReviewJobState {
    match action {
        ReviewAction::Run => {
            if !state.can_run(selected) {
                return state;
            }
            state.status = ReviewJobStatus::Running;
            state.target = selected.map(|pr| pr.id.clone());
            state.scroll = 0;
        }

        ReviewAction::Finished { pr_id, outcome } => {
            // Only the running job can finish, and only once
            if !state.is_running() || state.target.as_ref() != Some(pr_id) {
                return state;
            }
            state.status = match outcome {
                ReviewOutcome::Reviewed(text) => ReviewJobStatus::Succeeded(text.clone()),
                ReviewOutcome::Pending => {
                    ReviewJobStatus::Succeeded(REVIEW_PENDING_TEXT.to_string())
                }
                ReviewOutcome::Failed(message) => ReviewJobStatus::Failed(message.clone()),
            };
            state.scroll = 0;
        }

        ReviewAction::ScrollDown { lines } => state.scroll_down(*lines),
        ReviewAction::ScrollUp { lines } => state.scroll_up(*lines),
    }

    state
}
