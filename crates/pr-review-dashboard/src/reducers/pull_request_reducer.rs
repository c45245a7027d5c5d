//! Selection and list cursor
//!
//! Selecting a pull request always restarts its diff load with a fresh
//! ticket, so results of earlier loads can no longer apply.

use crate::actions::PullRequestAction;
use crate::state::AppState;
use pr_review_client::PullRequest;

pub fn reduce(mut state: AppState, action: &PullRequestAction) -> AppState {
    let len = state.remote.pull_requests().len();

    match action {
        PullRequestAction::NavigateNext => {
            if len > 0 {
                state.selection.cursor = (state.selection.cursor + 1).min(len - 1);
            }
        }
        PullRequestAction::NavigatePrevious => {
            state.selection.cursor = state.selection.cursor.saturating_sub(1);
        }
        PullRequestAction::OpenAtCursor => {
            // Translated into Select by middleware
        }
        PullRequestAction::Select(pr) => {
            select(&mut state, pr.clone());
        }
    }

    state
}

/// Apply a fresh pull request list: keep the cursor on the selected pull
/// request (clamped if it left the list) and auto-select
pub fn reconcile(mut state: AppState) -> AppState {
    let prs = state.remote.pull_requests.clone();
    let prs = prs.as_deref().map_or(&[][..], Vec::as_slice);

    let selected_index = state
        .selection
        .selected_id()
        .and_then(|id| prs.iter().position(|pr| &pr.id == id));
    state.selection.cursor = match selected_index {
        Some(index) => index,
        None => state.selection.cursor.min(prs.len().saturating_sub(1)),
    };

    if let Some(pr) = state.selection.auto_selection(prs) {
        let pr = pr.clone();
        select(&mut state, pr);
    }

    state
}

fn select(state: &mut AppState, pr: PullRequest) {
    let ticket = state.diff.next_ticket(&pr.id);
    log::debug!("Selected PR {} (diff generation {})", pr.id, ticket.generation);

    if let Some(index) = state
        .remote
        .pull_requests()
        .iter()
        .position(|candidate| candidate.id == pr.id)
    {
        state.selection.cursor = index;
    }

    state.diff.begin(ticket);
    state.selection.selected = Some(pr);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DiffStatus;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn pr(id: &str) -> PullRequest {
        PullRequest::new(id, 1, "title", "ana", "octo/app")
    }

    fn with_prs(ids: &[&str]) -> AppState {
        let mut state = AppState::default();
        state.remote.pull_requests = Some(Arc::new(ids.iter().map(|id| pr(id)).collect()));
        state
    }

    fn selected(state: &AppState) -> Option<&str> {
        state.selection.selected_id().map(|id| id.as_str())
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut state = with_prs(&["1", "2"]);

        state = reduce(state, &PullRequestAction::NavigatePrevious);
        assert_eq!(state.selection.cursor, 0);

        state = reduce(state, &PullRequestAction::NavigateNext);
        state = reduce(state, &PullRequestAction::NavigateNext);
        assert_eq!(state.selection.cursor, 1);
    }

    #[test]
    fn test_navigation_does_not_select() {
        let state = reduce(with_prs(&["1", "2"]), &PullRequestAction::NavigateNext);
        assert_eq!(selected(&state), None);
    }

    #[test]
    fn test_select_moves_cursor_and_starts_diff() {
        let state = reduce(with_prs(&["1", "2"]), &PullRequestAction::Select(pr("2")));

        assert_eq!(selected(&state), Some("2"));
        assert_eq!(state.selection.cursor, 1);
        assert_eq!(state.diff.status, DiffStatus::Loading);
        assert_eq!(
            state.diff.ticket.as_ref().map(|t| t.pr_id.as_str()),
            Some("2")
        );
    }

    #[test]
    fn test_reconcile_auto_selects_first_once() {
        let state = reconcile(with_prs(&[]));
        assert_eq!(selected(&state), None);
        assert_eq!(state.diff.status, DiffStatus::Empty);

        let mut state = reconcile(with_prs(&["1", "2"]));
        assert_eq!(selected(&state), Some("1"));
        let ticket = state.diff.ticket.clone();

        state.remote.pull_requests = Some(Arc::new(vec![pr("2"), pr("1")]));
        let state = reconcile(state);
        assert_eq!(selected(&state), Some("1"));
        assert_eq!(state.diff.ticket, ticket);
    }

    #[test]
    fn test_reconcile_cursor_follows_reordered_selection() {
        let mut state = reconcile(with_prs(&["1", "2", "3"]));
        state = reduce(state, &PullRequestAction::Select(pr("2")));
        assert_eq!(state.selection.cursor, 1);

        state.remote.pull_requests = Some(Arc::new(vec![pr("3"), pr("4"), pr("1"), pr("2")]));
        let state = reconcile(state);
        assert_eq!(selected(&state), Some("2"));
        assert_eq!(state.selection.cursor, 3);

        let mut state = state;
        state.remote.pull_requests = Some(Arc::new(vec![pr("5")]));
        let state = reconcile(state);
        assert_eq!(selected(&state), Some("2"));
        assert_eq!(state.selection.cursor, 0);
    }

    #[test]
    fn test_reconcile_keeps_selection_when_list_empties() {
        let mut state = reconcile(with_prs(&["1"]));
        state.diff.status = DiffStatus::Loaded("+x".to_string());

        state.remote.pull_requests = Some(Arc::new(Vec::new()));
        let state = reconcile(state);

        assert_eq!(selected(&state), Some("1"));
        assert_eq!(state.selection.cursor, 0);
        assert_eq!(state.diff.status, DiffStatus::Loaded("+x".to_string()));
    }
}
