//! Pull Request Middleware
//!
//! Handles side effects of selecting a pull request:
//! - Translates `OpenAtCursor` into `Select` for the PR under the cursor
//! - Issues a diff load for every selection, explicit or automatic
//! - Dispatches `DiffAction::Loaded` / `DiffAction::LoadError` tagged with the
//!   ticket the reducer will issue for that selection

use crate::actions::{Action, DiffAction, PollAction, PullRequestAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, DiffTicket};
use pr_review_client::ReviewApi;
use std::sync::Arc;
use tokio::runtime::Handle;

pub struct PullRequestMiddleware {
    api: Arc<dyn ReviewApi>,
    runtime: Handle,
}

impl PullRequestMiddleware {
    pub fn new(api: Arc<dyn ReviewApi>, runtime: Handle) -> Self {
        Self { api, runtime }
    }

    fn load_diff(&self, ticket: DiffTicket, dispatcher: &Dispatcher) {
        log::info!(
            "Loading diff for PR {} (generation {})",
            ticket.pr_id,
            ticket.generation
        );

        let api = self.api.clone();
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            match api.pull_request_diff(&ticket.pr_id).await {
                Ok(text) => {
                    dispatcher.dispatch(Action::Diff(DiffAction::Loaded { ticket, text }));
                }
                Err(e) => {
                    log::warn!("Failed to load diff for PR {}: {}", ticket.pr_id, e);
                    dispatcher.dispatch(Action::Diff(DiffAction::LoadError {
                        ticket,
                        message: e.to_string(),
                    }));
                }
            }
        });
    }
}

impl Middleware for PullRequestMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::PullRequest(PullRequestAction::OpenAtCursor) => {
                match state.remote.pull_requests().get(state.selection.cursor) {
                    Some(pr) => {
                        dispatcher.dispatch(Action::PullRequest(PullRequestAction::Select(
                            pr.clone(),
                        )));
                    }
                    None => log::debug!("OpenAtCursor: no pull request under the cursor"),
                }
                false // Consume action
            }

            Action::PullRequest(PullRequestAction::Select(pr)) => {
                self.load_diff(state.diff.next_ticket(&pr.id), dispatcher);
                true // Reducer switches the selection
            }

            Action::Poll(PollAction::PullRequestsUpdated(prs)) => {
                if let Some(pr) = state.selection.auto_selection(prs) {
                    log::info!("Auto-selecting PR {}", pr.id);
                    self.load_diff(state.diff.next_ticket(&pr.id), dispatcher);
                }
                true
            }

            _ => true,
        }
    }
}
