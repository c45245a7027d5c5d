//! Review Middleware
//!
//! Runs the AI review job for the selected pull request. At most one job runs
//! at a time: a `Run` while a job is running (or with nothing selected) is
//! consumed without issuing a request.
//!
//! Every started job ends with exactly one `ReviewAction::Finished`, even if
//! its task is aborted or panics, and every accepted `Finished` posts exactly
//! one notification.

use crate::actions::{Action, NotificationAction, ReviewAction, ReviewOutcome};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use pr_review_client::{Identifier, ReviewApi};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Reports the end of a review job exactly once
///
/// Dropping it without calling [`ReviewCompletion::finish`] reports a failure.
struct ReviewCompletion {
    pr_id: Option<Identifier>,
    dispatcher: Dispatcher,
}

impl ReviewCompletion {
    fn new(pr_id: Identifier, dispatcher: Dispatcher) -> Self {
        Self {
            pr_id: Some(pr_id),
            dispatcher,
        }
    }

    fn finish(mut self, outcome: ReviewOutcome) {
        self.report(outcome);
    }

    fn report(&mut self, outcome: ReviewOutcome) {
        if let Some(pr_id) = self.pr_id.take() {
            self.dispatcher
                .dispatch(Action::Review(ReviewAction::Finished { pr_id, outcome }));
        }
    }
}

impl Drop for ReviewCompletion {
    fn drop(&mut self) {
        if self.pr_id.is_some() {
            log::warn!("Review job ended without a result");
            self.report(ReviewOutcome::Failed(
                "Error running review: review task ended unexpectedly".to_string(),
            ));
        }
    }
}

pub struct ReviewMiddleware {
    api: Arc<dyn ReviewApi>,
    runtime: Handle,
}

impl ReviewMiddleware {
    pub fn new(api: Arc<dyn ReviewApi>, runtime: Handle) -> Self {
        Self { api, runtime }
    }

    fn run(&self, pr_id: Identifier, dispatcher: &Dispatcher) {
        log::info!("Running AI review for PR {}", pr_id);

        let api = self.api.clone();
        let completion = ReviewCompletion::new(pr_id.clone(), dispatcher.clone());
        self.runtime.spawn(async move {
            let outcome = match api.run_review(&pr_id).await {
                Ok(response) => match response.review_text() {
                    Some(text) => ReviewOutcome::Reviewed(text.to_string()),
                    None => ReviewOutcome::Pending,
                },
                Err(e) => {
                    log::warn!("Review for PR {} failed: {}", pr_id, e);
                    ReviewOutcome::Failed(format!("Error running review: {}", e))
                }
            };
            completion.finish(outcome);
        });
    }
}

impl Middleware for ReviewMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Review(ReviewAction::Run) => {
                let selected = state.selection.selected.as_ref();
                if !state.review_job.can_run(selected) {
                    log::debug!(
                        "Ignoring review request (selected: {}, running: {})",
                        selected.is_some(),
                        state.review_job.is_running()
                    );
                    return false;
                }

                if let Some(pr) = selected {
                    self.run(pr.id.clone(), dispatcher);
                }
                true // Reducer marks the job as running
            }

            Action::Review(ReviewAction::Finished { pr_id, outcome }) => {
                if !state.review_job.is_running()
                    || state.review_job.target.as_ref() != Some(pr_id)
                {
                    log::debug!("Ignoring result of an unknown review job for PR {}", pr_id);
                    return false;
                }

                dispatcher.dispatch(Action::Notification(NotificationAction::Show(
                    outcome.notification(),
                )));
                true
            }

            _ => true,
        }
    }
}
