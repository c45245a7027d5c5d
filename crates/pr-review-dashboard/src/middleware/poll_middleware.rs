//! Poll Middleware
//!
//! Owns the three pollers (pull requests, reviews, metrics):
//! - Starts them on `BootstrapAction::Start` with the configured intervals
//! - Feeds every committed snapshot back as a `PollAction`
//! - Stops them on close/quit, and when the middleware is dropped

use crate::actions::{Action, BootstrapAction, GlobalAction, PollAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use pr_review_client::{Metrics, PullRequest, Review, ReviewApi};
use pr_review_config::AppConfig;
use pr_review_poller::Poller;
use std::sync::Arc;
use tokio::runtime::Handle;

struct Pollers {
    pull_requests: Poller<Vec<PullRequest>>,
    reviews: Poller<Vec<Review>>,
    metrics: Poller<Metrics>,
}

impl Pollers {
    fn new(api: &Arc<dyn ReviewApi>, config: &AppConfig) -> Self {
        let pull_requests = {
            let api = api.clone();
            Poller::new("pull_requests", config.pull_requests_interval(), move || {
                let api = api.clone();
                async move { api.list_pull_requests().await }
            })
        };
        let reviews = {
            let api = api.clone();
            Poller::new("reviews", config.reviews_interval(), move || {
                let api = api.clone();
                async move { api.list_reviews().await }
            })
        };
        let metrics = {
            let api = api.clone();
            Poller::new("metrics", config.metrics_interval(), move || {
                let api = api.clone();
                async move { api.metrics().await }
            })
        };

        Self {
            pull_requests,
            reviews,
            metrics,
        }
    }

    fn start(&mut self, runtime: &Handle, dispatcher: &Dispatcher) {
        let d = dispatcher.clone();
        self.pull_requests.start(runtime, move |prs| {
            d.dispatch(Action::Poll(PollAction::PullRequestsUpdated(prs)))
        });
        let d = dispatcher.clone();
        self.reviews.start(runtime, move |reviews| {
            d.dispatch(Action::Poll(PollAction::ReviewsUpdated(reviews)))
        });
        let d = dispatcher.clone();
        self.metrics.start(runtime, move |metrics| {
            d.dispatch(Action::Poll(PollAction::MetricsUpdated(metrics)))
        });
    }

    /// "pull_requests every 10s, ..." for the startup log
    fn describe(&self) -> String {
        [
            (self.pull_requests.name(), self.pull_requests.interval()),
            (self.reviews.name(), self.reviews.interval()),
            (self.metrics.name(), self.metrics.interval()),
        ]
        .iter()
        .map(|(name, interval)| format!("{} every {:?}", name, interval))
        .collect::<Vec<_>>()
        .join(", ")
    }

    fn stop(&mut self) {
        self.pull_requests.stop();
        self.reviews.stop();
        self.metrics.stop();
    }
}

/// Middleware driving the background refresh of the remote collections
///
/// The pollers live as long as the middleware; dropping it stops them.
pub struct PollMiddleware {
    api: Arc<dyn ReviewApi>,
    runtime: Handle,
    pollers: Option<Pollers>,
}

impl PollMiddleware {
    pub fn new(api: Arc<dyn ReviewApi>, runtime: Handle) -> Self {
        Self {
            api,
            runtime,
            pollers: None,
        }
    }
}

impl Middleware for PollMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                let pollers = self
                    .pollers
                    .get_or_insert_with(|| Pollers::new(&self.api, &state.app_config));
                pollers.start(&self.runtime, dispatcher);
                log::info!("PollMiddleware: polling {}", pollers.describe());
                true
            }

            Action::Global(GlobalAction::Close | GlobalAction::Quit) => {
                if let Some(pollers) = self.pollers.as_mut() {
                    pollers.stop();
                    log::info!("PollMiddleware: pollers stopped");
                }
                true
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use crate::test_support::{advance, pr, settle, FakeApi};
    use std::time::Duration;

    fn store_with(api: Arc<FakeApi>) -> Store {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(PollMiddleware::new(api, Handle::current())));
        store
    }

    #[tokio::test(start_paused = true)]
    async fn test_bootstrap_polls_immediately() {
        let api = Arc::new(FakeApi::default());
        api.set_pull_requests(Ok(vec![pr("1"), pr("2")]));
        let mut store = store_with(api.clone());

        store.dispatch(Action::Bootstrap(BootstrapAction::Start));
        settle(&mut store).await;

        assert_eq!(FakeApi::calls(&api.pull_request_calls), 1);
        assert_eq!(store.state().remote.pull_requests().len(), 2);
        assert!(store.state().remote.reviews.is_some());
        assert!(store.state().remote.metrics.is_some());
        assert!(store.state().remote.pull_requests_refreshed_at.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_poll_keeps_previous_list() {
        let api = Arc::new(FakeApi::default());
        api.set_pull_requests(Ok(vec![pr("1")]));
        let mut store = store_with(api.clone());

        store.dispatch(Action::Bootstrap(BootstrapAction::Start));
        settle(&mut store).await;

        api.set_pull_requests(Err(503));
        advance(
            &mut store,
            AppConfig::default().pull_requests_interval() + Duration::from_millis(1),
        )
        .await;

        assert_eq!(FakeApi::calls(&api.pull_request_calls), 2);
        assert_eq!(store.state().remote.pull_requests().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_stops_polling() {
        let api = Arc::new(FakeApi::default());
        let mut store = store_with(api.clone());

        store.dispatch(Action::Bootstrap(BootstrapAction::Start));
        settle(&mut store).await;
        store.dispatch(Action::Global(GlobalAction::Quit));

        advance(&mut store, Duration::from_secs(60)).await;

        assert_eq!(FakeApi::calls(&api.pull_request_calls), 1);
        assert!(!store.state().running);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_polling() {
        let api = Arc::new(FakeApi::default());
        let mut store = store_with(api.clone());

        store.dispatch(Action::Bootstrap(BootstrapAction::Start));
        settle(&mut store).await;
        store.shutdown();

        advance(&mut store, Duration::from_secs(60)).await;

        assert_eq!(FakeApi::calls(&api.pull_request_calls), 1);
    }
}
