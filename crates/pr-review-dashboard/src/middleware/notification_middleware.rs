//! Notification Middleware
//!
//! Schedules the auto-dismissal of toast notifications. Each shown
//! notification gets one timer; showing a new one aborts the pending timer.
//! The timer dispatches `Dismiss(seq)` for the notification it belongs to.

use crate::actions::{Action, NotificationAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub struct NotificationMiddleware {
    runtime: Handle,
    dismiss_timer: Option<JoinHandle<()>>,
}

impl NotificationMiddleware {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            dismiss_timer: None,
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.dismiss_timer.take() {
            timer.abort();
        }
    }
}

impl Middleware for NotificationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Notification(NotificationAction::Show(_)) = action {
            self.cancel_timer();

            let seq = state.notification.next_seq();
            let timeout = state.app_config.notification_timeout();
            let dispatcher = dispatcher.clone();
            self.dismiss_timer = Some(self.runtime.spawn(async move {
                tokio::time::sleep(timeout).await;
                dispatcher.dispatch(Action::Notification(NotificationAction::Dismiss(seq)));
            }));
        }

        true
    }
}

impl Drop for NotificationMiddleware {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Notification, NotificationKind};
    use crate::store::Store;
    use crate::test_support::{advance, settle};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn store() -> Store {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(NotificationMiddleware::new(Handle::current())));
        store
    }

    fn show(text: &str) -> Action {
        Action::Notification(NotificationAction::Show(Notification::new(
            NotificationKind::Success,
            text,
        )))
    }

    fn current_text(store: &Store) -> Option<String> {
        store
            .state()
            .notification
            .current
            .as_ref()
            .map(|n| n.notification.text.clone())
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_is_dismissed_after_timeout() {
        let mut store = store();

        store.dispatch(show("Review Complete"));
        advance(&mut store, Duration::from_millis(3_900)).await;
        assert_eq!(current_text(&store), Some("Review Complete".to_string()));

        advance(&mut store, Duration::from_millis(200)).await;
        assert_eq!(current_text(&store), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_notification_restarts_timer() {
        let mut store = store();

        store.dispatch(show("first"));
        advance(&mut store, Duration::from_millis(3_000)).await;
        store.dispatch(show("second"));

        // The first timer would have fired here
        advance(&mut store, Duration::from_millis(1_500)).await;
        assert_eq!(current_text(&store), Some("second".to_string()));

        advance(&mut store, Duration::from_millis(3_000)).await;
        assert_eq!(current_text(&store), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_dismissal_is_ignored() {
        let mut store = store();

        store.dispatch(show("first"));
        let stale = store.state().notification.current.as_ref().map(|n| n.seq);
        store.dispatch(show("second"));
        if let Some(seq) = stale {
            store.dispatch(Action::Notification(NotificationAction::Dismiss(seq)));
        }
        settle(&mut store).await;

        assert_eq!(current_text(&store), Some("second".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_timer() {
        let mut store = store();

        store.dispatch(show("bye"));
        store.shutdown();
        advance(&mut store, Duration::from_secs(10)).await;

        assert!(store.dispatcher().is_empty());
        assert_eq!(current_text(&store), Some("bye".to_string()));
    }
}
