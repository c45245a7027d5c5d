use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer;
use crate::state::AppState;

/// Store - holds the application state and runs actions through the
/// middleware chain and the reducer
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(),
        }
    }

    /// Add middleware to the chain; they run in insertion order
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Dispatch an action synchronously
    ///
    /// Middleware may consume the action; otherwise the reducer applies it.
    /// Actions dispatched by middleware are queued and picked up by the main
    /// loop (or [`Store::drain`]).
    pub fn dispatch(&mut self, action: Action) {
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                return;
            }
        }

        let state = std::mem::take(&mut self.state);
        self.state = app_reducer::reduce(state, &action);
    }

    /// Process queued actions until the queue is empty
    pub fn drain(&mut self) {
        while let Some(action) = self.dispatcher.pop() {
            self.dispatch(action);
        }
    }

    /// Drop all middleware, releasing pollers and timers they own
    pub fn shutdown(&mut self) {
        self.middleware.clear();
    }
}
