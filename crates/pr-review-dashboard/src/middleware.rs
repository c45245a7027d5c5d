//! Middleware system
//!
//! Middleware sits between action dispatch and reducer execution and handles
//! side effects: polling, HTTP requests, timers and logging.
//!
//! ```text
//! Action → Middleware Chain → Reducer → State
//! ```
//!
//! Each middleware can:
//! - Inspect actions and the state the reducer is about to transform
//! - Dispatch new actions (queued, processed after the current one)
//! - Spawn async work that reports back through the Dispatcher
//! - Block the action from continuing (return false)

pub mod keyboard_middleware;
pub mod logging_middleware;
pub mod notification_middleware;
pub mod poll_middleware;
pub mod pull_request_middleware;
pub mod review_middleware;

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

/// Middleware trait - handles actions before they reach the reducer
pub trait Middleware {
    /// Handle an action
    ///
    /// # Returns
    /// - `true`: Continue to next middleware/reducer
    /// - `false`: Block this action from continuing
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
