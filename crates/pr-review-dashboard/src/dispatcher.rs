use crate::actions::Action;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Queue of actions waiting to go through the middleware chain
///
/// Cloned into async tasks so their results come back as actions and are
/// applied one at a time by the main loop.
#[derive(Clone)]
pub struct Dispatcher {
    queue: Arc<Mutex<VecDeque<Action>>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            queue: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Dispatch an action to be processed
    pub fn dispatch(&self, action: Action) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push_back(action);
        }
    }

    /// Pop a single action from the queue (FIFO) - O(1)
    pub fn pop(&self) -> Option<Action> {
        if let Ok(mut queue) = self.queue.lock() {
            queue.pop_front()
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().map(|queue| queue.is_empty()).unwrap_or(true)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
