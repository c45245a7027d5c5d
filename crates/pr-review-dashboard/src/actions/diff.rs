//! Diff actions
//!
//! Results of a diff load are tagged with the ticket issued when the load was
//! started. The reducer drops results whose ticket is no longer current.

use crate::state::DiffTicket;

#[derive(Debug, Clone)]
pub enum DiffAction {
    /// Diff fetched successfully
    Loaded { ticket: DiffTicket, text: String },
    /// Diff fetch failed
    LoadError { ticket: DiffTicket, message: String },
    /// Scroll the diff pane down
    ScrollDown { lines: usize },
    ScrollUp { lines: usize },
}
