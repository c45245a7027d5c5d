use crate::actions::DiffAction;
use crate::state::{DiffState, DiffStatus, DiffTicket, DIFF_NO_CONTENT_TEXT};

/// Apply a diff load result if its ticket is still current, or scroll
pub fn reduce(mut state: DiffState, action: &DiffAction) -> DiffState {
    match action {
        DiffAction::Loaded { ticket, text } => {
            if !state.is_current(ticket) {
                log_discarded(ticket);
                return state;
            }
            state.status = if text.is_empty() {
                DiffStatus::Loaded(DIFF_NO_CONTENT_TEXT.to_string())
            } else {
                DiffStatus::Loaded(text.clone())
            };
        }
        DiffAction::LoadError { ticket, message } => {
            if !state.is_current(ticket) {
                log_discarded(ticket);
                return state;
            }
            state.status = DiffStatus::Error(format!("Error loading diff: {}", message));
        }
        DiffAction::ScrollDown { lines } => state.scroll_down(*lines),
        DiffAction::ScrollUp { lines } => state.scroll_up(*lines),
    }

    state
}

fn log_discarded(ticket: &DiffTicket) {
    log::debug!(
        "Discarding stale diff for PR {} (generation {})",
        ticket.pr_id,
        ticket.generation
    );
}
