//! Rendering
//!
//! ```text
//! ┌ header ─────────────────────────────────────────────┐
//! │ PR list │ diff                   │ review / metrics │
//! └ status bar ─────────────────────────────────────────┘
//! ```

mod diff;
mod header;
mod notification;
mod pull_requests;
mod review_panel;
mod status_bar;

use crate::state::AppState;
use crate::view_models::DashboardViewModel;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

/// Render the whole dashboard
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let vm = DashboardViewModel::from_state(state);

    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(area);

    let [list_area, diff_area, review_area] = Layout::horizontal([
        Constraint::Percentage(25),
        Constraint::Percentage(50),
        Constraint::Percentage(25),
    ])
    .areas(body_area);

    header::render(&vm.header, &state.theme, header_area, f);
    pull_requests::render(&vm.pull_requests, &state.theme, list_area, f);
    diff::render(&vm.diff, &state.theme, diff_area, f);
    review_panel::render(&vm, &state.theme, review_area, f);
    status_bar::render(&vm.status_bar, &state.theme, status_area, f);

    if let Some(notification) = &vm.notification {
        notification::render(notification, area, f);
    }
}
