use crate::theme::Theme;
use crate::view_models::dashboard_view_model::StatusBarViewModel;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render key hints on the left and last refresh times on the right
pub fn render(vm: &StatusBarViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let [hints_area, refresh_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(52)]).areas(area);

    let mut spans = Vec::new();
    for (key, description) in &vm.key_hints {
        spans.push(Span::styled(
            format!(" {}", key),
            Style::default().fg(theme.key_hint),
        ));
        spans.push(Span::styled(
            format!(" {} ", description),
            Style::default().fg(theme.key_description),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), hints_area);

    f.render_widget(
        Paragraph::new(vm.refresh_text.as_str())
            .style(Style::default().fg(theme.text_muted))
            .alignment(Alignment::Right),
        refresh_area,
    );
}
