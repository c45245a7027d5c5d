use crate::view_models::dashboard_view_model::NotificationViewModel;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Toast in the bottom-right corner, above the status bar
pub fn render(vm: &NotificationViewModel, area: Rect, f: &mut Frame) {
    let width = (vm.text.chars().count() as u16 + 2).min(area.width);
    let height = 3u16.min(area.height);
    let toast_area = Rect {
        x: area.x + area.width - width,
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    };

    let paragraph = Paragraph::new(vm.text.as_str())
        .style(
            Style::default()
                .fg(Color::White)
                .bg(vm.color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White).bg(vm.color)),
        );

    f.render_widget(Clear, toast_area);
    f.render_widget(paragraph, toast_area);
}
