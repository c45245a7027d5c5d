use crate::theme::Theme;
use crate::view_models::dashboard_view_model::HeaderViewModel;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(vm: &HeaderViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .title(Span::styled(
            vm.title.as_str(),
            Style::default()
                .fg(theme.panel_title)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.panel_border));

    let trigger = Line::from(Span::styled(
        format!(" {} ", vm.trigger_text),
        Style::default()
            .fg(vm.trigger_color)
            .add_modifier(Modifier::BOLD),
    ));

    f.render_widget(
        Paragraph::new(trigger)
            .block(block)
            .alignment(Alignment::Right),
        area,
    );
}
