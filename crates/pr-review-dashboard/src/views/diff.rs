use crate::theme::Theme;
use crate::view_models::dashboard_view_model::DiffViewModel;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(vm: &DiffViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .title(Span::styled(" Diff ", Style::default().fg(theme.panel_title)))
        .title_bottom(Line::from(format!(" {} ", vm.caption)).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.panel_border));

    let lines: Vec<Line> = if vm.is_diff {
        vm.text
            .lines()
            .skip(vm.scroll)
            .map(|line| Line::styled(line, Style::default().fg(line_color(line, theme))))
            .collect()
    } else {
        vec![Line::styled(vm.text.as_str(), Style::default().fg(vm.color))]
    };

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn line_color(line: &str, theme: &Theme) -> ratatui::style::Color {
    if line.starts_with("+++") || line.starts_with("---") {
        theme.text_muted
    } else if line.starts_with('+') {
        theme.diff_added
    } else if line.starts_with('-') {
        theme.diff_removed
    } else if line.starts_with("@@") {
        theme.diff_hunk
    } else {
        theme.text_primary
    }
}
