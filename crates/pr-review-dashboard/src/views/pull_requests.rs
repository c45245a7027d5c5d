use crate::theme::Theme;
use crate::view_models::dashboard_view_model::PullRequestListViewModel;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render(vm: &PullRequestListViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .title(Span::styled(
            vm.title.as_str(),
            Style::default().fg(theme.panel_title),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.panel_border));

    if let Some(empty_text) = &vm.empty_text {
        let paragraph = Paragraph::new(empty_text.as_str())
            .style(Style::default().fg(theme.text_muted))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = vm
        .rows
        .iter()
        .map(|row| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        row.title.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", row.status),
                        Style::default().fg(theme.text_muted),
                    ),
                ]),
                Line::from(Span::styled(
                    row.subtitle.as_str(),
                    Style::default().fg(theme.text_muted),
                )),
            ])
            .style(Style::default().fg(row.fg_color).bg(row.bg_color))
        })
        .collect();

    // Keep the cursor row scrolled into view
    let mut list_state = ListState::default().with_selected(Some(vm.cursor));
    f.render_stateful_widget(List::new(items).block(block), area, &mut list_state);
}
