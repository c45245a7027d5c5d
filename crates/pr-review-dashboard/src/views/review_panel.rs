use crate::theme::Theme;
use crate::view_models::DashboardViewModel;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Right column: AI review, quick metrics and recent reviews
pub fn render(vm: &DashboardViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let [review_area, metrics_area, recent_area] = Layout::vertical([
        Constraint::Percentage(50),
        Constraint::Length(4),
        Constraint::Min(3),
    ])
    .areas(area);

    let review_title = if vm.review.running {
        " AI Review ⋯ "
    } else {
        " AI Review "
    };
    let review_lines: Vec<Line> = vm
        .review
        .text
        .lines()
        .skip(vm.review.scroll)
        .map(Line::raw)
        .collect();
    let review = Paragraph::new(review_lines)
        .style(Style::default().fg(vm.review.color))
        .wrap(Wrap { trim: false })
        .block(panel(review_title, theme));
    f.render_widget(review, review_area);

    let metrics = &vm.metrics;
    let label = Style::default().fg(theme.text_muted);
    let value = Style::default()
        .fg(theme.accent_primary)
        .add_modifier(Modifier::BOLD);
    let metrics_lines = vec![
        Line::from(vec![
            Span::styled(" PRs ", label),
            Span::styled(metrics.total.as_str(), value),
            Span::styled("   Issues ", label),
            Span::styled(metrics.issues.as_str(), value),
        ]),
        Line::from(vec![
            Span::styled(" Recent ", label),
            Span::styled(metrics.recent.as_str(), value),
        ]),
    ];
    f.render_widget(
        Paragraph::new(metrics_lines).block(panel(" Quick Metrics ", theme)),
        metrics_area,
    );

    let recent_lines: Vec<Line> = if vm.recent_reviews.is_empty() {
        vec![Line::styled("No review yet", label)]
    } else {
        vm.recent_reviews
            .iter()
            .flat_map(|review| {
                let mut title = vec![Span::styled(
                    review.title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )];
                if let Some(ts) = &review.timestamp {
                    title.push(Span::styled(format!("  {}", ts), label));
                }
                [
                    Line::from(title),
                    Line::styled(review.excerpt.as_str(), label),
                ]
            })
            .collect()
    };
    f.render_widget(
        Paragraph::new(recent_lines)
            .wrap(Wrap { trim: true })
            .block(panel(" Recent Reviews ", theme)),
        recent_area,
    );
}

fn panel<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(theme.panel_title)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.panel_border))
}
