//! View model for the dashboard screen
//!
//! Derives everything the views render from the state: placeholder texts,
//! review attribution, metric defaults, colors. The views only lay it out.

use crate::state::{AppState, DiffStatus, NotificationKind, ReviewJobStatus, DIFF_LOADING_TEXT};
use crate::theme::Theme;
use chrono::{DateTime, Local};
use pr_review_client::{PullRequest, Review};
use ratatui::style::Color;

pub const NO_SELECTION_DIFF_TEXT: &str = "Select a PR to view the diff.";
pub const NO_REVIEW_TEXT: &str = "No review yet. Press r to run a review.";

/// Length of the excerpt shown for a review without summary
const EXCERPT_CHARS: usize = 80;

#[derive(Debug, Clone)]
pub struct DashboardViewModel {
    pub header: HeaderViewModel,
    pub pull_requests: PullRequestListViewModel,
    pub diff: DiffViewModel,
    pub review: ReviewViewModel,
    pub metrics: MetricsViewModel,
    pub recent_reviews: Vec<RecentReviewViewModel>,
    pub status_bar: StatusBarViewModel,
    pub notification: Option<NotificationViewModel>,
}

#[derive(Debug, Clone)]
pub struct HeaderViewModel {
    pub title: String,
    /// "[r] Run Review" or "Running..."
    pub trigger_text: String,
    pub trigger_color: Color,
}

#[derive(Debug, Clone)]
pub struct PullRequestListViewModel {
    pub title: String,
    pub rows: Vec<PrRowViewModel>,
    /// Shown instead of rows when there are none
    pub empty_text: Option<String>,
    pub cursor: usize,
}

#[derive(Debug, Clone)]
pub struct PrRowViewModel {
    pub title: String,
    /// "#12 · octo/app · ana"
    pub subtitle: String,
    pub status: String,
    pub fg_color: Color,
    pub bg_color: Color,
}

#[derive(Debug, Clone)]
pub struct DiffViewModel {
    /// "PR #12" or "No PR selected"
    pub caption: String,
    pub text: String,
    /// Only loaded diffs get +/- coloring
    pub is_diff: bool,
    pub color: Color,
    /// Lines scrolled past
    pub scroll: usize,
}

#[derive(Debug, Clone)]
pub struct ReviewViewModel {
    pub text: String,
    pub color: Color,
    pub running: bool,
    pub scroll: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsViewModel {
    pub total: String,
    pub issues: String,
    pub recent: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentReviewViewModel {
    pub title: String,
    pub excerpt: String,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    /// "PRs 12:00:01 · Reviews 12:00:02 · Metrics --:--:--"
    pub refresh_text: String,
    /// (key, description) pairs
    pub key_hints: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct NotificationViewModel {
    pub text: String,
    pub color: Color,
}

impl DashboardViewModel {
    /// Transform state into display-ready view model
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;

        Self {
            header: Self::build_header(state, theme),
            pull_requests: Self::build_pull_requests(state, theme),
            diff: Self::build_diff(state, theme),
            review: Self::build_review(state, theme),
            metrics: Self::build_metrics(state),
            recent_reviews: Self::build_recent_reviews(state),
            status_bar: Self::build_status_bar(state),
            notification: Self::build_notification(state, theme),
        }
    }

    fn build_header(state: &AppState, theme: &Theme) -> HeaderViewModel {
        let job = &state.review_job;
        let (trigger_text, trigger_color) = if job.is_running() {
            ("Running...".to_string(), theme.status_warning)
        } else if job.can_run(state.selection.selected.as_ref()) {
            ("[r] Run Review".to_string(), theme.accent_primary)
        } else {
            ("[r] Run Review".to_string(), theme.text_muted)
        };

        HeaderViewModel {
            title: " PR Review Dashboard ".to_string(),
            trigger_text,
            trigger_color,
        }
    }

    fn build_pull_requests(state: &AppState, theme: &Theme) -> PullRequestListViewModel {
        let prs = state.remote.pull_requests();
        let selected = state.selection.selected_id();

        let rows = prs
            .iter()
            .enumerate()
            .map(|(index, pr)| {
                let is_selected = selected == Some(&pr.id);
                let is_cursor = index == state.selection.cursor;
                Self::build_row(pr, is_selected, is_cursor, theme)
            })
            .collect();

        let empty_text = match &state.remote.pull_requests {
            None => Some("Loading pull requests...".to_string()),
            Some(prs) if prs.is_empty() => Some("No open requests".to_string()),
            Some(_) => None,
        };

        PullRequestListViewModel {
            title: format!(" Open Pull Requests ({}) ", prs.len()),
            rows,
            empty_text,
            cursor: state.selection.cursor,
        }
    }

    fn build_row(pr: &PullRequest, is_selected: bool, is_cursor: bool, theme: &Theme) -> PrRowViewModel {
        let (fg_color, bg_color) = if is_selected {
            (theme.selected_fg, theme.selected_bg)
        } else if is_cursor {
            (theme.text_primary, theme.cursor_bg)
        } else {
            (theme.text_primary, Color::Reset)
        };

        let marker = if is_selected { "▶ " } else { "  " };

        PrRowViewModel {
            title: format!("{}{}", marker, pr.title),
            subtitle: format!("  #{} · {} · {}", pr.number, pr.repo, pr.author),
            status: pr.status().to_string(),
            fg_color,
            bg_color,
        }
    }

    fn build_diff(state: &AppState, theme: &Theme) -> DiffViewModel {
        let caption = match &state.selection.selected {
            Some(pr) => format!("PR #{}", pr.number),
            None => "No PR selected".to_string(),
        };

        let (text, is_diff, color) = match &state.diff.status {
            DiffStatus::Empty => (NO_SELECTION_DIFF_TEXT.to_string(), false, theme.text_muted),
            DiffStatus::Loading => (DIFF_LOADING_TEXT.to_string(), false, theme.text_muted),
            DiffStatus::Loaded(text) => (text.clone(), true, theme.text_primary),
            DiffStatus::Error(message) => (message.clone(), false, theme.status_error),
        };

        DiffViewModel {
            caption,
            text,
            is_diff,
            color,
            scroll: state.diff.scroll,
        }
    }

    fn build_review(state: &AppState, theme: &Theme) -> ReviewViewModel {
        let job = &state.review_job;
        let attributed = state
            .selection
            .selected_id()
            .and_then(|id| job.text_for(id));

        let (text, color, scroll) = match attributed {
            None => (NO_REVIEW_TEXT.to_string(), theme.text_muted, 0),
            Some(text) => {
                let color = match job.status {
                    ReviewJobStatus::Running => theme.status_warning,
                    ReviewJobStatus::Failed(_) => theme.status_error,
                    _ => theme.text_primary,
                };
                (text.to_string(), color, job.scroll)
            }
        };

        ReviewViewModel {
            text,
            color,
            running: job.is_running(),
            scroll,
        }
    }

    fn build_metrics(state: &AppState) -> MetricsViewModel {
        let (total, issues, recent) = state
            .remote
            .metrics
            .as_deref()
            .map_or((0, 0, 0), |m| (m.total, m.issues, m.recent.len()));

        MetricsViewModel {
            total: total.to_string(),
            issues: issues.to_string(),
            recent: recent.to_string(),
        }
    }

    fn build_recent_reviews(state: &AppState) -> Vec<RecentReviewViewModel> {
        state
            .remote
            .reviews()
            .iter()
            .take(state.app_config.recent_reviews_limit)
            .map(|review| RecentReviewViewModel {
                title: review_title(review),
                excerpt: review_excerpt(review),
                timestamp: review
                    .timestamp
                    .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string()),
            })
            .collect()
    }

    fn build_status_bar(state: &AppState) -> StatusBarViewModel {
        let remote = &state.remote;
        let refresh_text = format!(
            "PRs {} · Reviews {} · Metrics {}",
            format_refresh(remote.pull_requests_refreshed_at.as_ref()),
            format_refresh(remote.reviews_refreshed_at.as_ref()),
            format_refresh(remote.metrics_refreshed_at.as_ref()),
        );

        // One hint per command, using its first binding
        let mut key_hints: Vec<(String, String)> = Vec::new();
        let mut seen = Vec::new();
        for binding in state.keymap.bindings() {
            if seen.contains(&binding.command) {
                continue;
            }
            seen.push(binding.command);
            key_hints.push((binding.label.to_string(), binding.command.title().to_string()));
        }

        StatusBarViewModel {
            refresh_text,
            key_hints,
        }
    }

    fn build_notification(state: &AppState, theme: &Theme) -> Option<NotificationViewModel> {
        state.notification.current.as_ref().map(|active| {
            let (icon, color) = match active.notification.kind {
                NotificationKind::Success => ("✓", theme.status_success),
                NotificationKind::Error => ("✗", theme.status_error),
            };
            NotificationViewModel {
                text: format!(" {} {} ", icon, active.notification.text),
                color,
            }
        })
    }
}

/// Title of the reviewed pull request, or its id when the backend sent none
fn review_title(review: &Review) -> String {
    if !review.pr.title.is_empty() {
        return review.pr.title.clone();
    }
    match &review.pr_id {
        Some(pr_id) => format!("PR {}", pr_id),
        None => format!("Review {}", review.id),
    }
}

/// Summary if present, otherwise the start of the review text
fn review_excerpt(review: &Review) -> String {
    match review.summary.as_deref().filter(|s| !s.is_empty()) {
        Some(summary) => summary.to_string(),
        None => review
            .review
            .as_deref()
            .unwrap_or_default()
            .chars()
            .take(EXCERPT_CHARS)
            .collect(),
    }
}

fn format_refresh(at: Option<&DateTime<Local>>) -> String {
    at.map_or_else(
        || "--:--:--".to_string(),
        |at| at.format("%H:%M:%S").to_string(),
    )
}
