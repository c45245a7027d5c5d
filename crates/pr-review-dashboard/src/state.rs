use crate::keymap::{default_keymap, Keymap};
use crate::theme::Theme;
use chrono::{DateTime, Local};
use pr_review_client::{Identifier, Metrics, PullRequest, Review};
use pr_review_config::AppConfig;
use std::sync::Arc;

/// Shown in place of a diff that is still being fetched
pub const DIFF_LOADING_TEXT: &str = "Loading diff...";
/// Shown when the backend returned an empty diff
pub const DIFF_NO_CONTENT_TEXT: &str = "(no diff provided)";
/// Shown while a review job is running
pub const REVIEW_RUNNING_TEXT: &str = "Running AI review...";
/// Shown when the backend accepted a review request but returned no text
pub const REVIEW_PENDING_TEXT: &str =
    "Review triggered. It may be processing; refresh for results.";
/// Lines moved by one page of scrolling
pub const SCROLL_PAGE_LINES: usize = 20;

/// Index of the last line of `text`, the furthest a pane may scroll
fn last_line(text: &str) -> usize {
    text.lines().count().saturating_sub(1)
}

/// Snapshots owned by the pollers, shared read-only
#[derive(Debug, Clone, Default)]
pub struct RemoteState {
    pub pull_requests: Option<Arc<Vec<PullRequest>>>,
    pub reviews: Option<Arc<Vec<Review>>>,
    pub metrics: Option<Arc<Metrics>>,
    pub pull_requests_refreshed_at: Option<DateTime<Local>>,
    pub reviews_refreshed_at: Option<DateTime<Local>>,
    pub metrics_refreshed_at: Option<DateTime<Local>>,
}

impl RemoteState {
    /// Pull requests from the latest poll, empty before the first one
    pub fn pull_requests(&self) -> &[PullRequest] {
        self.pull_requests.as_deref().map_or(&[], Vec::as_slice)
    }

    pub fn reviews(&self) -> &[Review] {
        self.reviews.as_deref().map_or(&[], Vec::as_slice)
    }
}

/// Which pull request is selected, and where the list cursor is
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pub selected: Option<PullRequest>,
    /// Keyboard cursor in the list; moving it does not select
    pub cursor: usize,
}

impl SelectionState {
    pub fn selected_id(&self) -> Option<&Identifier> {
        self.selected.as_ref().map(|pr| &pr.id)
    }

    /// The pull request to auto-select for a fresh list, if any
    ///
    /// Only fires while nothing is selected, so once a selection exists
    /// later polls never change it, whatever their contents.
    pub fn auto_selection<'a>(&self, pull_requests: &'a [PullRequest]) -> Option<&'a PullRequest> {
        if self.selected.is_some() {
            return None;
        }
        pull_requests.first()
    }
}

/// Identifies one diff load
///
/// Issued when a pull request is selected; a result is applied only while its
/// ticket is still the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTicket {
    pub pr_id: Identifier,
    pub generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DiffStatus {
    #[default]
    Empty,
    Loading,
    Loaded(String),
    Error(String),
}

#[derive(Debug, Clone, Default)]
pub struct DiffState {
    pub status: DiffStatus,
    pub ticket: Option<DiffTicket>,
    /// First diff line shown in the pane
    pub scroll: usize,
    generation: u64,
}

impl DiffState {
    /// The ticket the next load for `pr_id` will carry
    pub fn next_ticket(&self, pr_id: &Identifier) -> DiffTicket {
        DiffTicket {
            pr_id: pr_id.clone(),
            generation: self.generation + 1,
        }
    }

    /// Enter the loading state for `ticket`, invalidating any earlier load
    pub fn begin(&mut self, ticket: DiffTicket) {
        self.generation = ticket.generation;
        self.ticket = Some(ticket);
        self.status = DiffStatus::Loading;
        self.scroll = 0;
    }

    pub fn is_current(&self, ticket: &DiffTicket) -> bool {
        self.ticket.as_ref() == Some(ticket)
    }

    /// Scroll down, stopping with the last line at the top of the pane
    pub fn scroll_down(&mut self, lines: usize) {
        let max = match &self.status {
            DiffStatus::Loaded(text) => last_line(text),
            _ => 0,
        };
        self.scroll = (self.scroll + lines).min(max);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReviewJobStatus {
    #[default]
    Idle,
    Running,
    Succeeded(String),
    Failed(String),
}

/// The AI review job; at most one runs at a time
#[derive(Debug, Clone, Default)]
pub struct ReviewJobState {
    pub status: ReviewJobStatus,
    /// Pull request the current (or last) job was run for
    pub target: Option<Identifier>,
    /// First review line shown in the pane
    pub scroll: usize,
}

impl ReviewJobState {
    pub fn is_running(&self) -> bool {
        self.status == ReviewJobStatus::Running
    }

    /// Whether a new job may start for `selected`
    pub fn can_run(&self, selected: Option<&PullRequest>) -> bool {
        selected.is_some() && !self.is_running()
    }

    /// Text the job has to show, `None` while idle
    pub fn text(&self) -> Option<&str> {
        match &self.status {
            ReviewJobStatus::Idle => None,
            ReviewJobStatus::Running => Some(REVIEW_RUNNING_TEXT),
            ReviewJobStatus::Succeeded(text) | ReviewJobStatus::Failed(text) => Some(text),
        }
    }

    /// Text for the pull request `pr_id`, if the job was run for it
    pub fn text_for(&self, pr_id: &Identifier) -> Option<&str> {
        if self.target.as_ref() != Some(pr_id) {
            return None;
        }
        self.text()
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let max = self.text().map_or(0, last_line);
        self.scroll = (self.scroll + lines).min(max);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// A notification on screen, numbered so a dismissal only hits its own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNotification {
    pub seq: u64,
    pub notification: Notification,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    pub current: Option<ActiveNotification>,
    seq: u64,
}

impl NotificationState {
    /// Sequence number the next shown notification will get
    pub fn next_seq(&self) -> u64 {
        self.seq + 1
    }

    pub fn show(&mut self, notification: Notification) {
        self.seq = self.next_seq();
        self.current = Some(ActiveNotification {
            seq: self.seq,
            notification,
        });
    }

    /// Dismiss the notification numbered `seq`; later ones are left alone
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.seq == seq) {
            self.current = None;
            return true;
        }
        false
    }
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub app_config: AppConfig,
    pub keymap: Keymap,
    pub theme: Theme,
    pub remote: RemoteState,
    pub selection: SelectionState,
    pub diff: DiffState,
    pub review_job: ReviewJobState,
    pub notification: NotificationState,
}

impl AppState {
    pub fn new(app_config: AppConfig) -> Self {
        Self {
            running: true,
            app_config,
            keymap: default_keymap(),
            theme: Theme::default(),
            remote: RemoteState::default(),
            selection: SelectionState::default(),
            diff: DiffState::default(),
            review_job: ReviewJobState::default(),
            notification: NotificationState::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pr(id: &str) -> PullRequest {
        PullRequest::new(id, 1, "title", "ana", "x")
    }

    #[test]
    fn test_auto_selection_only_without_selection() {
        let mut selection = SelectionState::default();
        let prs = vec![pr("1"), pr("2")];

        assert_eq!(selection.auto_selection(&prs).map(|p| p.id.as_str()), Some("1"));
        assert!(selection.auto_selection(&[]).is_none());

        selection.selected = Some(pr("2"));
        assert!(selection.auto_selection(&prs).is_none());
    }

    #[test]
    fn test_diff_tickets_advance() {
        let mut diff = DiffState::default();
        let first = diff.next_ticket(&Identifier::new("a"));
        diff.begin(first.clone());

        let second = diff.next_ticket(&Identifier::new("a"));
        assert_ne!(first, second);

        diff.begin(second.clone());
        assert!(!diff.is_current(&first));
        assert!(diff.is_current(&second));
        assert_eq!(diff.status, DiffStatus::Loading);
    }

    #[test]
    fn test_diff_scroll_is_clamped_and_reset() {
        let mut diff = DiffState::default();
        diff.scroll_down(5);
        assert_eq!(diff.scroll, 0);

        diff.begin(diff.next_ticket(&Identifier::new("1")));
        diff.status = DiffStatus::Loaded("a\nb\nc".to_string());
        diff.scroll_down(SCROLL_PAGE_LINES);
        assert_eq!(diff.scroll, 2);
        diff.scroll_up(1);
        assert_eq!(diff.scroll, 1);
        diff.scroll_up(SCROLL_PAGE_LINES);
        assert_eq!(diff.scroll, 0);

        diff.scroll_down(2);
        diff.begin(diff.next_ticket(&Identifier::new("2")));
        assert_eq!(diff.scroll, 0);
    }

    #[test]
    fn test_review_scroll_is_clamped() {
        let mut job = ReviewJobState::default();
        job.scroll_down(3);
        assert_eq!(job.scroll, 0);

        job.status = ReviewJobStatus::Succeeded("one\ntwo".to_string());
        job.scroll_down(3);
        assert_eq!(job.scroll, 1);
    }

    #[test]
    fn test_review_text_is_attributed() {
        let job = ReviewJobState {
            status: ReviewJobStatus::Succeeded("- fine".to_string()),
            target: Some(Identifier::new("1")),
            scroll: 0,
        };

        assert_eq!(job.text_for(&Identifier::new("1")), Some("- fine"));
        assert_eq!(job.text_for(&Identifier::new("2")), None);
    }

    #[test]
    fn test_can_run_requires_selection_and_idle_job() {
        let mut job = ReviewJobState::default();
        assert!(!job.can_run(None));
        assert!(job.can_run(Some(&pr("1"))));

        job.status = ReviewJobStatus::Running;
        assert!(!job.can_run(Some(&pr("1"))));
    }

    #[test]
    fn test_dismiss_only_matching_notification() {
        let mut state = NotificationState::default();
        state.show(Notification::new(NotificationKind::Success, "first"));
        let first = state.current.as_ref().unwrap().seq;
        state.show(Notification::new(NotificationKind::Error, "second"));

        assert!(!state.dismiss(first));
        assert_eq!(state.current.as_ref().unwrap().notification.text, "second");

        let second = state.current.as_ref().unwrap().seq;
        assert!(state.dismiss(second));
        assert!(state.current.is_none());
    }
}
