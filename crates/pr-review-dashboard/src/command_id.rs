//! Command identifiers
//!
//! Commands are the semantic actions users can trigger from the keyboard.

use crate::actions::{Action, DiffAction, GlobalAction, PullRequestAction, ReviewAction};
use crate::state::SCROLL_PAGE_LINES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // === Navigation ===
    /// Move the list cursor down
    NavigateNext,
    /// Move the list cursor up
    NavigatePrevious,

    // === Pull requests ===
    /// Select the pull request under the cursor
    PrOpen,
    /// Run the AI review for the selected pull request
    ReviewRun,

    // === Scrolling ===
    DiffScrollDown,
    DiffScrollUp,
    DiffPageDown,
    DiffPageUp,
    ReviewScrollDown,
    ReviewScrollUp,

    // === General ===
    GlobalClose,
    GlobalQuit,
}

impl CommandId {
    /// Short description shown in the status bar
    pub fn title(self) -> &'static str {
        match self {
            Self::NavigateNext => "next",
            Self::NavigatePrevious => "previous",
            Self::PrOpen => "open",
            Self::ReviewRun => "run review",
            Self::DiffScrollDown => "diff down",
            Self::DiffScrollUp => "diff up",
            Self::DiffPageDown => "diff page down",
            Self::DiffPageUp => "diff page up",
            Self::ReviewScrollDown => "review down",
            Self::ReviewScrollUp => "review up",
            Self::GlobalClose => "close",
            Self::GlobalQuit => "quit",
        }
    }

    pub fn to_action(self) -> Action {
        match self {
            Self::NavigateNext => Action::PullRequest(PullRequestAction::NavigateNext),
            Self::NavigatePrevious => Action::PullRequest(PullRequestAction::NavigatePrevious),
            Self::PrOpen => Action::PullRequest(PullRequestAction::OpenAtCursor),
            Self::ReviewRun => Action::Review(ReviewAction::Run),
            Self::DiffScrollDown => Action::Diff(DiffAction::ScrollDown { lines: 1 }),
            Self::DiffScrollUp => Action::Diff(DiffAction::ScrollUp { lines: 1 }),
            Self::DiffPageDown => Action::Diff(DiffAction::ScrollDown {
                lines: SCROLL_PAGE_LINES,
            }),
            Self::DiffPageUp => Action::Diff(DiffAction::ScrollUp {
                lines: SCROLL_PAGE_LINES,
            }),
            Self::ReviewScrollDown => Action::Review(ReviewAction::ScrollDown { lines: 1 }),
            Self::ReviewScrollUp => Action::Review(ReviewAction::ScrollUp { lines: 1 }),
            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }
}
