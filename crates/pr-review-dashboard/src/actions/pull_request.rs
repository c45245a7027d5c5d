//! Pull Request list actions

use pr_review_client::PullRequest;

/// Actions for the pull request list
#[derive(Debug, Clone)]
pub enum PullRequestAction {
    /// Move the list cursor down
    NavigateNext,
    /// Move the list cursor up
    NavigatePrevious,
    /// Select the pull request under the cursor
    OpenAtCursor,
    /// Select a pull request and load its diff
    Select(PullRequest),
}
