pub mod app_reducer;
pub mod diff_reducer;
pub mod notification_reducer;
pub mod poll_reducer;
pub mod pull_request_reducer;
pub mod review_reducer;
