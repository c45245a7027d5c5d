use crate::state::Notification;

#[derive(Debug, Clone)]
pub enum NotificationAction {
    /// Show a notification, replacing the current one
    Show(Notification),
    /// Auto-dismissal of the notification with this sequence number
    Dismiss(u64),
}
