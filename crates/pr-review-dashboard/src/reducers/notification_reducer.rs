use crate::actions::NotificationAction;
use crate::state::NotificationState;

pub fn reduce(mut state: NotificationState, action: &NotificationAction) -> NotificationState {
    match action {
        NotificationAction::Show(notification) => {
            state.show(notification.clone());
        }
        NotificationAction::Dismiss(seq) => {
            if !state.dismiss(*seq) {
                log::debug!("Notification {} already replaced", seq);
            }
        }
    }

    state
}
