use crate::app::{
    action::{Action, UpdateResult},
    reducer,
    state::{AppMode, AppState},
};
use std::time::Instant;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            if let Some(clear_time) = state.status_clear_time {
                if Instant::now() >= clear_time {
                    state.status_message = None;
                    state.status_clear_time = None;
                }
            }
            UpdateResult::Handled(None)
        }
        Action::Resize(..) => UpdateResult::Handled(None),
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::CancelMode => {
            match state.mode {
                AppMode::Editor => {
                    state.editor = None;
                    state.mode = AppMode::Normal;
                }
                AppMode::Confirm => reject(state),
                AppMode::Help => state.mode = AppMode::Normal,
                AppMode::Normal | AppMode::Loading => {}
            }
            state.last_error = None;
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.mode = match state.mode {
                AppMode::Help => AppMode::Normal,
                AppMode::Normal => AppMode::Help,
                other => other,
            };
            UpdateResult::Handled(None)
        }
        Action::ConfirmAccept => {
            let Some(confirm) = state.confirm.take() else {
                return UpdateResult::Handled(None);
            };
            state.mode = confirm.return_mode;
            UpdateResult::Handled(reducer::update(state, confirm.on_confirm))
        }
        Action::ConfirmReject => {
            reject(state);
            UpdateResult::Handled(None)
        }
        Action::DismissError => {
            state.last_error = None;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn reject(state: &mut AppState) {
    if let Some(confirm) = state.confirm.take() {
        state.mode = confirm.return_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ConfirmState;
    use std::time::Duration;

    #[test]
    fn test_status_expires_on_tick() {
        let mut state = AppState::default();
        state.set_status("Saved");
        reducer::update(&mut state, Action::Tick);
        assert_eq!(state.status_message.as_deref(), Some("Saved"));

        state.status_clear_time = Some(Instant::now() - Duration::from_millis(1));
        reducer::update(&mut state, Action::Tick);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_reject_returns_to_previous_mode() {
        let mut state = AppState::default();
        state.mode = AppMode::Confirm;
        state.confirm = Some(ConfirmState {
            prompt: "Clear your roll history?".into(),
            on_confirm: Action::ClearHistory,
            return_mode: AppMode::Normal,
        });
        state.history.record("Food", "Pizza");

        reducer::update(&mut state, Action::ConfirmReject);
        assert_eq!(state.mode, AppMode::Normal);
        assert!(state.confirm.is_none());
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_help_toggles_only_from_normal() {
        let mut state = AppState::default();
        state.mode = AppMode::Normal;
        reducer::update(&mut state, Action::ToggleHelp);
        assert_eq!(state.mode, AppMode::Help);
        reducer::update(&mut state, Action::ToggleHelp);
        assert_eq!(state.mode, AppMode::Normal);

        state.mode = AppMode::Editor;
        reducer::update(&mut state, Action::ToggleHelp);
        assert_eq!(state.mode, AppMode::Editor);
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::Quit);
        assert!(state.should_quit);
    }
}
