use crate::app::{
    features::BUSY_MESSAGE,
    action::{Action, UpdateResult},
    state::{AppMode, AppState, ConfirmState},
};

const CLEAR_PROMPT: &str = "Clear your roll history?";

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ToggleHistory => {
            state.history.toggle_visibility();
            UpdateResult::Handled(None)
        }
        Action::ClearHistoryIntent => {
            if state.history.is_empty() || state.mode != AppMode::Normal {
                return UpdateResult::Handled(None);
            }
            if state.roll.is_rolling() {
                state.set_status(BUSY_MESSAGE);
                return UpdateResult::Handled(None);
            }
            state.confirm = Some(ConfirmState {
                prompt: CLEAR_PROMPT.to_string(),
                on_confirm: Action::ClearHistory,
                return_mode: state.mode,
            });
            state.mode = AppMode::Confirm;
            UpdateResult::Handled(None)
        }
        Action::ClearHistory => {
            if state.history.clear() {
                tracing::info!("history cleared");
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
