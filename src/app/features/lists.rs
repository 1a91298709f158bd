use crate::app::{
    features::BUSY_MESSAGE,
    action::{Action, UpdateResult},
    command::Command,
    features::editor,
    state::{AppMode, AppState, ErrorSeverity, ErrorState, ResultDisplay},
};
use crate::domain::{models::DecisionList, registry::Selection};


pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SelectNext | Action::SelectPrev | Action::SwitchList(_) | Action::SelectEntry(_) => {
            UpdateResult::Handled(navigate(state, action))
        }
        Action::ListsLoaded(Ok(lists)) => {
            tracing::info!(count = lists.len(), "lists loaded");
            state.registry.replace_all(lists.clone());
            finish_loading(state);
            UpdateResult::Handled(None)
        }
        Action::ListsLoaded(Err(message)) => {
            tracing::error!(%message, "could not load lists, using the default list");
            state.registry.replace_all(vec![DecisionList::seed()]);
            state.set_error(ErrorState::new(
                format!("Could not load your lists: {message}"),
                ErrorSeverity::Error,
            ));
            finish_loading(state);
            UpdateResult::Handled(None)
        }
        Action::ListsSaved(Ok(())) => {
            tracing::debug!("lists saved");
            UpdateResult::Handled(None)
        }
        Action::ListsSaved(Err(message)) => {
            tracing::error!(%message, "could not save lists");
            state.set_error(ErrorState::new(
                format!("Could not save your lists: {message}"),
                ErrorSeverity::Error,
            ));
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn finish_loading(state: &mut AppState) {
    if state.mode == AppMode::Loading {
        state.mode = AppMode::Normal;
    }
    state.result = ResultDisplay::Placeholder;
}

fn navigate(state: &mut AppState, action: &Action) -> Option<Command> {
    if state.mode != AppMode::Normal {
        return None;
    }
    if state.roll.is_rolling() {
        state.set_status(BUSY_MESSAGE);
        return None;
    }

    let switched = match action {
        Action::SelectNext => state.registry.select_next(),
        Action::SelectPrev => state.registry.select_prev(),
        Action::SwitchList(index) => state.registry.switch_to(*index),
        Action::SelectEntry(row) => match state.registry.resolve(*row) {
            Some(Selection::List(index)) => state.registry.switch_to(index),
            Some(Selection::CreateNew) => {
                editor::open_create(state);
                return None;
            }
            None => false,
        },
        _ => false,
    };

    if switched {
        state.result = ResultDisplay::Placeholder;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;

    fn loaded_state() -> AppState<'static> {
        let mut state = AppState::default();
        reducer::update(
            &mut state,
            Action::ListsLoaded(Ok(vec![
                DecisionList::seed(),
                DecisionList::new("Movies", vec!["Alien".into(), "Heat".into()]),
                DecisionList::new("Games", vec!["Chess".into(), "Go".into()]),
            ])),
        );
        state
    }

    #[test]
    fn test_loaded_lists_enter_normal_mode() {
        let state = loaded_state();
        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.registry.len(), 3);
        assert_eq!(state.registry.current_index(), 0);
    }

    #[test]
    fn test_load_failure_falls_back_to_seed() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::ListsLoaded(Err("permission denied".into())));
        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.registry.lists(), &[DecisionList::seed()]);
        let error = state.last_error.as_ref().unwrap();
        assert!(error.message.contains("permission denied"));
        assert!(!error.suggestions.is_empty());
    }

    #[test]
    fn test_switch_resets_result() {
        let mut state = loaded_state();
        state.result = ResultDisplay::Decided {
            value: "Pizza".into(),
            emphasis_until: None,
        };
        reducer::update(&mut state, Action::SwitchList(2));
        assert_eq!(state.registry.current_index(), 2);
        assert_eq!(state.result, ResultDisplay::Placeholder);

        reducer::update(&mut state, Action::SelectNext);
        assert_eq!(state.registry.current_index(), 0);
        reducer::update(&mut state, Action::SelectPrev);
        assert_eq!(state.registry.current_index(), 2);
    }

    #[test]
    fn test_out_of_range_switch_is_ignored() {
        let mut state = loaded_state();
        reducer::update(&mut state, Action::SwitchList(8));
        assert_eq!(state.registry.current_index(), 0);
    }

    #[test]
    fn test_create_entry_opens_editor() {
        let mut state = loaded_state();
        reducer::update(&mut state, Action::SelectEntry(3));
        assert_eq!(state.mode, AppMode::Editor);
        assert!(state.editor.is_some());
        assert_eq!(state.registry.current_index(), 0);
    }

    #[test]
    fn test_switching_blocked_while_rolling() {
        let mut state = loaded_state();
        assert!(reducer::update(&mut state, Action::Roll).is_some());
        reducer::update(&mut state, Action::SwitchList(1));
        assert_eq!(state.registry.current_index(), 0);
        assert_eq!(state.status_message.as_deref(), Some(BUSY_MESSAGE));
    }

    #[test]
    fn test_save_failure_shows_error() {
        let mut state = loaded_state();
        reducer::update(&mut state, Action::ListsSaved(Err("disk full".into())));
        assert!(state.last_error.is_some());
    }
}
