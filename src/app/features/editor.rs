use crate::app::{
    features::BUSY_MESSAGE,
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, ConfirmState, EditorState, ErrorState, ResultDisplay},
};
use crate::domain::{
    editor::{can_delete, save_draft, EditorMode},
    error::DecisionError,
};

const DELETE_PROMPT: &str = "Are you sure you want to delete this list?";

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::OpenCreateEditor => {
            open_create(state);
            UpdateResult::Handled(None)
        }
        Action::OpenEditEditor => {
            open_edit(state);
            UpdateResult::Handled(None)
        }
        Action::EditorNextField
        | Action::EditorPrevField
        | Action::EditorEnter
        | Action::EditorAddOption
        | Action::EditorRemoveOption
        | Action::TextAreaInput(_) => {
            if state.mode == AppMode::Editor {
                if let Some(editor) = &mut state.editor {
                    edit_fields(editor, action);
                }
            }
            UpdateResult::Handled(None)
        }
        Action::EditorSave => UpdateResult::Handled(save(state)),
        Action::DeleteListIntent => {
            request_delete(state);
            UpdateResult::Handled(None)
        }
        Action::DeleteList(index) => UpdateResult::Handled(delete(state, *index)),
        _ => UpdateResult::NotHandled,
    }
}

pub fn open_create(state: &mut AppState) {
    if !can_open(state) {
        return;
    }
    state.editor = Some(EditorState::create());
    state.mode = AppMode::Editor;
}

fn open_edit(state: &mut AppState) {
    if !can_open(state) {
        return;
    }
    let index = state.registry.current_index();
    if let Some(list) = state.registry.get(index) {
        state.editor = Some(EditorState::edit(index, list));
        state.mode = AppMode::Editor;
    }
}

fn can_open(state: &mut AppState) -> bool {
    if state.mode != AppMode::Normal {
        return false;
    }
    if state.roll.is_rolling() {
        state.set_status(BUSY_MESSAGE);
        return false;
    }
    true
}

fn edit_fields(editor: &mut EditorState, action: &Action) {
    match action {
        Action::EditorNextField => editor.focus_next(),
        Action::EditorPrevField => editor.focus_prev(),
        Action::EditorEnter => editor.enter(),
        Action::EditorAddOption => editor.add_option_slot(""),
        Action::EditorRemoveOption => {
            editor.remove_focused_option();
        }
        Action::TextAreaInput(key) => {
            editor.focused_mut().input(*key);
        }
        _ => {}
    }
}

fn save(state: &mut AppState) -> Option<Command> {
    if state.mode != AppMode::Editor {
        return None;
    }
    let (mode, draft) = {
        let editor = state.editor.as_ref()?;
        (editor.mode, editor.draft())
    };
    let previous = state.registry.current_index();

    match save_draft(&mut state.registry, mode, &draft) {
        Ok(index) => {
            let title = state
                .registry
                .get(index)
                .map(|l| l.title.clone())
                .unwrap_or_default();
            tracing::info!(index, list = %title, ?mode, "list saved");
            state.editor = None;
            state.mode = AppMode::Normal;
            if index != previous {
                state.result = ResultDisplay::Placeholder;
            }
            state.set_status(format!("Saved \u{201c}{title}\u{201d}"));
            Some(Command::SaveLists(state.registry.lists().to_vec()))
        }
        Err(err) => {
            tracing::debug!(error = %err, "draft rejected");
            state.set_error(ErrorState::from(&err));
            None
        }
    }
}

fn request_delete(state: &mut AppState) {
    if state.mode != AppMode::Editor {
        return;
    }
    let Some(mode) = state.editor.as_ref().map(|e| e.mode) else {
        return;
    };
    let EditorMode::Edit { index } = mode else {
        return;
    };

    if !can_delete(&state.registry, mode) {
        if let Some(list) = state.registry.get(index) {
            let err = DecisionError::ListLocked {
                title: list.title.clone(),
            };
            tracing::info!(list = %list.title, "refused to delete locked list");
            state.set_error(ErrorState::from(&err));
        }
        return;
    }

    state.confirm = Some(ConfirmState {
        prompt: DELETE_PROMPT.to_string(),
        on_confirm: Action::DeleteList(index),
        return_mode: AppMode::Editor,
    });
    state.mode = AppMode::Confirm;
}

fn delete(state: &mut AppState, index: usize) -> Option<Command> {
    match state.registry.remove(index) {
        Ok(removed) => {
            tracing::info!(index, list = %removed.title, "list deleted");
            state.editor = None;
            state.mode = AppMode::Normal;
            state.result = ResultDisplay::Placeholder;
            state.set_status(format!("Deleted \u{201c}{}\u{201d}", removed.title));
            Some(Command::SaveLists(state.registry.lists().to_vec()))
        }
        Err(err) => {
            tracing::warn!(index, error = %err, "delete refused");
            state.set_error(ErrorState::from(&err));
            None
        }
    }
}
