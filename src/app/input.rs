use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect, Size};

/// Selector row under a click inside the sidebar border, if any.
pub fn resolve_clicked_entry(app_state: &AppState<'_>, sidebar: Rect, row: u16) -> Option<usize> {
    let inner_top = sidebar.y + 1;
    let inner_bottom = sidebar.bottom().saturating_sub(1);
    if row < inner_top || row >= inner_bottom {
        return None;
    }
    let entry = (row - inner_top) as usize + app_state.sidebar_state.offset();
    // Lists plus the create entry.
    (entry <= app_state.registry.len()).then_some(entry)
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }
    }
    if let Event::Resize(w, h) = event {
        return Some(Action::Resize(w, h));
    }

    // An open error takes every key until dismissed.
    if app_state.last_error.is_some() {
        return match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => Some(Action::DismissError),
                _ => None,
            },
            _ => None,
        };
    }

    match app_state.mode {
        AppMode::Loading => match event {
            Event::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => {
                Some(Action::Quit)
            }
            _ => None,
        },
        AppMode::Confirm => match event {
            Event::Key(key) => match key.code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Action::ConfirmAccept),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::ConfirmReject),
                _ => None,
            },
            _ => None,
        },
        AppMode::Help => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
                _ => None,
            },
            _ => None,
        },
        AppMode::Editor => match event {
            Event::Key(key) => map_editor_key(key),
            _ => None,
        },
        AppMode::Normal => match event {
            Event::Key(key) => app_state.keymap.get_action(key),
            Event::Mouse(mouse) => map_mouse(mouse, app_state, terminal_size),
            _ => None,
        },
    }
}

fn map_editor_key(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let action = match key.code {
        KeyCode::Esc => Action::CancelMode,
        KeyCode::Tab | KeyCode::Down => Action::EditorNextField,
        KeyCode::BackTab | KeyCode::Up => Action::EditorPrevField,
        KeyCode::Enter => Action::EditorEnter,
        KeyCode::Char('s') if ctrl => Action::EditorSave,
        KeyCode::Char('n') if ctrl => Action::EditorAddOption,
        KeyCode::Char('d') if ctrl => Action::EditorRemoveOption,
        KeyCode::Char('x') if ctrl => Action::DeleteListIntent,
        // Fields are single-line; these would insert a newline.
        KeyCode::Char('m' | 'j') if ctrl => return None,
        _ => Action::TextAreaInput(key),
    };
    Some(action)
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>, terminal_size: Size) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let layout = ui::get_layout(area, app_state.history.is_visible());
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollUp if layout.sidebar.contains(position) => Some(Action::SelectPrev),
        MouseEventKind::ScrollDown if layout.sidebar.contains(position) => Some(Action::SelectNext),
        MouseEventKind::Down(MouseButton::Left) => {
            if layout.sidebar.contains(position) {
                resolve_clicked_entry(app_state, layout.sidebar, mouse.row).map(Action::SelectEntry)
            } else if layout.stage_areas.trigger.contains(position) {
                Some(Action::Roll)
            } else if layout.history.contains(position) && mouse.row == layout.history.y {
                Some(Action::ToggleHistory)
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{ConfirmState, EditorState, ErrorSeverity, ErrorState};
    use crate::domain::models::DecisionList;

    const SIZE: Size = Size {
        width: 100,
        height: 30,
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn normal_state() -> AppState<'static> {
        let mut state = AppState::default();
        state.mode = AppMode::Normal;
        state.registry.replace_all(vec![
            DecisionList::seed(),
            DecisionList::new("Movies", vec!["Alien".into(), "Heat".into()]),
        ]);
        state
    }

    #[test]
    fn test_normal_keys_use_keymap() {
        let state = normal_state();
        assert_eq!(
            map_event_to_action(key(KeyCode::Char(' ')), &state, SIZE),
            Some(Action::Roll)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('2')), &state, SIZE),
            Some(Action::SwitchList(1))
        );
        assert_eq!(map_event_to_action(ctrl('c'), &state, SIZE), Some(Action::Quit));
    }

    #[test]
    fn test_editor_keys() {
        let mut state = normal_state();
        state.mode = AppMode::Editor;
        state.editor = Some(EditorState::create());
        assert_eq!(map_event_to_action(ctrl('s'), &state, SIZE), Some(Action::EditorSave));
        assert_eq!(map_event_to_action(ctrl('x'), &state, SIZE), Some(Action::DeleteListIntent));
        assert_eq!(
            map_event_to_action(key(KeyCode::Tab), &state, SIZE),
            Some(Action::EditorNextField)
        );
        // Plain letters are typed, not treated as shortcuts.
        let typed = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(
            map_event_to_action(Event::Key(typed), &state, SIZE),
            Some(Action::TextAreaInput(typed))
        );
        assert_eq!(map_event_to_action(ctrl('m'), &state, SIZE), None);
        assert_eq!(map_event_to_action(ctrl('j'), &state, SIZE), None);
    }

    #[test]
    fn test_confirm_keys() {
        let mut state = normal_state();
        state.mode = AppMode::Confirm;
        state.confirm = Some(ConfirmState {
            prompt: "Clear your roll history?".into(),
            on_confirm: Action::ClearHistory,
            return_mode: AppMode::Normal,
        });
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('y')), &state, SIZE),
            Some(Action::ConfirmAccept)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &state, SIZE),
            Some(Action::ConfirmReject)
        );
        assert_eq!(map_event_to_action(key(KeyCode::Char(' ')), &state, SIZE), None);
    }

    #[test]
    fn test_error_swallows_keys() {
        let mut state = normal_state();
        state.last_error = Some(ErrorState::new("boom", ErrorSeverity::Error));
        assert_eq!(map_event_to_action(key(KeyCode::Char(' ')), &state, SIZE), Some(Action::DismissError));
        assert_eq!(map_event_to_action(key(KeyCode::Char('n')), &state, SIZE), None);
    }

    #[test]
    fn test_loading_only_quits() {
        let mut state = normal_state();
        state.mode = AppMode::Loading;
        assert_eq!(map_event_to_action(key(KeyCode::Char(' ')), &state, SIZE), None);
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('q')), &state, SIZE),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_clicks_hit_sidebar_and_trigger() {
        let state = normal_state();
        let layout = ui::get_layout(Rect::new(0, 0, SIZE.width, SIZE.height), true);

        let first_row = layout.sidebar.y + 1;
        assert_eq!(
            map_event_to_action(click(3, first_row + 1), &state, SIZE),
            Some(Action::SelectEntry(1))
        );
        assert_eq!(
            map_event_to_action(click(3, first_row + 2), &state, SIZE),
            Some(Action::SelectEntry(2))
        );
        assert_eq!(map_event_to_action(click(3, first_row + 3), &state, SIZE), None);

        let trigger = layout.stage_areas.trigger;
        assert_eq!(
            map_event_to_action(click(trigger.x + 1, trigger.y + 1), &state, SIZE),
            Some(Action::Roll)
        );
        assert_eq!(
            map_event_to_action(click(layout.history.x + 2, layout.history.y), &state, SIZE),
            Some(Action::ToggleHistory)
        );
    }
}
