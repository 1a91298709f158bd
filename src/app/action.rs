use crate::app::command::Command;
use crate::domain::models::DecisionList;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- List Registry ---
    SelectNext,         // Next list (wraps)
    SelectPrev,         // Previous list (wraps)
    SwitchList(usize),  // Jump straight to a list
    SelectEntry(usize), // Selector row, including "Create New List"

    // --- Decision Engine ---
    Roll,
    RollStep { roll_id: u64, step: usize },
    RollFinished { roll_id: u64 },

    // --- History ---
    ToggleHistory,
    ClearHistoryIntent, // Ask first
    ClearHistory,       // Confirmed

    // --- Editor ---
    OpenCreateEditor,
    OpenEditEditor,
    EditorNextField,
    EditorPrevField,
    EditorEnter,        // Next field, or a fresh row from the last one
    EditorAddOption,
    EditorRemoveOption, // Removes the focused option row
    EditorSave,
    DeleteListIntent,   // Ask first (refused outright when locked)
    DeleteList(usize),  // Confirmed
    TextAreaInput(crossterm::event::KeyEvent),

    // --- Modals ---
    ConfirmAccept,
    ConfirmReject,
    DismissError,
    ToggleHelp,
    CancelMode,

    // --- Async Results ---
    ListsLoaded(Result<Vec<DecisionList>, String>),
    ListsSaved(Result<(), String>),
}
