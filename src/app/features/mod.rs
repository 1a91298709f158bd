pub mod editor;
pub mod history;
pub mod lists;
pub mod roll;
pub mod ui;

/// Shown when an action has to wait for the running roll.
pub const BUSY_MESSAGE: &str = "Wait for the current roll to finish.";
