use super::AppMode;
use crate::app::action::Action;

/// A yes/no question standing in front of a destructive action.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmState {
    pub prompt: String,
    pub on_confirm: Action,
    pub return_mode: AppMode,
}
