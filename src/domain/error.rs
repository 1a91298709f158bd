use thiserror::Error;

pub const MIN_OPTIONS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("Title and at least 2 options required.")]
    MissingTitle,
    #[error("Title and at least 2 options required.")]
    NotEnoughOptions { found: usize },
    #[error("This list is locked and cannot be deleted.")]
    ListLocked { title: String },
    #[error("This list has no options to choose from.")]
    NoOptions,
    #[error("No list at position {index}.")]
    IndexOutOfBounds { index: usize },
}

impl DecisionError {
    /// Validation failures and lock refusals are user mistakes, not faults.
    #[must_use]
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            Self::MissingTitle | Self::NotEnoughOptions { .. } | Self::ListLocked { .. }
        )
    }
}
