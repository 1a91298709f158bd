use super::error::{DecisionError, MIN_OPTIONS};
use super::registry::ListRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit { index: usize },
}

/// Raw editor contents, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorDraft {
    pub title: String,
    pub options: Vec<String>,
}

/// A draft that passed validation: trimmed title, trimmed non-empty options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedList {
    pub title: String,
    pub options: Vec<String>,
}

impl EditorDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            title: title.into(),
            options,
        }
    }

    pub fn validate(&self) -> Result<ValidatedList, DecisionError> {
        let title = self.title.trim().to_string();
        let options: Vec<String> = self
            .options
            .iter()
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if title.is_empty() {
            return Err(DecisionError::MissingTitle);
        }
        if options.len() < MIN_OPTIONS {
            return Err(DecisionError::NotEnoughOptions {
                found: options.len(),
            });
        }
        Ok(ValidatedList { title, options })
    }
}

/// Validates `draft` and writes it into `registry`. On failure nothing is
/// touched. Returns the index of the saved list, which is also current.
pub fn save_draft(
    registry: &mut ListRegistry,
    mode: EditorMode,
    draft: &EditorDraft,
) -> Result<usize, DecisionError> {
    let ValidatedList { title, options } = draft.validate()?;
    match mode {
        EditorMode::Create => Ok(registry.push(title, options)),
        EditorMode::Edit { index } => {
            registry.replace(index, title, options)?;
            registry.switch_to(index);
            Ok(index)
        }
    }
}

/// Whether the delete affordance should be offered for `mode`.
#[must_use]
pub fn can_delete(registry: &ListRegistry, mode: EditorMode) -> bool {
    match mode {
        EditorMode::Create => false,
        EditorMode::Edit { index } => registry.get(index).is_some_and(|l| !l.locked),
    }
}
