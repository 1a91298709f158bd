use crate::domain::error::DecisionError;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorState {
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub severity: ErrorSeverity,
    pub suggestions: Vec<String>,
}

impl ErrorState {
    #[must_use]
    pub fn new(message: impl Into<String>, severity: ErrorSeverity) -> Self {
        let message = message.into();
        Self {
            suggestions: crate::app::recovery::get_suggestions(&message),
            message,
            timestamp: Local::now(),
            severity,
        }
    }
}

impl From<&DecisionError> for ErrorState {
    fn from(err: &DecisionError) -> Self {
        let severity = if err.is_refusal() {
            ErrorSeverity::Warning
        } else {
            ErrorSeverity::Error
        };
        Self::new(err.to_string(), severity)
    }
}
