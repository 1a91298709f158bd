use super::keymap::KeyMap;
use crate::config::{AppConfig, RollConfig};
use crate::domain::engine::RollState;
use crate::domain::history::HistoryLog;
use crate::domain::registry::ListRegistry;
use crate::theme::Theme;
use ratatui::widgets::ListState;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub mod confirm;
pub mod editor;
pub mod error;
pub mod input;

// Re-exports
pub use confirm::ConfirmState;
pub use editor::{EditorFocus, EditorState};
pub use error::{ErrorSeverity, ErrorState};
pub use input::AppTextArea;

pub const PLACEHOLDER_TEXT: &str = "Ready?";
pub const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Loading, // Waiting for the stored lists
    Normal,  // Main stage
    Editor,  // Create/edit modal
    Confirm, // Yes/no prompt
    Help,    // Keybinding overlay
}

/// What the result box shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultDisplay {
    Placeholder,
    Shuffling(String),
    Decided {
        value: String,
        emphasis_until: Option<Instant>,
    },
}

impl ResultDisplay {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Placeholder => PLACEHOLDER_TEXT,
            Self::Shuffling(value) | Self::Decided { value, .. } => value,
        }
    }

    #[must_use]
    pub fn is_emphasized(&self, now: Instant) -> bool {
        matches!(self, Self::Decided { emphasis_until: Some(t), .. } if now < *t)
    }
}

/// Everything the main stage needs, detached from the terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct StageView<'s> {
    pub title: &'s str,
    pub options: &'s [String],
    pub locked: bool,
    pub result: &'s ResultDisplay,
    pub trigger_label: &'static str,
    pub trigger_enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>,
    pub status_clear_time: Option<Instant>,
    pub store_location: String,

    // --- Lists (the "Source of Truth") ---
    pub registry: ListRegistry,
    pub sidebar_state: ListState,

    // --- Decision Engine ---
    pub roll: RollState,
    pub next_roll_id: u64,
    pub result: ResultDisplay,
    pub roll_config: RollConfig,

    // --- History (session only) ---
    pub history: HistoryLog,

    // --- Modals ---
    pub editor: Option<EditorState<'a>>,
    pub confirm: Option<ConfirmState>,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            theme: Theme::from_palette_type(config.theme),
            roll_config: config.roll,
            ..Default::default()
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_clear_time = Some(Instant::now() + STATUS_TTL);
    }

    pub fn set_error(&mut self, error: ErrorState) {
        tracing::debug!(message = %error.message, severity = ?error.severity, "showing error");
        self.last_error = Some(error);
    }

    #[must_use]
    pub fn stage_view(&self) -> Option<StageView<'_>> {
        let list = self.registry.current()?;
        Some(StageView {
            title: &list.title,
            options: &list.options,
            locked: list.locked,
            result: &self.result,
            trigger_label: self.roll.trigger_label(),
            trigger_enabled: !self.roll.is_rolling() && !list.options.is_empty(),
        })
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Loading,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            store_location: String::new(),
            registry: ListRegistry::default(),
            sidebar_state: ListState::default(),
            roll: RollState::Idle,
            next_roll_id: 1,
            result: ResultDisplay::Placeholder,
            roll_config: RollConfig::default(),
            history: HistoryLog::default(),
            editor: None,
            confirm: None,
            keymap: Arc::new(KeyMap::default()),
            theme: Theme::default(),
        }
    }
}
