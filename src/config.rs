use crate::app::keymap::KeyConfig;
use crate::domain::engine::{MAX_ROLL_STEPS, ROLL_INTERVAL, ROLL_STEPS};
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = "decider";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollConfig {
    pub steps: usize,
    pub interval_ms: u64,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            steps: ROLL_STEPS,
            interval_ms: ROLL_INTERVAL.as_millis() as u64,
        }
    }
}

impl RollConfig {
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps.min(MAX_ROLL_STEPS)
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

/// Contents of `~/.config/decider/config.toml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: PaletteType,
    pub data_dir: Option<PathBuf>,
    pub roll: RollConfig,
    pub keys: KeyConfig,
}

/// `~/.config/decider`, or `None` when there is no home directory.
pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push(APP_DIR);
        path
    })
}

impl AppConfig {
    /// Loads the user config, falling back to defaults when the file is
    /// missing or invalid.
    #[must_use]
    pub fn load() -> Self {
        match config_dir() {
            Some(dir) => Self::load_from(&dir.join(CONFIG_FILE)),
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "config loaded");
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
                Self::default()
            }
        }
    }

    /// Where the list store lives.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(config_dir)
            .unwrap_or_else(|| PathBuf::from(format!(".{APP_DIR}")))
    }
}
