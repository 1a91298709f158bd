use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIST_TITLE: &str = "What to Eat? 🍕";
pub const DEFAULT_LIST_OPTIONS: [&str; 5] = ["Pizza", "Burgers", "Sushi", "Salad", "Tacos"];

/// A named set of options the user can roll against.
///
/// `locked` is absent on lists written by older versions and reads as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionList {
    pub title: String,
    pub options: Vec<String>,
    #[serde(default)]
    pub locked: bool,
}

impl DecisionList {
    #[must_use]
    pub fn new(title: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            title: title.into(),
            options,
            locked: false,
        }
    }

    /// The built-in list seeded into an empty store.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            title: DEFAULT_LIST_TITLE.to_string(),
            options: DEFAULT_LIST_OPTIONS.iter().map(|s| s.to_string()).collect(),
            locked: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub list_title: String,
    pub chosen_option: String,
    pub decided_at: DateTime<Local>,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(list_title: impl Into<String>, chosen_option: impl Into<String>) -> Self {
        Self {
            list_title: list_title.into(),
            chosen_option: chosen_option.into(),
            decided_at: Local::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_locked_defaults_to_false() {
        let list: DecisionList =
            serde_json::from_str(r#"{"title":"Movies","options":["A","B"]}"#).unwrap();
        assert!(!list.locked);
        assert_eq!(list.options, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_seed_is_locked() {
        let seed = DecisionList::seed();
        assert!(seed.locked);
        assert_eq!(seed.title, DEFAULT_LIST_TITLE);
        assert_eq!(seed.options.len(), 5);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_string(&DecisionList::new("T", vec!["a".into(), "b".into()]))
            .unwrap();
        assert_eq!(json, r#"{"title":"T","options":["a","b"],"locked":false}"#);
    }
}
