use super::models::HistoryEntry;

/// Session-only record of past decisions, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    visible: bool,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            visible: true,
        }
    }
}

impl HistoryLog {
    pub fn record(&mut self, list_title: &str, chosen_option: &str) {
        self.entries
            .insert(0, HistoryEntry::new(list_title, chosen_option));
    }

    /// Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.entries.clear();
        true
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
