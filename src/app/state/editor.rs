use super::input::AppTextArea;
use crate::domain::editor::{EditorDraft, EditorMode};
use crate::domain::models::DecisionList;

const TITLE_PLACEHOLDER: &str = "List title...";
const OPTION_PLACEHOLDER: &str = "Option...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorFocus {
    Title,
    Option(usize),
}

/// An open create/edit session. Nothing here touches the stored lists until
/// the draft is saved.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState<'a> {
    pub mode: EditorMode,
    pub title: AppTextArea<'a>,
    pub options: Vec<AppTextArea<'a>>,
    pub focus: EditorFocus,
    pub deletable: bool,
}

impl<'a> EditorState<'a> {
    /// Blank title and two empty rows.
    #[must_use]
    pub fn create() -> Self {
        let mut editor = Self {
            mode: EditorMode::Create,
            title: AppTextArea::single_line("", TITLE_PLACEHOLDER),
            options: Vec::new(),
            focus: EditorFocus::Title,
            deletable: false,
        };
        editor.add_option_slot("");
        editor.add_option_slot("");
        editor.focus = EditorFocus::Title;
        editor
    }

    #[must_use]
    pub fn edit(index: usize, list: &DecisionList) -> Self {
        Self {
            mode: EditorMode::Edit { index },
            title: AppTextArea::single_line(&list.title, TITLE_PLACEHOLDER),
            options: list
                .options
                .iter()
                .map(|o| AppTextArea::single_line(o, OPTION_PLACEHOLDER))
                .collect(),
            focus: EditorFocus::Title,
            deletable: !list.locked,
        }
    }

    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self.mode {
            EditorMode::Create => " CREATE NEW LIST ",
            EditorMode::Edit { .. } => " EDIT LIST ",
        }
    }

    /// Appends a row and focuses it.
    pub fn add_option_slot(&mut self, value: &str) {
        self.options
            .push(AppTextArea::single_line(value, OPTION_PLACEHOLDER));
        self.focus = EditorFocus::Option(self.options.len() - 1);
    }

    /// Removes exactly `row`. Focus stays on the same position when it can,
    /// otherwise moves up.
    pub fn remove_option_slot(&mut self, row: usize) -> bool {
        if row >= self.options.len() {
            return false;
        }
        self.options.remove(row);
        if let EditorFocus::Option(i) = self.focus {
            self.focus = if self.options.is_empty() {
                EditorFocus::Title
            } else if i >= self.options.len() {
                EditorFocus::Option(self.options.len() - 1)
            } else {
                EditorFocus::Option(i)
            };
        }
        true
    }

    pub fn remove_focused_option(&mut self) -> bool {
        match self.focus {
            EditorFocus::Option(row) => self.remove_option_slot(row),
            EditorFocus::Title => false,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            EditorFocus::Title if self.options.is_empty() => EditorFocus::Title,
            EditorFocus::Title => EditorFocus::Option(0),
            EditorFocus::Option(i) if i + 1 < self.options.len() => EditorFocus::Option(i + 1),
            EditorFocus::Option(_) => EditorFocus::Title,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            EditorFocus::Title if self.options.is_empty() => EditorFocus::Title,
            EditorFocus::Title => EditorFocus::Option(self.options.len() - 1),
            EditorFocus::Option(0) => EditorFocus::Title,
            EditorFocus::Option(i) => EditorFocus::Option(i - 1),
        };
    }

    /// Enter moves down; from the last row it opens a fresh one.
    pub fn enter(&mut self) {
        match self.focus {
            EditorFocus::Option(i) if i + 1 == self.options.len() => self.add_option_slot(""),
            _ => self.focus_next(),
        }
    }

    pub fn focused_mut(&mut self) -> &mut AppTextArea<'a> {
        match self.focus {
            EditorFocus::Option(i) if i < self.options.len() => &mut self.options[i],
            _ => &mut self.title,
        }
    }

    #[must_use]
    pub fn draft(&self) -> EditorDraft {
        EditorDraft::new(
            self.title.value(),
            self.options.iter().map(AppTextArea::value).collect(),
        )
    }
}
