use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

/// A `TextArea` that can live inside `AppState` (which derives `Clone`,
/// `Debug` and `PartialEq`).
#[derive(Default)]
pub struct AppTextArea<'a>(pub TextArea<'a>);

impl AppTextArea<'_> {
    /// One-line field pre-filled with `value`, cursor at the end.
    #[must_use]
    pub fn single_line(value: &str, placeholder: &str) -> Self {
        let mut area = TextArea::new(vec![value.to_string()]);
        area.set_placeholder_text(placeholder);
        area.set_cursor_line_style(Style::default());
        area.move_cursor(CursorMove::End);
        Self(area)
    }

    /// The field contents with line breaks flattened to spaces.
    #[must_use]
    pub fn value(&self) -> String {
        self.0.lines().join(" ")
    }
}

impl Clone for AppTextArea<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        area.set_placeholder_text(self.0.placeholder_text());
        area.set_cursor_line_style(self.0.cursor_line_style());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for AppTextArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for AppTextArea<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for AppTextArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &AppTextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}
