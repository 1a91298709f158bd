use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Lists",
        &[
            (" j / \u{2193}", "Next list"),
            (" k / \u{2191}", "Previous list"),
            (" 1-9", "Jump to a list"),
            (" Click", "Pick a list or \"Create New List\""),
        ],
    ),
    (
        "Deciding",
        &[
            (" Space / Enter / r", "Decide for me"),
            (" h", "Show or hide history"),
            (" c", "Clear history"),
        ],
    ),
    (
        "Editing",
        &[
            (" n", "Create a new list"),
            (" e", "Edit the current list"),
            (" Tab / Shift+Tab", "Next / previous field"),
            (" Ctrl+N / Ctrl+D", "Add / remove an option"),
            (" Ctrl+S", "Save"),
            (" Ctrl+X", "Delete the list"),
        ],
    ),
    (
        "General",
        &[
            (" ?", "Show this help"),
            (" Esc", "Close dialog"),
            (" q", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        Table::new(
            rows(
                self.theme.header_item,
                self.theme.footer_segment_key,
                self.theme.list_item,
            ),
            [Constraint::Percentage(35), Constraint::Percentage(65)],
        )
        .block(block)
        .render(help_area, buf);
    }
}

fn rows(category_style: Style, key_style: Style, desc_style: Style) -> Vec<Row<'static>> {
    let mut rows = Vec::new();
    for (i, (category, bindings)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
        }
        rows.push(Row::new(vec![
            Cell::from(Span::styled(*category, category_style)),
            Cell::from(""),
        ]));
        for (key, desc) in *bindings {
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*key, key_style)),
                Cell::from(Span::styled(*desc, desc_style)),
            ]));
        }
    }
    rows
}
