use crate::domain::history::HistoryLog;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Rows the panel takes when expanded, borders included.
pub const EXPANDED_HEIGHT: u16 = 9;
/// Just the titled border when hidden.
pub const COLLAPSED_HEIGHT: u16 = 2;

pub struct HistoryPanel<'a> {
    pub history: &'a HistoryLog,
    pub theme: &'a Theme,
}

impl Widget for HistoryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let marker = if self.history.is_visible() {
            glyphs::EXPANDED
        } else {
            glyphs::COLLAPSED
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    format!("{marker} HISTORY ({})", self.history.len()),
                    theme.header_item,
                ),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("h", theme.footer_segment_key),
                Span::raw(": toggle "),
                Span::styled("c", theme.footer_segment_key),
                Span::raw(": clear "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border);

        if !self.history.is_visible() {
            block.render(area, buf);
            return;
        }

        let lines: Vec<Line> = if self.history.is_empty() {
            vec![Line::styled("No decisions yet.", theme.dimmed)]
        } else {
            self.history
                .entries()
                .iter()
                .map(|entry| {
                    Line::from(vec![
                        Span::styled(
                            format!(" {} ", entry.decided_at.format("%H:%M:%S")),
                            theme.timestamp,
                        ),
                        Span::styled(entry.list_title.as_str(), theme.history_title),
                        Span::styled(format!(" {} ", glyphs::ARROW), theme.dimmed),
                        Span::styled(entry.chosen_option.as_str(), theme.history_value),
                    ])
                })
                .collect()
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
