use crate::app::state::ConfirmState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::helpers::{centered_box, draw_drop_shadow};

pub struct ConfirmModal<'a> {
    pub theme: &'a Theme,
    pub confirm: &'a ConfirmState,
}

impl Widget for ConfirmModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = (self.confirm.prompt.chars().count() as u16 + 8).max(40);
        let modal_area = centered_box(width, 7, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" CONFIRM ", self.theme.header_warn),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.header_warn);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.confirm.prompt.as_str(),
                self.theme.footer_segment_val,
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" y ", self.theme.footer_segment_key),
                Span::raw(" Yes    "),
                Span::styled(" n ", self.theme.footer_segment_key),
                Span::raw(" No "),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(modal_area, buf);
    }
}
