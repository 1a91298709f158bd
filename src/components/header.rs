use crate::domain::registry::ListRegistry;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub registry: &'a ListRegistry,
    pub rolling: bool,
    pub theme: &'a Theme,
    pub terminal_width: u16,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state_style = if self.rolling {
            self.theme.header_warn
        } else {
            self.theme.header_active
        };

        // Segment background colors for separator transitions
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let list_bg = self.theme.header_list.bg.unwrap_or(Color::Reset);
        let stats_bg = self.theme.header_stats.bg.unwrap_or(Color::Reset);
        let state_bg = state_style.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        let list_text = match self.registry.current() {
            Some(list) => format!(" {} ", list.title),
            None => " no lists ".to_string(),
        };
        let count = self.registry.len();
        let stats_text = format!(" {count} list{} ", if count == 1 { "" } else { "s" });
        let state_text = if self.rolling { " ROLLING " } else { " READY " };

        let spans = vec![
            Span::styled(format!(" {} DECIDER ", glyphs::LOGO), self.theme.header_logo),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(logo_bg).bg(list_bg)),
            Span::styled(list_text, self.theme.header_list),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(list_bg).bg(stats_bg)),
            Span::styled(stats_text, self.theme.header_stats),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(stats_bg).bg(state_bg)),
            Span::styled(state_text, state_style),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(state_bg).bg(base_bg)),
            // Fill rest of line
            Span::styled(" ".repeat(self.terminal_width as usize), self.theme.header),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
