use crate::app::state::{ErrorSeverity, ErrorState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::helpers::{centered_box, draw_drop_shadow};

pub struct ErrorModal<'a> {
    pub theme: &'a Theme,
    pub error: &'a ErrorState,
}

impl Widget for ErrorModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title_text, title_style, icon) = match self.error.severity {
            ErrorSeverity::Warning => (" HOLD ON ", self.theme.header_warn, "󱈸"),
            ErrorSeverity::Error => (" ERROR ", self.theme.status_error, "󰅚"),
        };

        let mut text_lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("{icon} "), title_style),
                Span::styled(&self.error.message, self.theme.footer_segment_val),
            ]),
        ];

        // Refusals are expected; only real failures carry a timestamp.
        if self.error.severity >= ErrorSeverity::Error {
            let timestamp = self.error.timestamp.format("%H:%M:%S").to_string();
            text_lines.push(Line::from(Span::styled(
                format!("Occurred at: {timestamp}"),
                self.theme.timestamp,
            )));
        }
        text_lines.push(Line::from(""));

        for suggestion in &self.error.suggestions {
            text_lines.push(Line::from(vec![
                Span::styled("• ", self.theme.header_item),
                Span::styled(suggestion, self.theme.footer_segment_key),
            ]));
        }
        if !self.error.suggestions.is_empty() {
            text_lines.push(Line::from(""));
        }

        text_lines.push(Line::from(vec![
            Span::raw(" Press "),
            Span::styled("Esc", self.theme.footer_segment_key),
            Span::raw(" or "),
            Span::styled("Enter", self.theme.footer_segment_key),
            Span::raw(" to continue "),
        ]));

        let widest = text_lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let width = widest.saturating_add(6).max(44).min(area.width.saturating_mul(4) / 5);
        let height = (text_lines.len() as u16).saturating_add(3);
        let modal_area = centered_box(width, height, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(title_text, title_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(title_style);

        Paragraph::new(text_lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(modal_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DecisionError;

    fn render(error: &ErrorState) -> String {
        let area = Rect::new(0, 0, 90, 24);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();
        ErrorModal {
            theme: &theme,
            error,
        }
        .render(area, &mut buf);
        buf.content()
            .chunks(area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_refusal_is_a_warning_without_timestamp() {
        let screen = render(&ErrorState::from(&DecisionError::ListLocked {
            title: "What to Eat?".to_string(),
        }));
        assert!(screen.contains("HOLD ON"));
        assert!(!screen.contains("Occurred at"));
    }

    #[test]
    fn test_failure_shows_time_and_suggestions() {
        let error = ErrorState::new("Permission denied", ErrorSeverity::Error);
        assert!(!error.suggestions.is_empty());
        let screen = render(&error);
        assert!(screen.contains("ERROR"));
        assert!(screen.contains("Occurred at"));
        assert!(screen.contains("Esc"));
    }
}
