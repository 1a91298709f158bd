use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
}

const fn item(key: &'static str, desc: &'static str) -> FooterItem {
    FooterItem { key, desc }
}

/// Hints for the current mode, most important first.
pub fn get_items(state: &AppState) -> Vec<FooterItem> {
    if state.last_error.is_some() {
        return vec![item("Esc", "dismiss")];
    }
    match state.mode {
        AppMode::Loading => vec![item("q", "quit")],
        AppMode::Normal if state.roll.is_rolling() => vec![item("h", "history"), item("q", "quit")],
        AppMode::Normal => vec![
            item("Space", "decide"),
            item("j/k", "list"),
            item("n", "new"),
            item("e", "edit"),
            item("h", "history"),
            item("c", "clear"),
            item("?", "help"),
            item("q", "quit"),
        ],
        AppMode::Editor => vec![
            item("Tab", "field"),
            item("^N", "add"),
            item("^D", "remove"),
            item("^S", "save"),
            item("Esc", "cancel"),
        ],
        AppMode::Confirm => vec![item("y", "yes"), item("n", "no")],
        AppMode::Help => vec![item("Esc", "close")],
    }
}

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        // Status segment
        let status_span = if let Some(err) = &state.last_error {
            Span::styled(format!("  {}  ", err.message), theme.status_error)
        } else if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.status_info)
        } else if state.roll.is_rolling() {
            Span::styled("  ROLLING  ", theme.status_warn)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mut spans = vec![status_span, Span::raw(" ")];
        if !state.store_location.is_empty() {
            spans.push(Span::styled(
                format!(" {} ", state.store_location),
                theme.dimmed,
            ));
            spans.push(Span::raw(" "));
        }

        let available_width = area.width.saturating_sub(2) as usize;
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for hint in get_items(state) {
            let key_str = format!(" {} ", hint.key);
            let desc_str = format!(" {} ", hint.desc);
            let item_width = key_str.len() + desc_str.len() + 1;
            if current_width + item_width > available_width {
                break;
            }
            spans.push(Span::styled(key_str, theme.footer_segment_key));
            spans.push(Span::styled(desc_str, theme.footer_segment_val));
            spans.push(Span::raw(" "));
            current_width += item_width;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
