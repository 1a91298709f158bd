use crate::app::state::{ResultDisplay, StageView};
use crate::domain::engine::TRIGGER_IDLE_LABEL;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use std::time::Instant;

const TRIGGER_WIDTH: u16 = TRIGGER_IDLE_LABEL.len() as u16 + 8;

/// Where each part of the main stage lands inside its bordered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageAreas {
    pub title: Rect,
    pub options: Rect,
    pub result: Rect,
    pub trigger: Rect,
}

/// Splits the stage block at `area`. Shared with mouse hit-testing.
pub fn split(area: Rect) -> StageAreas {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(1),    // Options
            Constraint::Length(5), // Result box
            Constraint::Length(3), // Trigger
        ])
        .split(inner);

    let trigger_row = rows[3];
    let width = TRIGGER_WIDTH.min(trigger_row.width);
    let trigger = Rect {
        x: trigger_row.x + (trigger_row.width - width) / 2,
        width,
        ..trigger_row
    };

    StageAreas {
        title: rows[0],
        options: rows[1],
        result: rows[2],
        trigger,
    }
}

pub struct Stage<'a> {
    pub view: Option<StageView<'a>>,
    pub theme: &'a Theme,
    pub loading: bool,
    pub now: Instant,
}

impl Stage<'_> {
    fn render_empty(&self, inner: Rect, buf: &mut Buffer) {
        let text = if self.loading {
            "Loading your lists..."
        } else {
            "No lists yet. Press n to create one."
        };
        let y = inner.y + inner.height / 2;
        Paragraph::new(Line::styled(text, self.theme.dimmed))
            .alignment(Alignment::Center)
            .render(Rect { y, height: 1, ..inner }, buf);
    }
}

impl Widget for Stage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let Some(view) = &self.view else {
            self.render_empty(inner, buf);
            return;
        };
        let areas = split(area);

        // --- Title ---
        let mut title = vec![Span::styled(view.title, theme.stage_title)];
        if view.locked {
            title.push(Span::styled(format!(" {}", glyphs::LOCK), theme.list_locked));
        }
        Paragraph::new(Line::from(title))
            .alignment(Alignment::Center)
            .render(areas.title, buf);

        // --- Options ---
        let options = view.options.join("  \u{00b7}  ");
        Paragraph::new(Line::styled(options, theme.stage_option))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(areas.options, buf);

        // --- Result ---
        let style = match view.result {
            ResultDisplay::Placeholder => theme.result_placeholder,
            ResultDisplay::Shuffling(_) => theme.result_rolling,
            ResultDisplay::Decided { .. } if view.result.is_emphasized(self.now) => {
                theme.result_emphasis
            }
            ResultDisplay::Decided { .. } => theme.result_decided,
        };
        let result_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(theme.border_focus)
            .style(theme.result_bg);
        let result_inner = result_block.inner(areas.result);
        result_block.render(areas.result, buf);
        if result_inner.height > 0 {
            let y = result_inner.y + result_inner.height / 2;
            Paragraph::new(Line::styled(view.result.text(), style))
                .alignment(Alignment::Center)
                .render(Rect { y, height: 1, ..result_inner }, buf);
        }

        // --- Trigger ---
        let trigger_style = if view.trigger_enabled {
            theme.trigger_idle
        } else {
            theme.trigger_disabled
        };
        if areas.trigger.height > 0 {
            Paragraph::new(vec![
                Line::from(""),
                Line::from(view.trigger_label),
                Line::from(""),
            ])
            .alignment(Alignment::Center)
            .style(trigger_style)
            .render(areas.trigger, buf);
        }
    }
}
