use crate::app::state::{AppTextArea, EditorFocus, EditorState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{centered_box, draw_drop_shadow};

// Label rows: "Title", the title field, a gap, "Options", a gap and the hints.
const FIXED_ROWS: u16 = 6;
const LABEL_WIDTH: u16 = 5;

pub struct EditorModal<'a> {
    pub theme: &'a Theme,
    pub editor: &'a EditorState<'a>,
}

impl EditorModal<'_> {
    fn field(&self, field: &AppTextArea, focused: bool, area: Rect, buf: &mut Buffer) {
        if area.width == 0 {
            return;
        }
        if focused {
            buf.set_style(area, self.theme.input_focus);
            Widget::render(field, area, buf);
            return;
        }
        let value = field.value();
        let span = if value.is_empty() {
            Span::styled(field.placeholder_text().to_string(), self.theme.input_placeholder)
        } else {
            Span::styled(value, self.theme.list_item)
        };
        buf.set_line(area.x, area.y, &Line::from(span), area.width);
    }

    fn hints(&self) -> Line<'static> {
        let key = self.theme.footer_segment_key;
        let mut spans = vec![
            Span::styled("Tab", key),
            Span::raw(" next "),
            Span::styled("^N", key),
            Span::raw(" add "),
            Span::styled("^D", key),
            Span::raw(" remove "),
            Span::styled("^S", key),
            Span::raw(" save "),
        ];
        if self.editor.deletable {
            spans.push(Span::styled("^X", self.theme.status_error));
            spans.push(Span::raw(" delete "));
        }
        spans.push(Span::styled("Esc", key));
        spans.push(Span::raw(" cancel"));
        Line::from(spans)
    }
}

impl Widget for EditorModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let editor = self.editor;
        let rows = u16::try_from(editor.options.len().max(1)).unwrap_or(u16::MAX);
        let wanted_height = FIXED_ROWS.saturating_add(rows).saturating_add(2);
        let width = (area.width.saturating_mul(3) / 5).max(64);
        let modal_area = centered_box(width, wanted_height, area);
        if modal_area.width < 4 || modal_area.height < 3 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(editor.heading(), self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let x = inner.x + 1;
        let w = inner.width.saturating_sub(2);
        let bottom = inner.bottom();
        let mut y = inner.y;

        let put_line = |line: &Line, y: u16, buf: &mut Buffer| {
            if y < bottom {
                buf.set_line(x, y, line, w);
            }
        };

        put_line(&Line::styled("Title", self.theme.stage_title), y, buf);
        y += 1;
        if y < bottom {
            self.field(
                &editor.title,
                editor.focus == EditorFocus::Title,
                Rect::new(x, y, w, 1),
                buf,
            );
        }
        y += 2;
        put_line(&Line::styled("Options", self.theme.stage_title), y, buf);
        y += 1;

        // Keep the focused row in view when the list is taller than the box.
        let visible = bottom.saturating_sub(y).saturating_sub(2).max(1) as usize;
        let focused_row = match editor.focus {
            EditorFocus::Option(i) => i,
            EditorFocus::Title => 0,
        };
        let offset = (focused_row + 1).saturating_sub(visible);

        for (row, field) in editor.options.iter().enumerate().skip(offset).take(visible) {
            if y >= bottom {
                break;
            }
            let label = format!("{:>3}.", row + 1);
            buf.set_string(x, y, &label, self.theme.dimmed);
            let field_area = Rect::new(
                x + LABEL_WIDTH,
                y,
                w.saturating_sub(LABEL_WIDTH),
                1,
            );
            self.field(field, editor.focus == EditorFocus::Option(row), field_area, buf);
            y += 1;
        }
        if editor.options.is_empty() {
            put_line(&Line::styled("  (no options)", self.theme.dimmed), y, buf);
        }

        let hints = self.hints();
        if bottom > inner.y {
            buf.set_line(x, bottom - 1, &hints, w);
        }
    }
}
