use crate::domain::registry::RegistryEntry;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, StatefulWidget},
};

pub const CREATE_LABEL: &str = "Create New List";

/// The list selector: every stored list, then the create entry.
///
/// The highlighted row always follows the entry marked `active`; the
/// `ListState` only carries the scroll offset between frames.
pub struct Sidebar<'a> {
    pub entries: &'a [RegistryEntry],
    pub theme: &'a Theme,
    pub focused: bool,
}

impl StatefulWidget for Sidebar<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = self.theme;
        state.select(
            self.entries
                .iter()
                .position(|entry| matches!(entry, RegistryEntry::List { active: true, .. })),
        );
        let (border, title_style) = if self.focused {
            (theme.border_focus, theme.header_active)
        } else {
            (theme.border, theme.header_item)
        };

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| match entry {
                RegistryEntry::List {
                    index,
                    title,
                    locked,
                    ..
                } => {
                    let mut spans = vec![
                        Span::styled(format!(" {} ", index + 1), theme.dimmed),
                        Span::styled(title.as_str(), theme.list_item),
                    ];
                    if *locked {
                        spans.push(Span::styled(format!(" {}", glyphs::LOCK), theme.list_locked));
                    }
                    ListItem::new(Line::from(spans))
                }
                RegistryEntry::CreateNew => ListItem::new(Line::from(Span::styled(
                    format!(" {} {CREATE_LABEL}", glyphs::PLUS),
                    theme.list_create,
                ))),
            })
            .collect();

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("LISTS", title_style),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("n", theme.footer_segment_key),
                Span::raw(": new "),
                Span::styled("e", theme.footer_segment_key),
                Span::raw(": edit "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        StatefulWidget::render(
            List::new(items)
                .block(block)
                .highlight_style(theme.list_selected),
            area,
            buf,
            state,
        );
    }
}
