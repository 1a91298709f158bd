use crate::app::state::{AppMode, AppState};
use crate::components::{
    footer::Footer,
    header::Header,
    history::{HistoryPanel, COLLAPSED_HEIGHT, EXPANDED_HEIGHT},
    modals::ModalManager,
    sidebar::Sidebar,
    stage::{self, Stage, StageAreas},
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use std::time::Instant;

const SIDEBAR_WIDTH: u16 = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub stage: Rect,
    pub history: Rect,
    pub footer: Rect,
    pub stage_areas: StageAreas,
}

pub fn get_layout(area: Rect, history_visible: bool) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH.min(main[1].width / 3)),
            Constraint::Min(0),
        ])
        .split(main[1]);

    let history_height = if history_visible {
        EXPANDED_HEIGHT
    } else {
        COLLAPSED_HEIGHT
    };
    let column = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(history_height)])
        .split(body[1]);

    AppLayout {
        header: main[0],
        sidebar: body[0],
        stage: column[0],
        history: column[1],
        footer: main[2],
        stage_areas: stage::split(column[0]),
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let layout = get_layout(area, app_state.history.is_visible());
    let theme = &app_state.theme;

    // --- Header ---
    if layout.header.width > 0 && layout.header.height > 0 {
        f.render_widget(
            Header {
                registry: &app_state.registry,
                rolling: app_state.roll.is_rolling(),
                theme,
                terminal_width: area.width,
            },
            layout.header,
        );
    }

    // --- List Selector ---
    if layout.sidebar.width > 0 && layout.sidebar.height > 0 {
        let entries = app_state.registry.entries();
        f.render_stateful_widget(
            Sidebar {
                entries: &entries,
                theme,
                focused: app_state.mode == AppMode::Normal,
            },
            layout.sidebar,
            &mut app_state.sidebar_state,
        );
    }

    // --- Main Stage ---
    if layout.stage.width > 0 && layout.stage.height > 0 {
        f.render_widget(
            Stage {
                view: app_state.stage_view(),
                theme: &app_state.theme,
                loading: app_state.mode == AppMode::Loading,
                now: Instant::now(),
            },
            layout.stage,
        );
    }

    // --- History ---
    if layout.history.width > 0 && layout.history.height > 0 {
        f.render_widget(
            HistoryPanel {
                history: &app_state.history,
                theme: &app_state.theme,
            },
            layout.history,
        );
    }

    // --- Footer ---
    if layout.footer.width > 0 && layout.footer.height > 0 {
        f.render_widget(
            Footer {
                state: app_state,
                theme: &app_state.theme,
            },
            layout.footer,
        );
    }

    // --- Modals ---
    f.render_widget(
        ModalManager {
            theme: &app_state.theme,
            app_state,
        },
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::DecisionList;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_layout_parts_do_not_overlap() {
        let layout = get_layout(Rect::new(0, 0, 100, 30), true);
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.footer.y, 29);
        assert_eq!(layout.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.stage.x, SIDEBAR_WIDTH);
        assert_eq!(layout.history.height, EXPANDED_HEIGHT);
        assert_eq!(layout.stage.bottom(), layout.history.y);
        assert!(layout.stage.contains(layout.stage_areas.trigger.as_position()));

        let collapsed = get_layout(Rect::new(0, 0, 100, 30), false);
        assert_eq!(collapsed.history.height, COLLAPSED_HEIGHT);
        assert!(collapsed.stage.height > layout.stage.height);
    }

    #[test]
    fn test_draw_full_screen() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = AppState::default();
        state.mode = AppMode::Normal;
        state.registry.replace_all(vec![DecisionList::seed()]);

        terminal.draw(|f| draw(f, &mut state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let screen: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(screen.contains("DECIDER"));
        assert!(screen.contains("Create New List"));
        assert!(screen.contains("Ready?"));
        assert!(screen.contains("Decide for me"));
        assert!(screen.contains("HISTORY (0)"));
    }

    #[test]
    fn test_draw_tiny_terminal() {
        let backend = TestBackend::new(4, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = AppState::default();
        state.mode = AppMode::Editor;
        state.editor = Some(crate::app::state::EditorState::create());
        terminal.draw(|f| draw(f, &mut state)).unwrap();
    }
}
