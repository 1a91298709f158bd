use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::confirm::ConfirmModal;
use super::editor::EditorModal;
use super::error::ErrorModal;
use super::help::HelpModal;
use super::helpers::dim_area;

/// Draws whatever overlays the current mode calls for, errors on top.
pub struct ModalManager<'a> {
    pub theme: &'a Theme,
    pub app_state: &'a AppState<'a>,
}

impl Widget for ModalManager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // --- Visual Dimming ---
        let is_modal_active = !matches!(self.app_state.mode, AppMode::Normal | AppMode::Loading)
            || self.app_state.last_error.is_some();

        if is_modal_active {
            dim_area(buf, area);
        }

        match self.app_state.mode {
            AppMode::Help => HelpModal { theme: self.theme }.render(area, buf),
            AppMode::Editor | AppMode::Confirm => {
                // A delete prompt sits over the editor it came from.
                if let Some(editor) = &self.app_state.editor {
                    EditorModal {
                        theme: self.theme,
                        editor,
                    }
                    .render(area, buf);
                }
                if let Some(confirm) = &self.app_state.confirm {
                    ConfirmModal {
                        theme: self.theme,
                        confirm,
                    }
                    .render(area, buf);
                }
            }
            AppMode::Normal | AppMode::Loading => {}
        }

        // --- Error Modal ---
        if let Some(error) = &self.app_state.last_error {
            ErrorModal {
                theme: self.theme,
                error,
            }
            .render(area, buf);
        }
    }
}
