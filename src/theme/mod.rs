use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod glyphs;
pub mod gruvbox;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub list_item: Style,
    pub list_selected: Style,
    pub list_locked: Style,
    pub list_create: Style,

    pub stage_title: Style,
    pub stage_option: Style,
    pub result_placeholder: Style,
    pub result_rolling: Style,
    pub result_decided: Style,
    pub result_emphasis: Style,
    pub result_bg: Style,

    pub trigger_idle: Style,
    pub trigger_disabled: Style,

    pub history_title: Style,
    pub history_value: Style,
    pub timestamp: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,

    pub header_logo: Style,
    pub header_list: Style,
    pub header_stats: Style,
    pub header_active: Style,
    pub header_warn: Style,
    pub header_item: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub input_focus: Style,
    pub input_placeholder: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
    Gruvbox,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
            PaletteType::Gruvbox => "Gruvbox",
        }
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
            PaletteType::Gruvbox => Self::from_palette(&gruvbox::GRUVBOX),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            list_item: Style::default().fg(p.text),
            list_selected: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_locked: Style::default().fg(p.overlay1).add_modifier(Modifier::DIM),
            list_create: Style::default().fg(p.green).add_modifier(Modifier::ITALIC),

            stage_title: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),
            stage_option: Style::default().fg(p.subtext0),
            result_placeholder: Style::default().fg(p.overlay0).add_modifier(Modifier::ITALIC),
            result_rolling: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),
            result_decided: Style::default().fg(p.yellow).add_modifier(Modifier::BOLD),
            result_emphasis: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            result_bg: Style::default().bg(dim_color(p.surface0, 0.8)),

            trigger_idle: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            trigger_disabled: Style::default()
                .bg(p.surface1)
                .fg(p.overlay0)
                .add_modifier(Modifier::DIM),

            history_title: Style::default().fg(p.subtext0),
            history_value: Style::default().fg(p.peach).add_modifier(Modifier::BOLD),
            timestamp: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_warn: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_list: Style::default()
                .bg(p.mauve)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_stats: Style::default().bg(p.surface0).fg(p.subtext1),
            header_active: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_warn: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header: Style::default().bg(p.base).fg(p.text),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            input_focus: Style::default().fg(p.text).bg(p.surface0),
            input_placeholder: Style::default().fg(p.overlay0).add_modifier(Modifier::ITALIC),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}
