use ratatui::style::Color;

/// Named color slots every theme fills in. Slot names follow Catppuccin;
/// other palettes map their closest colors onto them.
pub struct Palette {
    pub base: Color,
    pub mantle: Color,
    pub crust: Color,
    pub text: Color,
    pub subtext0: Color,
    pub subtext1: Color,
    pub surface0: Color,
    pub surface1: Color,
    pub surface2: Color,
    pub overlay0: Color,
    pub overlay1: Color,
    pub overlay2: Color,
    pub blue: Color,
    pub lavender: Color,
    pub sapphire: Color,
    pub sky: Color,
    pub teal: Color,
    pub green: Color,
    pub yellow: Color,
    pub peach: Color,
    pub maroon: Color,
    pub red: Color,
    pub mauve: Color,
    pub pink: Color,
    pub flamingo: Color,
    pub rosewater: Color,
}

/// Scale an `Rgb` color's channels by `factor` (0.0 = black, 1.0 = unchanged).
/// Non-Rgb colors pass through.
#[must_use]
pub fn dim_color(c: Color, factor: f32) -> Color {
    if let Color::Rgb(r, g, b) = c {
        let scale = |v: u8| (f32::from(v) * factor.clamp(0.0, 1.0)) as u8;
        Color::Rgb(scale(r), scale(g), scale(b))
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_color() {
        assert_eq!(dim_color(Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(dim_color(Color::Rgb(10, 10, 10), 2.0), Color::Rgb(10, 10, 10));
        assert_eq!(dim_color(Color::Red, 0.5), Color::Red);
    }
}
