use ratatui::style::Color;

use crate::models::Theme;

/// Concrete colors for one theme.
///
/// The palette is the terminal rendering of the persisted theme flag: every
/// widget styles itself from here, so flipping the theme restyles the whole
/// frame on the next draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    /// Text color on accent-colored rows (selections).
    pub accent_fg: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                bg: Color::Rgb(250, 250, 250),
                fg: Color::Rgb(24, 24, 27),
                muted: Color::Rgb(113, 113, 122),
                accent: Color::Rgb(5, 150, 105),
                accent_fg: Color::Rgb(250, 250, 250),
                error: Color::Rgb(220, 38, 38),
            },
            Theme::Dark => Palette {
                bg: Color::Rgb(24, 24, 27),
                fg: Color::Rgb(250, 250, 250),
                muted: Color::Rgb(113, 113, 122),
                accent: Color::Rgb(16, 185, 129),
                accent_fg: Color::Rgb(24, 24, 27),
                error: Color::Rgb(239, 68, 68),
            },
        }
    }
}
