//! Theme support for the TUI
//!
//! Three built-in palettes: Catppuccin Mocha, Nord, and Catppuccin Latte
//! for light terminals. `t` cycles between them at runtime.

use ratatui::style::Color;

use crate::config::DeckTheme;

/// A complete color theme for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Borders, separators, inactive dots
    pub surface1: Color,
    /// Primary text
    pub text: Color,
    /// Secondary/dimmed text
    pub subtext0: Color,
    /// Highlights, focused card, active dot
    pub blue: Color,
    /// Positive actions (Book)
    pub green: Color,
    /// Prices
    pub yellow: Color,
    /// Errors
    pub red: Color,
    /// Titles
    pub mauve: Color,
    /// Buy badge
    pub peach: Color,
}

const MOCHA: Theme = Theme {
    name: "Mocha",
    surface1: Color::Rgb(69, 71, 90),
    text: Color::Rgb(205, 214, 244),
    subtext0: Color::Rgb(166, 173, 200),
    blue: Color::Rgb(137, 180, 250),
    green: Color::Rgb(166, 227, 161),
    yellow: Color::Rgb(249, 226, 175),
    red: Color::Rgb(243, 139, 168),
    mauve: Color::Rgb(203, 166, 247),
    peach: Color::Rgb(250, 179, 135),
};

const NORD: Theme = Theme {
    name: "Nord",
    surface1: Color::Rgb(76, 86, 106),
    text: Color::Rgb(236, 239, 244),
    subtext0: Color::Rgb(216, 222, 233),
    blue: Color::Rgb(136, 192, 208),
    green: Color::Rgb(163, 190, 140),
    yellow: Color::Rgb(235, 203, 139),
    red: Color::Rgb(191, 97, 106),
    mauve: Color::Rgb(180, 142, 173),
    peach: Color::Rgb(208, 135, 112),
};

const LATTE: Theme = Theme {
    name: "Latte",
    surface1: Color::Rgb(188, 192, 204),
    text: Color::Rgb(76, 79, 105),
    subtext0: Color::Rgb(108, 111, 133),
    blue: Color::Rgb(30, 102, 245),
    green: Color::Rgb(64, 160, 43),
    yellow: Color::Rgb(223, 142, 29),
    red: Color::Rgb(210, 15, 57),
    mauve: Color::Rgb(136, 57, 239),
    peach: Color::Rgb(254, 100, 11),
};

/// Selectable theme, cycled with `t`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Mocha,
    Nord,
    Latte,
}

impl ThemeVariant {
    pub fn theme(&self) -> &'static Theme {
        match self {
            ThemeVariant::Mocha => &MOCHA,
            ThemeVariant::Nord => &NORD,
            ThemeVariant::Latte => &LATTE,
        }
    }

    pub fn next(&self) -> ThemeVariant {
        match self {
            ThemeVariant::Mocha => ThemeVariant::Nord,
            ThemeVariant::Nord => ThemeVariant::Latte,
            ThemeVariant::Latte => ThemeVariant::Mocha,
        }
    }

    pub fn from_config_theme(theme: DeckTheme) -> Self {
        match theme {
            DeckTheme::Mocha => ThemeVariant::Mocha,
            DeckTheme::Nord => ThemeVariant::Nord,
            DeckTheme::Latte => ThemeVariant::Latte,
        }
    }

    pub fn to_config_theme(&self) -> DeckTheme {
        match self {
            ThemeVariant::Mocha => DeckTheme::Mocha,
            ThemeVariant::Nord => DeckTheme::Nord,
            ThemeVariant::Latte => DeckTheme::Latte,
        }
    }
}
