//! TUI styles and the light/dark color themes.

use ratatui::style::{Color, Modifier, Style};

/// Cosmetic theme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Theme name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a theme name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub error: Color,
    pub operator: Color,
    pub accent: Color,
    pub highlight: Color,
}

impl ColorTheme {
    /// Colors for the selected theme.
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                primary: Color::Cyan,
                text: Color::White,
                muted: Color::DarkGray,
                border: Color::Gray,
                error: Color::Red,
                operator: Color::Yellow,
                accent: Color::Green,
                highlight: Color::Magenta,
            },
            Theme::Light => Self {
                primary: Color::Blue,
                text: Color::Black,
                muted: Color::Gray,
                border: Color::DarkGray,
                error: Color::Red,
                operator: Color::Blue,
                accent: Color::Green,
                highlight: Color::Magenta,
            },
        }
    }

    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get the style for error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Get the style for the main result line.
    #[must_use]
    pub fn display_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Get the style for a grid button.
    #[must_use]
    pub fn button_style(&self, operator: bool) -> Style {
        if operator {
            Style::default().fg(self.operator)
        } else {
            Style::default().fg(self.text)
        }
    }

    /// Get the style for the wide (`0` / `=`) buttons.
    #[must_use]
    pub fn wide_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Get the style for the button under the grid cursor.
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    /// Get the style for the selected history row.
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for the customer-field acknowledgment pulse.
    #[must_use]
    pub fn pulse_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::REVERSED)
    }
}
