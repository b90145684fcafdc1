//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the application.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the highlighted row
    pub selection_bg: Color,
    /// Foreground color for the highlighted row
    pub selection_fg: Color,
    /// Color for the cursor indicator
    pub cursor: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for neighborhood text
    pub neighborhood: Color,
    /// Color for image references
    pub image: Color,
    /// Color for map pins
    pub pin: Color,
    /// Color for coastlines on the map
    pub map_outline: Color,
    /// Color for items without a real location
    pub sentinel: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            neighborhood: Color::Gray,
            image: Color::Magenta,
            pin: Color::LightRed,
            map_outline: Color::DarkGray,
            sentinel: Color::Yellow,
        }
    }

    /// Style for the currently selected item
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unselected items
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    #[must_use]
    pub fn neighborhood_style(&self) -> Style {
        Style::default().fg(self.neighborhood)
    }

    #[must_use]
    pub fn image_style(&self) -> Style {
        Style::default().fg(self.image)
    }

    /// Style for map pins and their labels
    #[must_use]
    pub fn pin_style(&self) -> Style {
        Style::default().fg(self.pin).add_modifier(Modifier::BOLD)
    }

    /// Style for hints about items with no real location
    #[must_use]
    pub fn sentinel_style(&self) -> Style {
        Style::default()
            .fg(self.sentinel)
            .add_modifier(Modifier::ITALIC)
    }
}
