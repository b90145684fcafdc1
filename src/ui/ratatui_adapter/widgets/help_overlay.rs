//! Help overlay widget for displaying the full keybind reference

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn section(&self, title: &'static str) -> [Line<'static>; 2] {
        [
            Line::default(),
            Line::styled(
                title,
                self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
            ),
        ]
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.extend(self.section("  Browse"));
        lines.extend([
            Self::help_line("  Type", "Filter by neighborhood"),
            Self::help_line("  Ctrl+U", "Clear search"),
            Self::help_line("  Ctrl+W", "Delete word"),
            Self::help_line("  ←/→", "Move cursor in search"),
            Self::help_line("  ↑/↓", "Move cursor"),
            Self::help_line("  PgUp/PgDn", "Page up/down"),
            Self::help_line("  Home/End", "Jump to start/end"),
            Self::help_line("  Enter", "Open spot"),
            Self::help_line("  Alt+arrows", "Pan map"),
            Self::help_line("  Alt+ +/-", "Zoom map"),
            Self::help_line("  ESC", "Quit"),
        ]);

        lines.extend(self.section("  Spot"));
        lines.extend([
            Self::help_line("  arrows", "Pan map"),
            Self::help_line("  +/-", "Zoom map"),
            Self::help_line("  c", "Recenter on spot"),
            Self::help_line("  o", "Open in web map"),
            Self::help_line("  y", "Copy coordinates"),
            Self::help_line("  ESC", "Back to list"),
        ]);

        lines.push(Line::default());
        lines.push(Line::styled(
            "  Press any key to close",
            self.theme.dimmed_style(),
        ));
        lines
    }

    fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{key:<14}"), Style::default().fg(ratatui::style::Color::Cyan)),
            Span::raw(desc),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 80, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
