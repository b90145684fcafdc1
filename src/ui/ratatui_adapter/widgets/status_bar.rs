//! Status bar widget for displaying messages and the map camera

use crate::map::CameraPosition;
use crate::output;
use crate::ui::ratatui_adapter::state::StatusMessage;
use crate::ui::ratatui_adapter::theme::Theme;
use crate::ui::types::MessageLevel;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget that displays the most recent message
pub struct StatusBar<'a> {
    messages: &'a [&'a StatusMessage],
    theme: &'a Theme,
    /// Camera of the map currently on screen
    camera: Option<&'a CameraPosition>,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(messages: &'a [&'a StatusMessage], theme: &'a Theme) -> Self {
        Self {
            messages,
            theme,
            camera: None,
        }
    }

    /// Show the given camera on the right side
    #[must_use]
    pub const fn with_camera(mut self, camera: &'a CameraPosition) -> Self {
        self.camera = Some(camera);
        self
    }

    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Info => self.theme.info_style(),
        }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Info => "ℹ ",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(inner);

        if let Some(msg) = self.messages.last() {
            let style = self.style_for_level(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(left, buf);
        }

        if let Some(camera) = self.camera {
            Paragraph::new(Line::styled(output::camera(camera), self.theme.dimmed_style()))
                .right_aligned()
                .render(right, buf);
        }
    }
}
