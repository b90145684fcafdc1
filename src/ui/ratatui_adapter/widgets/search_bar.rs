//! Search bar widget for the neighborhood query

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Shown while the query is empty
pub const PLACEHOLDER: &str = "Search by Neighborhood";

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    query: &'a str,
    /// Byte offset of the cursor in `query`
    cursor: usize,
    /// Number of items currently matching
    matches: usize,
    total: usize,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            matches: 0,
            total: 0,
            theme,
            focused: true,
        }
    }

    /// Show "matches/total" in the title
    #[must_use]
    pub const fn counts(mut self, matches: usize, total: usize) -> Self {
        self.matches = matches;
        self.total = total;
        self
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let title = format!(" Search ({}/{}) ", self.matches, self.total);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let caret = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let mut spans = vec![Span::styled(">", self.theme.cursor_style()), Span::raw(" ")];

        if self.query.is_empty() {
            spans.push(caret);
            spans.push(Span::styled(PLACEHOLDER, self.theme.dimmed_style()));
        } else {
            let at = if self.query.is_char_boundary(self.cursor) {
                self.cursor
            } else {
                self.query.len()
            };
            let (before, after) = self.query.split_at(at);
            spans.push(Span::raw(before));
            spans.push(caret);
            spans.push(Span::raw(after));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
