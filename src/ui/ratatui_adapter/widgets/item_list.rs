//! Item list widget for displaying filtered spots

use crate::catalog::Item;
use crate::ui::ratatui_adapter::state::AppState;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

/// Shown when no spot matches the query
pub const EMPTY_TEXT: &str = "No spots in that neighborhood";

/// Item list widget that displays the filtered spots with a cursor
pub struct ItemList<'a> {
    state: &'a AppState<'a>,
    theme: &'a Theme,
    title: String,
}

impl<'a> ItemList<'a> {
    /// Create a new item list widget
    #[must_use]
    pub fn new(state: &'a AppState<'a>, theme: &'a Theme) -> Self {
        let filtered = state.filtered_len();
        let total = state.view_model.catalog().len();
        let title = format!(" Spots ({filtered}/{total}) ");

        Self {
            state,
            theme,
            title,
        }
    }

    /// One row: cursor marker, name, then neighborhood and image reference
    fn render_item(&self, item: &'a Item, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };
        let name_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let mut spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(item.name.as_str(), name_style),
            Span::raw(" "),
            Span::styled(format!("[{}]", item.image_name), self.theme.image_style()),
        ];
        if item.has_sentinel_location() {
            spans.push(Span::styled(" (no map)", self.theme.sentinel_style()));
        }

        ListItem::new(vec![
            Line::from(spans),
            Line::from(vec![
                Span::raw("    "),
                Span::styled(item.neighborhood.as_str(), self.theme.neighborhood_style()),
            ]),
        ])
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let items = self.state.view_model.filtered_items();
        if items.is_empty() {
            Paragraph::new(Line::styled(EMPTY_TEXT, self.theme.dimmed_style()))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        // Each row takes two lines
        let visible_rows = (inner.height as usize / 2).max(1);
        let start = self.state.scroll_offset.min(items.len().saturating_sub(1));
        let end = (start + visible_rows).min(items.len());

        let rows: Vec<ListItem> = items[start..end]
            .iter()
            .enumerate()
            .map(|(offset, item)| self.render_item(item, start + offset == self.state.cursor))
            .collect();

        List::new(rows).render(inner, buf);
    }
}
