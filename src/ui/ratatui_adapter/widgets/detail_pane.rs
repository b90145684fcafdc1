//! Text half of the detail screen

use crate::detail::DetailView;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Shown for items whose coordinates are the 0,0 placeholder
pub const SENTINEL_HINT: &str = "This spot has no real map location";

/// Title, image reference, neighborhood and description of one spot
pub struct DetailPane<'a> {
    view: &'a DetailView<'a>,
    theme: &'a Theme,
}

impl<'a> DetailPane<'a> {
    #[must_use]
    pub const fn new(view: &'a DetailView<'a>, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    fn build_content(&self) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Image: ", self.theme.dimmed_style()),
                Span::styled(self.view.image_name().to_string(), self.theme.image_style()),
            ]),
            Line::styled(self.view.neighborhood_line(), self.theme.neighborhood_style()),
            Line::raw(self.view.description_line()),
        ];
        if self.view.is_sentinel() {
            lines.push(Line::styled(SENTINEL_HINT, self.theme.sentinel_style()));
        }
        lines
    }
}

impl Widget for DetailPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Span::styled(
            format!(" {} ", self.view.title()),
            self.theme.cursor_style().add_modifier(Modifier::BOLD),
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(title);

        Paragraph::new(self.build_content())
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
