//! Ratatui-based browser implementation
//!
//! Implements the `Browser` trait with a crossterm terminal. Drawing is split
//! into free functions over [`AppState`] so screens can be rendered into a
//! `TestBackend`.

use super::events::{DetailAction, EventResult, poll_and_handle};
use super::state::{AppState, Mode};
use super::theme::Theme;
use super::widgets::{
    DetailPane, HelpBar, HelpOverlay, ItemList, KeyHint, MapPane, SearchBar, StatusBar,
};
use crate::browse::{BrowseViewModel, execute_copy_coordinates, execute_open_in_web_map};
use crate::catalog::Catalog;
use crate::config::MapDetail;
use crate::ui::error::Result;
use crate::ui::traits::{Browser, BrowserConfig};
use crate::ui::types::{BrowseResult, MessageLevel};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Key hints for both screens, built once per session
struct Hints {
    browse: Vec<KeyHint>,
    detail: Vec<KeyHint>,
}

impl Hints {
    fn new() -> Self {
        Self {
            browse: HelpBar::browse_hints(),
            detail: HelpBar::detail_hints(),
        }
    }
}

/// Ratatui-based browser
pub struct RatatuiBrowser {
    theme: Theme,
}

impl RatatuiBrowser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        Ok(())
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        catalog: &Catalog,
        config: &BrowserConfig,
    ) -> Result<BrowseResult> {
        let mut view_model = BrowseViewModel::new(catalog)
            .with_camera(config.camera)
            .with_detail_span(config.detail_span);
        view_model.set_search_text(config.initial_query.clone());

        let mut state = AppState::new(view_model, config.message_ttl);
        let hints = Hints::new();

        loop {
            state.cleanup_messages();

            terminal.draw(|frame| {
                render(frame, &mut state, &self.theme, &hints, config.map_detail);
            })?;

            match poll_and_handle(&mut state, Duration::from_millis(50))? {
                EventResult::Action(action) => run_action(&mut state, action),
                EventResult::Quit => break,
                _ => {}
            }

            if state.should_exit {
                break;
            }
        }

        log::info!(
            "browse session ended query={:?} viewed={}",
            state.query,
            state.viewed.len()
        );
        Ok(state.into_result())
    }
}

impl Default for RatatuiBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl Browser for RatatuiBrowser {
    fn run(&self, catalog: &Catalog, config: &BrowserConfig) -> Result<BrowseResult> {
        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal, catalog, config);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            log::error!("terminal cleanup failed: {e}");
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }
}

/// Perform a detail-screen action and report it in the status bar
fn run_action(state: &mut AppState<'_>, action: DetailAction) {
    let Some(detail) = state.detail.as_ref() else {
        return;
    };
    let outcome = match action {
        DetailAction::OpenWebMap => execute_open_in_web_map(detail.item(), detail.camera().span),
        DetailAction::CopyCoordinates => execute_copy_coordinates(detail.item()),
    };
    let level = if outcome.is_success() {
        MessageLevel::Success
    } else {
        MessageLevel::Error
    };
    state.push_message(level, outcome.message());
}

/// Draw whichever screen is active, plus the help overlay if open
fn render(
    frame: &mut Frame,
    state: &mut AppState<'_>,
    theme: &Theme,
    hints: &Hints,
    map_detail: MapDetail,
) {
    let area = frame.area();

    match state.screen() {
        Mode::Detail => render_detail(frame, state, theme, &hints.detail, map_detail, area),
        _ => render_browse(frame, state, theme, &hints.browse, map_detail, area),
    }

    if state.mode == Mode::Help {
        frame.render_widget(HelpOverlay::new(theme), area);
    }
}

/// Search bar, spot list beside the map, status and help bars
fn render_browse(
    frame: &mut Frame,
    state: &mut AppState<'_>,
    theme: &Theme,
    hints: &[KeyHint],
    map_detail: MapDetail,
    area: Rect,
) {
    let [search_area, content_area, status_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let [list_area, map_area] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .areas(content_area);

    // List rows are two lines tall, inside a border
    state.visible_height = (list_area.height.saturating_sub(2) / 2).max(1) as usize;

    let search_bar = SearchBar::new(&state.query, state.query_cursor, theme)
        .counts(state.filtered_len(), state.view_model.catalog().len())
        .focused(state.mode == Mode::Browse);
    frame.render_widget(search_bar, search_area);

    frame.render_widget(ItemList::new(state, theme), list_area);

    let scene = state.view_model.map_scene();
    frame.render_widget(
        MapPane::new(&scene, theme).detail(map_detail).title("Map"),
        map_area,
    );

    let messages = state.active_messages();
    let status_bar = StatusBar::new(&messages, theme).with_camera(state.view_model.camera());
    frame.render_widget(status_bar, status_area);

    frame.render_widget(HelpBar::new(hints, theme), help_area);
}

/// Text block over a map centered on the item
fn render_detail(
    frame: &mut Frame,
    state: &AppState<'_>,
    theme: &Theme,
    hints: &[KeyHint],
    map_detail: MapDetail,
    area: Rect,
) {
    let Some(detail) = state.detail.as_ref() else {
        return;
    };

    let [text_area, map_area, status_area, help_area] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Min(8),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(DetailPane::new(detail, theme), text_area);

    let scene = detail.map_scene();
    frame.render_widget(
        MapPane::new(&scene, theme).detail(map_detail).title("Location"),
        map_area,
    );

    let messages = state.active_messages();
    frame.render_widget(
        StatusBar::new(&messages, theme).with_camera(detail.camera()),
        status_area,
    );

    frame.render_widget(HelpBar::new(hints, theme), help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ratatui_adapter::widgets::{EMPTY_TEXT, PLACEHOLDER, SENTINEL_HINT};
    use ratatui::backend::TestBackend;

    fn make_state(catalog: &Catalog) -> AppState<'_> {
        AppState::new(BrowseViewModel::new(catalog), Duration::from_secs(5))
    }

    fn draw(state: &mut AppState<'_>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let theme = Theme::default();
        let hints = Hints::new();
        terminal
            .draw(|frame| render(frame, state, &theme, &hints, MapDetail::Low))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_browse_screen_shows_all_spots_and_placeholder() {
        let catalog = Catalog::builtin();
        let mut state = make_state(&catalog);
        let screen = draw(&mut state);

        assert!(screen.contains(PLACEHOLDER));
        assert!(screen.contains("Spots (5/5)"));
        assert!(screen.contains("Flowers Hall"));
        assert!(screen.contains("How to Find the Right Spot"));
        assert!(state.visible_height >= 1);
    }

    #[test]
    fn test_browse_screen_filters_list() {
        let catalog = Catalog::builtin();
        let mut state = make_state(&catalog);
        for c in "braunfels".chars() {
            state.query_push(c);
        }
        let screen = draw(&mut state);

        assert!(screen.contains("Spots (1/5)"));
        assert!(screen.contains("New Braunfels Coffee"));
        assert!(!screen.contains("Flowers Hall"));
    }

    #[test]
    fn test_browse_screen_empty_state() {
        let catalog = Catalog::builtin();
        let mut state = make_state(&catalog);
        for c in "atlantis".chars() {
            state.query_push(c);
        }
        let screen = draw(&mut state);
        assert!(screen.contains(EMPTY_TEXT));
        assert!(screen.contains("Spots (0/5)"));
    }

    #[test]
    fn test_detail_screen_shows_item_text() {
        let catalog = Catalog::builtin();
        let mut state = make_state(&catalog);
        assert!(state.open_detail());
        let screen = draw(&mut state);

        assert!(screen.contains("Flowers Hall"));
        assert!(screen.contains("Neighborhood: Texas State University Campus"));
        assert!(screen.contains("Location (1 pin)"));
        assert!(!screen.contains(SENTINEL_HINT));
    }

    #[test]
    fn test_detail_screen_for_sentinel_item() {
        let catalog = Catalog::builtin();
        let mut state = make_state(&catalog);
        state.jump_to_end();
        assert!(state.open_detail());
        let screen = draw(&mut state);

        assert!(screen.contains("How to Find the Right Spot"));
        assert!(screen.contains(SENTINEL_HINT));
    }

    #[test]
    fn test_help_overlay_over_detail() {
        let catalog = Catalog::builtin();
        let mut state = make_state(&catalog);
        state.open_detail();
        state.open_help();
        let screen = draw(&mut state);

        assert!(screen.contains("Press any key to close"));
        assert!(screen.contains("Location"));
    }

    #[test]
    fn test_run_action_without_detail_is_noop() {
        let catalog = Catalog::builtin();
        let mut state = make_state(&catalog);
        run_action(&mut state, DetailAction::CopyCoordinates);
        assert!(state.messages.is_empty());
    }
}
