//! Application state for the ratatui TUI
//!
//! Wraps the browse view-model with everything the terminal needs on top of
//! it: the query cursor, list cursor and scroll, the open detail view, the
//! current mode and status messages.

use crate::browse::BrowseViewModel;
use crate::catalog::{Item, ItemId};
use crate::detail::DetailView;
use crate::map::CameraPosition;
use crate::ui::types::{BrowseResult, MessageLevel};
use std::time::{Duration, Instant};

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Search, list and browse map
    #[default]
    Browse,
    /// Detail screen for one item
    Detail,
    /// Help overlay is visible
    Help,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Application state for the browser
#[derive(Debug)]
pub struct AppState<'a> {
    /// Search text and derived catalog views
    pub view_model: BrowseViewModel<'a>,
    /// Query text as typed; mirrored into the view-model on every edit
    pub query: String,
    /// Byte offset of the cursor within `query`, always on a char boundary
    pub query_cursor: usize,
    /// Cursor position in the filtered list
    pub cursor: usize,
    /// Scroll offset for the list
    pub scroll_offset: usize,
    /// Height of the visible list area (set during render)
    pub visible_height: usize,
    /// Current UI mode
    pub mode: Mode,
    /// Mode to return to when help closes
    help_return: Mode,
    /// Open detail view, if any
    pub detail: Option<DetailView<'a>>,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the browser should exit
    pub should_exit: bool,
    /// Items whose detail view has been opened
    pub viewed: Vec<ItemId>,
}

impl<'a> AppState<'a> {
    /// Create state around `view_model`, starting from its current search text
    #[must_use]
    pub fn new(view_model: BrowseViewModel<'a>, message_ttl: Duration) -> Self {
        let query = view_model.search_text().to_string();
        let query_cursor = query.len();

        Self {
            view_model,
            query,
            query_cursor,
            cursor: 0,
            scroll_offset: 0,
            visible_height: 10, // Default, updated during render
            mode: Mode::Browse,
            help_return: Mode::Browse,
            detail: None,
            messages: Vec::new(),
            message_ttl,
            should_exit: false,
            viewed: Vec::new(),
        }
    }

    /// Number of items matching the current query
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.view_model.filtered_items().len()
    }

    /// Item under the list cursor
    #[must_use]
    pub fn current_item(&self) -> Option<&'a Item> {
        self.view_model.filtered_items().get(self.cursor).copied()
    }

    /// Push the typed query into the view-model and keep the cursor valid
    fn sync_search(&mut self) {
        self.view_model.set_search_text(self.query.clone());
        let len = self.filtered_len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
        self.scroll_offset = 0;
        self.adjust_scroll();
        log::debug!("search changed query={:?} matches={len}", self.query);
    }

    // Query editing

    /// Insert a character at the query cursor
    pub fn query_push(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
        self.sync_search();
    }

    /// Delete the character before the query cursor
    pub fn query_backspace(&mut self) -> bool {
        let Some(prev) = self.query[..self.query_cursor].chars().next_back() else {
            return false;
        };
        self.query_cursor -= prev.len_utf8();
        self.query.remove(self.query_cursor);
        self.sync_search();
        true
    }

    /// Delete the character under the query cursor
    pub fn query_delete(&mut self) -> bool {
        if self.query_cursor >= self.query.len() {
            return false;
        }
        self.query.remove(self.query_cursor);
        self.sync_search();
        true
    }

    /// Delete the word before the query cursor
    pub fn query_delete_word(&mut self) -> bool {
        if self.query_cursor == 0 {
            return false;
        }
        let trimmed = self.query[..self.query_cursor].trim_end();
        let start = trimmed.rfind(' ').map_or(0, |idx| idx + 1);
        self.query.drain(start..self.query_cursor);
        self.query_cursor = start;
        self.sync_search();
        true
    }

    /// Clear the whole query
    pub fn query_clear(&mut self) -> bool {
        if self.query.is_empty() {
            return false;
        }
        self.query.clear();
        self.query_cursor = 0;
        self.sync_search();
        true
    }

    /// Move the query cursor one character left
    pub fn query_cursor_left(&mut self) {
        if let Some(prev) = self.query[..self.query_cursor].chars().next_back() {
            self.query_cursor -= prev.len_utf8();
        }
    }

    /// Move the query cursor one character right
    pub fn query_cursor_right(&mut self) {
        if let Some(next) = self.query[self.query_cursor..].chars().next() {
            self.query_cursor += next.len_utf8();
        }
    }

    // List navigation

    /// Move cursor up
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.filtered_len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor up by one page
    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height.max(1));
        self.adjust_scroll();
    }

    /// Move cursor down by one page
    pub fn page_down(&mut self) {
        let max_cursor = self.filtered_len().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height.max(1)).min(max_cursor);
        self.adjust_scroll();
    }

    /// Jump to first item
    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    /// Jump to last item
    pub fn jump_to_end(&mut self) {
        self.cursor = self.filtered_len().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Adjust scroll offset to keep cursor visible
    fn adjust_scroll(&mut self) {
        let height = self.visible_height.max(1);
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    // Screens

    /// Open the detail view for the item under the cursor
    ///
    /// Returns `false` when the list is empty.
    pub fn open_detail(&mut self) -> bool {
        let Some(detail) = self.view_model.select(self.cursor) else {
            return false;
        };
        log::info!("detail opened name={:?}", detail.title());
        self.viewed.push(detail.item().id);
        self.detail = Some(detail);
        self.mode = Mode::Detail;
        true
    }

    /// Leave the detail view, dropping its camera
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.mode = Mode::Browse;
    }

    /// Show the help overlay over the current screen
    pub fn open_help(&mut self) {
        if self.mode != Mode::Help {
            self.help_return = self.mode;
            self.mode = Mode::Help;
        }
    }

    /// Close the help overlay
    pub fn close_help(&mut self) {
        if self.mode == Mode::Help {
            self.mode = self.help_return;
        }
    }

    /// Screen under the help overlay, or the current screen
    #[must_use]
    pub const fn screen(&self) -> Mode {
        match self.mode {
            Mode::Help => self.help_return,
            mode => mode,
        }
    }

    /// Camera of whichever screen is showing
    pub fn active_camera_mut(&mut self) -> &mut CameraPosition {
        match (self.screen(), self.detail.as_mut()) {
            (Mode::Detail, Some(detail)) => detail.camera_mut(),
            _ => self.view_model.camera_mut(),
        }
    }

    // Messages

    /// Add a status message
    pub fn push_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(StatusMessage::new(level, text.into()));
    }

    /// Messages that have not expired yet
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Drop expired messages
    pub fn cleanup_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages.retain(|m| !m.is_expired(ttl));
    }

    /// Finish the session
    #[must_use]
    pub fn into_result(self) -> BrowseResult {
        BrowseResult::new(self.query, self.viewed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::map::PanDirection;

    fn make_state(catalog: &Catalog) -> AppState<'_> {
        AppState::new(BrowseViewModel::new(catalog), Duration::from_secs(5))
    }

    fn type_text(state: &mut AppState<'_>, text: &str) {
        for c in text.chars() {
            state.query_push(c);
        }
    }

    #[test]
    fn test_typing_filters() {
        let catalog = Catalog::builtin();
        let mut state = make_state(&catalog);
        assert_eq!(state.filtered_len(), 5);

        type_text(&mut state, "Campus");
        assert_eq!(state.view_model.search_text(), "Campus");
        assert_eq!(state.filtered_len(), 2);
    }

    #[test]
    fn test_cursor_clamped_when_list_shrinks() {
        let catalog = Catalog::builtin();
        let mut state = make_state(&catalog);
        state.jump_to_end();
        assert_eq!(state.cursor, 4);

        type_text(&mut state, "texas state");
        assert_eq!(state.cursor, 1);

        type_text(&mut state, "zzz");
        assert_eq!(state.cursor, 0);
        assert!(state.current_item().is_none());
    }

    #[test]
    fn test_backspace_and_cursor_moves() {
        let catalog = Catalog::builtin();
        let mut state = make_state(&catalog);
        type_text(&mut state, "abc");
        state.query_cursor_left();
        assert!(state.query_backspace());
        assert_eq!(state.query, "ac");
        assert_eq!(state.query_cursor, 1);
        assert!(state.query_delete());
        assert_eq!(state.query, "a");
        assert!(!state.query_delete());
    }

    #[test]
    fn test_multibyte_query_editing() {
        let catalog = Catalog::builtin();
        let mut state = make_state(&catalog);
        type_text(&mut state, "é");
        assert_eq!(state.query_cursor, 2);
        state.query_cursor_left();
        assert_eq!(state.query_cursor, 0);
        state.query_cursor_right();
        assert!(state.query_backspace());
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_delete_word() {
        let catalog = Catalog::builtin();
        let mut state = make_state(&catalog);
        type_text(&mut state, "san marcos ");
        assert!(state.query_delete_word());
        assert_eq!(state.query, "san ");
        assert!(state.query_delete_word());
        assert!(state.query.is_empty());
        assert!(!state.query_delete_word());
    }

    #[test]
    fn test_open_and_close_detail() {
        let catalog = Catalog::builtin();
        let mut state = make_state(&catalog);
        state.cursor_down();
        assert!(state.open_detail());
        assert_eq!(state.mode, Mode::Detail);
        assert_eq!(state.detail.as_ref().unwrap().title(), "Albert B. Alkek Library");

        state.close_detail();
        assert_eq!(state.mode, Mode::Browse);
        assert!(state.detail.is_none());
        assert_eq!(state.viewed.len(), 1);
    }

    #[test]
    fn test_open_detail_on_empty_list() {
        let catalog = Catalog::builtin();
        let mut state = make_state(&catalog);
        type_text(&mut state, "zzz-no-such-place");
        assert!(!state.open_detail());
        assert_eq!(state.mode, Mode::Browse);
    }

    #[test]
    fn test_help_returns_to_previous_screen() {
        let catalog = Catalog::builtin();
        let mut state = make_state(&catalog);
        state.open_detail();
        state.open_help();
        assert_eq!(state.mode, Mode::Help);
        assert_eq!(state.screen(), Mode::Detail);
        state.close_help();
        assert_eq!(state.mode, Mode::Detail);
    }

    #[test]
    fn test_active_camera_follows_screen() {
        let catalog = Catalog::builtin();
        let mut state = make_state(&catalog);
        let browse_before = *state.view_model.camera();

        state.open_detail();
        state.active_camera_mut().pan(PanDirection::North);
        assert_eq!(*state.view_model.camera(), browse_before);

        state.close_detail();
        state.active_camera_mut().zoom_in();
        assert_ne!(*state.view_model.camera(), browse_before);
    }

    #[test]
    fn test_page_navigation() {
        let catalog = Catalog::builtin();
        let mut state = make_state(&catalog);
        state.visible_height = 2;
        state.page_down();
        assert_eq!(state.cursor, 2);
        assert_eq!(state.scroll_offset, 1);
        state.page_down();
        state.page_down();
        assert_eq!(state.cursor, 4);
        state.page_up();
        assert_eq!(state.cursor, 2);
        state.jump_to_start();
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_messages_expire() {
        let catalog = Catalog::builtin();
        let mut state = AppState::new(BrowseViewModel::new(&catalog), Duration::ZERO);
        state.push_message(MessageLevel::Info, "hello");
        std::thread::sleep(Duration::from_millis(2));
        assert!(state.active_messages().is_empty());
        state.cleanup_messages();
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_into_result() {
        let catalog = Catalog::builtin();
        let mut state = make_state(&catalog);
        type_text(&mut state, "home");
        state.open_detail();
        let result = state.into_result();
        assert_eq!(result.final_query, "home");
        assert_eq!(result.viewed, vec![catalog.get(4).unwrap().id]);
    }
}
