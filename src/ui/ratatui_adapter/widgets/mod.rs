//! Ratatui widgets for the nook browser
//!
//! Custom widgets for the browse and detail screens.

mod detail_pane;
mod help_bar;
mod help_overlay;
mod item_list;
mod map_pane;
mod search_bar;
mod status_bar;

pub use detail_pane::{DetailPane, SENTINEL_HINT};
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use item_list::{EMPTY_TEXT, ItemList};
pub use map_pane::{MapPane, PIN};
pub use search_bar::{PLACEHOLDER, SearchBar};
pub use status_bar::StatusBar;
