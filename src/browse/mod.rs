//! Browse module - search and selection over the catalog
//!
//! This module holds the UI-agnostic logic behind the browse screen. Any
//! frontend (the ratatui TUI, the `list` command, tests) drives the same
//! [`BrowseViewModel`].
//!
//! # Architecture
//!
//! - `filter`: the neighborhood match rule
//! - `models`: row and outcome types handed to renderers
//! - `view_model`: search text, camera and derived views
//! - `actions`: external side effects (web map, clipboard)

pub mod actions;
pub mod filter;
pub mod models;
pub mod view_model;

pub use actions::{execute_copy_coordinates, execute_open_in_web_map, web_map_url};
pub use filter::NeighborhoodFilterExt;
pub use models::{ActionOutcome, ListRow};
pub use view_model::{BrowseViewModel, DEFAULT_BROWSE_CAMERA};
