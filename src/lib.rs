//! Nook - browse freelance work spots by neighborhood
//!
//! This library holds the catalog of spots, the browse view-model that
//! filters it by neighborhood, the detail view for a single spot, and the map
//! data both screens hand to a renderer. The `ui` module provides the
//! terminal frontend; `cli` and `commands` wire everything to the `nook`
//! binary.

use thiserror::Error;

pub mod browse;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod detail;
pub mod logging;
pub mod map;
pub mod output;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum NookError {
    /// UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON output failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// CSV output failed
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    /// No item with the requested name
    #[error("No spot named '{0}'")]
    NotFound(String),
}

pub use browse::BrowseViewModel;
pub use catalog::{Catalog, Item, ItemId};
pub use detail::DetailView;
pub use map::{Annotation, CameraPosition, Coordinate, MapScene, Span};
