//! Core traits for the UI abstraction layer

use super::error::Result;
use super::types::BrowseResult;
use crate::catalog::Catalog;
use crate::config::{MapDetail, NookConfig};
use crate::map::{CameraPosition, Span};
use std::time::Duration;

/// Settings a browser frontend starts with
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserConfig {
    /// Search text pre-filled on start
    pub initial_query: String,
    /// Starting browse camera
    pub camera: CameraPosition,
    /// Span for detail maps
    pub detail_span: Span,
    /// Status message lifetime
    pub message_ttl: Duration,
    /// Outline detail for map panes
    pub map_detail: MapDetail,
}

impl BrowserConfig {
    /// Build from the user config, optionally pre-filling the search
    #[must_use]
    pub fn from_config(config: &NookConfig, initial_query: Option<String>) -> Self {
        Self {
            initial_query: initial_query.unwrap_or_default(),
            camera: config.browse_camera(),
            detail_span: config.detail_span(),
            message_ttl: config.message_ttl(),
            map_detail: config.map_detail,
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self::from_config(&NookConfig::default(), None)
    }
}

/// An interactive frontend over the catalog
///
/// Implementations own their event loop and return once the user leaves.
pub trait Browser {
    /// Run an interactive session
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the frontend fails (terminal I/O and the like).
    fn run(&self, catalog: &Catalog, config: &BrowserConfig) -> Result<BrowseResult>;
}
