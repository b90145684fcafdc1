//! UI abstraction layer
//!
//! Commands talk to an interactive frontend through the [`Browser`] trait,
//! so the terminal implementation can be swapped for a scripted one in
//! tests without touching business logic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Business Logic Layer               │
//! │   (commands, browse view-model)         │
//! └────────────────┬────────────────────────┘
//!                  │ Uses traits
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      UI Trait Abstraction               │
//! │  (Browser, BrowserConfig)               │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ MockBrowser   │  │ RatatuiBrowser    │
//! │ (tests)       │  │ (default)         │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Implementing a Custom Browser
//!
//! ```no_run
//! use nook::Catalog;
//! use nook::ui::{Browser, BrowserConfig, BrowseResult, Result};
//!
//! struct FirstMatch;
//!
//! impl Browser for FirstMatch {
//!     fn run(&self, catalog: &Catalog, config: &BrowserConfig) -> Result<BrowseResult> {
//!         let viewed = catalog.iter().take(1).map(|item| item.id).collect();
//!         Ok(BrowseResult::new(config.initial_query.clone(), viewed))
//!     }
//! }
//! ```

mod error;
mod traits;
mod types;

pub mod ratatui_adapter;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use ratatui_adapter::RatatuiBrowser;
pub use traits::{Browser, BrowserConfig};
pub use types::{BrowseResult, MessageLevel};
