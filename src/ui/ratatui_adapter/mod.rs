//! Ratatui terminal frontend
//!
//! Implements the [`Browser`](crate::ui::Browser) trait with ratatui for
//! drawing and crossterm for terminal control and input.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           RatatuiBrowser                    │
//! │  (implements Browser trait)                 │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  AppState  │ │  Ratatui  │ │ Crossterm │
//! │(view-model)│ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! # Screens
//!
//! - **Browse**: search bar, spot list and a map with one pin per match
//! - **Detail**: spot text over a map centered on it
//! - **Help overlay** (F1)

mod browser;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use browser::RatatuiBrowser;
pub use events::{DetailAction, EventResult, handle_event, handle_key};
pub use state::{AppState, Mode, StatusMessage};
pub use theme::Theme;
