//! Shared UI types

use crate::catalog::ItemId;

/// Message level for status bar messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Error message
    Error,
    /// Success message
    Success,
    /// Info message
    Info,
}

/// What happened during an interactive browse session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowseResult {
    /// Search text when the session ended
    pub final_query: String,
    /// Items whose detail view was opened, in order
    pub viewed: Vec<ItemId>,
}

impl BrowseResult {
    #[must_use]
    pub fn new(final_query: impl Into<String>, viewed: Vec<ItemId>) -> Self {
        Self {
            final_query: final_query.into(),
            viewed,
        }
    }
}
