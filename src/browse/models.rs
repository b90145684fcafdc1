//! Data types passed from the browse logic to renderers

use crate::catalog::{Item, ItemId};
use serde::Serialize;

/// One row of the browse list
///
/// Carries only what a list renderer needs. The image name is an opaque asset
/// reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    #[serde(skip)]
    pub id: ItemId,
    pub name: String,
    pub neighborhood: String,
    pub image_name: String,
}

impl From<&Item> for ListRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            neighborhood: item.neighborhood.clone(),
            image_name: item.image_name.clone(),
        }
    }
}

/// Outcome of an external action triggered from the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Action completed
    Success(String),
    /// Action could not be carried out
    Failed(String),
}

impl ActionOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Message suitable for a status bar
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(msg) | Self::Failed(msg) => msg,
        }
    }
}
