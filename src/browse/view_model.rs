//! Browse view-model: search text plus the catalog view derived from it
//!
//! The filtered sequence is never stored. Every call to
//! [`BrowseViewModel::filtered_items`] recomputes it from the catalog and the
//! current search text, so it can run on each keystroke without building up
//! state.

use super::filter::NeighborhoodFilterExt;
use super::models::ListRow;
use crate::catalog::{Catalog, Item};
use crate::detail::{DETAIL_SPAN, DetailView};
use crate::map::{Annotation, CameraPosition, Coordinate, MapScene, Span};

/// Default browse camera: centered on the San Marcos River spot
pub const DEFAULT_BROWSE_CAMERA: CameraPosition = CameraPosition::region(
    Coordinate::new(29.913_266_238_265_92, -97.937_923_341_532_91),
    Span::uniform(0.07),
);

/// State behind the browse screen
#[derive(Debug, Clone)]
pub struct BrowseViewModel<'a> {
    catalog: &'a Catalog,
    search_text: String,
    camera: CameraPosition,
    detail_span: Span,
}

impl<'a> BrowseViewModel<'a> {
    /// View-model over `catalog` with no filter and the default camera
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            search_text: String::new(),
            camera: DEFAULT_BROWSE_CAMERA,
            detail_span: DETAIL_SPAN,
        }
    }

    /// Replace the starting browse camera
    #[must_use]
    pub const fn with_camera(mut self, camera: CameraPosition) -> Self {
        self.camera = camera;
        self
    }

    /// Zoom span used by detail views opened from this screen
    #[must_use]
    pub const fn with_detail_span(mut self, span: Span) -> Self {
        self.detail_span = span;
        self
    }

    /// Set the current filter text; empty means no filter
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Items whose neighborhood contains the search text, in catalog order
    #[must_use]
    pub fn filtered_items(&self) -> Vec<&'a Item> {
        self.catalog
            .iter()
            .filter_neighborhood(&self.search_text)
            .collect()
    }

    /// Rows for the list renderer
    #[must_use]
    pub fn list_rows(&self) -> Vec<ListRow> {
        self.filtered_items().into_iter().map(ListRow::from).collect()
    }

    /// Camera plus one pin per visible item
    #[must_use]
    pub fn map_scene(&self) -> MapScene {
        let annotations = self
            .filtered_items()
            .into_iter()
            .map(|item| Annotation::new(item.coordinate(), item.name.clone()))
            .collect();
        MapScene::new(self.camera, annotations)
    }

    #[must_use]
    pub const fn camera(&self) -> &CameraPosition {
        &self.camera
    }

    pub const fn camera_mut(&mut self) -> &mut CameraPosition {
        &mut self.camera
    }

    /// Open the detail view for the `index`-th item of the filtered sequence
    #[must_use]
    pub fn select(&self, index: usize) -> Option<DetailView<'a>> {
        self.filtered_items()
            .get(index)
            .map(|&item| DetailView::with_span(item, self.detail_span))
    }
}
