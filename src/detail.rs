//! Detail view for a single item
//!
//! Opening a detail view never fails. The (0, 0) sentinel item gets a camera
//! centered on (0, 0) like any other; [`DetailView::is_sentinel`] only lets a
//! renderer add a hint that the map is not meaningful.

use crate::catalog::Item;
use crate::map::{Annotation, CameraPosition, MapScene, Span};

/// Fixed zoom of a freshly opened detail map
pub const DETAIL_SPAN: Span = Span::uniform(0.20);

/// One item plus the camera owned by its detail screen
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView<'a> {
    item: &'a Item,
    camera: CameraPosition,
}

impl<'a> DetailView<'a> {
    /// Detail view centered on `item` with [`DETAIL_SPAN`]
    #[must_use]
    pub const fn new(item: &'a Item) -> Self {
        Self::with_span(item, DETAIL_SPAN)
    }

    #[must_use]
    pub const fn with_span(item: &'a Item, span: Span) -> Self {
        Self {
            item,
            camera: CameraPosition::region(item.coordinate(), span),
        }
    }

    #[must_use]
    pub const fn item(&self) -> &'a Item {
        self.item
    }

    /// Screen title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.item.name
    }

    #[must_use]
    pub fn image_name(&self) -> &str {
        &self.item.image_name
    }

    #[must_use]
    pub fn neighborhood_line(&self) -> String {
        format!("Neighborhood: {}", self.item.neighborhood)
    }

    #[must_use]
    pub fn description_line(&self) -> String {
        format!("Description: {}", self.item.description)
    }

    #[must_use]
    pub const fn camera(&self) -> &CameraPosition {
        &self.camera
    }

    pub const fn camera_mut(&mut self) -> &mut CameraPosition {
        &mut self.camera
    }

    /// Put the camera back on the item at the span it was opened with
    pub const fn recenter(&mut self) {
        self.camera.center = self.item.coordinate();
    }

    /// The item's single pin, labelled with its name
    #[must_use]
    pub fn map_scene(&self) -> MapScene {
        MapScene::new(
            self.camera,
            vec![Annotation::new(self.item.coordinate(), self.item.name.clone())],
        )
    }

    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.item.has_sentinel_location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::map::{Coordinate, PanDirection};

    #[test]
    fn test_camera_centered_on_item() {
        let catalog = Catalog::builtin();
        let item = catalog.find_by_name("Flowers Hall").unwrap();
        let detail = DetailView::new(item);
        assert_eq!(detail.camera().center, item.coordinate());
        assert_eq!(detail.camera().span, DETAIL_SPAN);
    }

    #[test]
    fn test_sentinel_item_opens() {
        let catalog = Catalog::builtin();
        let item = catalog.find_by_name("How to Find the Right Spot").unwrap();
        let detail = DetailView::new(item);

        assert!(detail.is_sentinel());
        assert_eq!(detail.camera().center, Coordinate::SENTINEL);
        assert!((detail.camera().span.latitude_delta - 0.20).abs() < f64::EPSILON);
        assert!((detail.camera().span.longitude_delta - 0.20).abs() < f64::EPSILON);
        assert_eq!(detail.map_scene().annotations.len(), 1);
    }

    #[test]
    fn test_text_lines() {
        let catalog = Catalog::builtin();
        let item = catalog.find_by_name("Albert B. Alkek Library").unwrap();
        let detail = DetailView::new(item);

        assert_eq!(detail.title(), "Albert B. Alkek Library");
        assert_eq!(detail.image_name(), "alkek");
        assert_eq!(
            detail.neighborhood_line(),
            "Neighborhood: Texas State University Campus"
        );
        assert!(detail.description_line().starts_with("Description: A multi-level library"));
    }

    #[test]
    fn test_pan_then_recenter() {
        let catalog = Catalog::builtin();
        let item = catalog.find_by_name("San Marcos River").unwrap();
        let mut detail = DetailView::new(item);

        detail.camera_mut().pan(PanDirection::East);
        assert_ne!(detail.camera().center, item.coordinate());
        detail.recenter();
        assert_eq!(detail.camera().center, item.coordinate());
        assert_eq!(item, catalog.find_by_name("San Marcos River").unwrap());
    }

    #[test]
    fn test_scene_label_is_name() {
        let catalog = Catalog::builtin();
        let item = catalog.get(2).unwrap();
        let scene = DetailView::new(item).map_scene();
        assert_eq!(scene.annotations[0].label, "New Braunfels Coffee");
        assert_eq!(scene.annotations[0].coordinate, item.coordinate());
    }
}
