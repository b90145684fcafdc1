//! The fixed list of work spots
//!
//! The catalog is built once at start-up and never changes while the
//! program runs. Every record gets a fresh [`ItemId`] when it is constructed;
//! ids are only used to keep list rows apart and mean nothing across runs.

use crate::map::Coordinate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque per-run identity of an [`Item`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single work spot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Free-text location or address; the only field search looks at
    pub neighborhood: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Name of a bundled image asset, passed through as-is
    pub image_name: String,
}

impl Item {
    /// Create a new item with a freshly generated id
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        neighborhood: impl Into<String>,
        description: impl Into<String>,
        latitude: f64,
        longitude: f64,
        image_name: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId::generate(),
            name: name.into(),
            neighborhood: neighborhood.into(),
            description: description.into(),
            latitude,
            longitude,
            image_name: image_name.into(),
        }
    }

    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Whether this record uses the (0, 0) "no real location" pair
    #[must_use]
    pub fn has_sentinel_location(&self) -> bool {
        self.coordinate().is_sentinel()
    }
}

/// Ordered, immutable sequence of items
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// The built-in list of spots
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_items(vec![
            Item::new(
                "Flowers Hall",
                "Texas State University Campus",
                "A historic campus building with quiet study areas and nearby greenspaces.",
                29.889_057_106_627_064,
                -97.940_245_575_108_34,
                "flowershall",
            ),
            Item::new(
                "Albert B. Alkek Library",
                "Texas State University Campus",
                "A multi-level library packed with study nooks and creative spaces.",
                29.889_664_752_388_345,
                -97.942_896_620_265_59,
                "alkek",
            ),
            Item::new(
                "New Braunfels Coffee",
                "489 Main Plaza, New Braunfels, TX 78130",
                "A cozy coffee shop that is perfect for getting work done!",
                29.703_779_000_901_41,
                -98.124_711_497_680_01,
                "nbcafe",
            ),
            Item::new(
                "San Marcos River",
                "650 River Rd, San Marcos, TX 78666",
                "Discover a outdoor escape with shaded areas perfect for working outdoors!",
                29.913_266_238_265_92,
                -97.937_923_341_532_91,
                "park",
            ),
            Item::new(
                "How to Find the Right Spot",
                "your home",
                "Find your ideal work spot at home or in your backyard!",
                0.0,
                0.0,
                "korte.backyard",
            ),
        ])
    }

    /// Wrap an explicit list of items, keeping their order
    #[must_use]
    pub const fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// All items in catalog order
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    #[must_use]
    pub fn find_by_id(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Look up an item by name, ignoring case
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        let wanted = name.trim().to_lowercase();
        self.items
            .iter()
            .find(|item| item.name.to_lowercase() == wanted)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_order() {
        let catalog = Catalog::builtin();
        let names: Vec<_> = catalog.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Flowers Hall",
                "Albert B. Alkek Library",
                "New Braunfels Coffee",
                "San Marcos River",
                "How to Find the Right Spot",
            ]
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<_> = catalog.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_only_home_uses_sentinel() {
        let catalog = Catalog::builtin();
        let sentinels: Vec<_> = catalog
            .iter()
            .filter(|i| i.has_sentinel_location())
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(sentinels, vec!["How to Find the Right Spot"]);
    }

    #[test]
    fn test_all_coordinates_in_range() {
        for item in &Catalog::builtin() {
            assert!(item.coordinate().is_in_range(), "{} out of range", item.name);
        }
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let catalog = Catalog::builtin();
        let item = catalog.find_by_name("  san marcos RIVER ").unwrap();
        assert_eq!(item.image_name, "park");
        assert!(catalog.find_by_name("nowhere").is_none());
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::builtin();
        let id = catalog.get(2).unwrap().id;
        assert_eq!(catalog.find_by_id(id).unwrap().name, "New Braunfels Coffee");
    }

    #[test]
    fn test_rebuilt_catalog_gets_new_ids() {
        let a = Catalog::builtin();
        let b = Catalog::builtin();
        assert_ne!(a.get(0).unwrap().id, b.get(0).unwrap().id);
    }
}
