//! Neighborhood matching used by the browse screen and the `list` command
//!
//! The rule is a case-insensitive substring test against
//! the item's `neighborhood` only. Names and descriptions never match.
//!
//! # Iterator Adapter
//!
//! [`NeighborhoodFilterExt`] adds the same rule to any iterator of item
//! references so callers can chain it:
//!
//! ```
//! use nook::browse::filter::NeighborhoodFilterExt;
//! use nook::catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let names: Vec<_> = catalog
//!     .iter()
//!     .filter_neighborhood("texas state")
//!     .map(|item| item.name.as_str())
//!     .collect();
//! assert_eq!(names, vec!["Flowers Hall", "Albert B. Alkek Library"]);
//! ```

use crate::catalog::Item;

/// Whether `item`'s neighborhood contains an already-lowercased needle
///
/// An empty needle matches everything.
fn neighborhood_contains(item: &Item, lowered_needle: &str) -> bool {
    lowered_needle.is_empty() || item.neighborhood.to_lowercase().contains(lowered_needle)
}

/// Iterator adapter that keeps items whose neighborhood matches a query
pub trait NeighborhoodFilterExt<'a>: Iterator<Item = &'a Item> + Sized {
    /// Keep only items whose neighborhood contains `query`, ignoring case
    fn filter_neighborhood(self, query: &str) -> NeighborhoodFilter<'a, Self> {
        NeighborhoodFilter {
            inner: self,
            needle: query.to_lowercase(),
        }
    }
}

impl<'a, I: Iterator<Item = &'a Item>> NeighborhoodFilterExt<'a> for I {}

/// Iterator returned by [`NeighborhoodFilterExt::filter_neighborhood`]
#[derive(Debug, Clone)]
pub struct NeighborhoodFilter<'a, I: Iterator<Item = &'a Item>> {
    inner: I,
    needle: String,
}

impl<'a, I: Iterator<Item = &'a Item>> Iterator for NeighborhoodFilter<'a, I> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle.as_str();
        self.inner
            .by_ref()
            .find(|item| neighborhood_contains(item, needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::item_in;

    fn matches(item: &Item, query: &str) -> bool {
        std::iter::once(item).filter_neighborhood(query).next().is_some()
    }

    #[test]
    fn test_empty_query_matches_all() {
        let item = item_in("Spot", "anywhere");
        assert!(matches(&item, ""));
    }

    #[test]
    fn test_case_insensitive_both_sides() {
        let item = item_in("Spot", "Texas State University Campus");
        assert!(matches(&item, "texas state"));
        assert!(matches(&item, "TEXAS STATE"));
        assert!(matches(&item, "tExAs"));
    }

    #[test]
    fn test_only_neighborhood_is_searched() {
        let item = Item::new("Coffee Shop", "Main Plaza", "great coffee", 1.0, 1.0, "img");
        assert!(!matches(&item, "coffee"));
        assert!(matches(&item, "plaza"));
    }

    #[test]
    fn test_substring_not_tokens() {
        let item = item_in("Spot", "650 River Rd, San Marcos, TX 78666");
        assert!(matches(&item, "rd, san"));
        assert!(matches(&item, "786"));
        assert!(!matches(&item, "san river"));
    }

    #[test]
    fn test_unicode_lowercasing() {
        let item = item_in("Café", "ÉCOLE Quarter");
        assert!(matches(&item, "école"));
    }

    #[test]
    fn test_iterator_adapter_keeps_order() {
        let items = vec![
            item_in("a", "North Side"),
            item_in("b", "south side"),
            item_in("c", "Downtown"),
        ];
        let names: Vec<_> = items
            .iter()
            .filter_neighborhood("SIDE")
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
