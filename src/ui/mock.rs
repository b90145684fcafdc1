//! Scripted browser for tests

use super::error::Result;
use super::traits::{Browser, BrowserConfig};
use super::types::BrowseResult;
use crate::browse::BrowseViewModel;
use crate::catalog::Catalog;

/// Browser that types a fixed sequence of queries and opens details
///
/// `open` holds indices into the filtered sequence after the last query.
/// Out-of-range indices are skipped, as a real user could not select them.
#[derive(Debug, Clone, Default)]
pub struct MockBrowser {
    pub queries: Vec<String>,
    pub open: Vec<usize>,
}

impl MockBrowser {
    #[must_use]
    pub fn new(queries: &[&str], open: &[usize]) -> Self {
        Self {
            queries: queries.iter().map(ToString::to_string).collect(),
            open: open.to_vec(),
        }
    }
}

impl Browser for MockBrowser {
    fn run(&self, catalog: &Catalog, config: &BrowserConfig) -> Result<BrowseResult> {
        let mut vm = BrowseViewModel::new(catalog)
            .with_camera(config.camera)
            .with_detail_span(config.detail_span);
        vm.set_search_text(config.initial_query.clone());

        for query in &self.queries {
            vm.set_search_text(query.clone());
        }

        let viewed = self
            .open
            .iter()
            .filter_map(|&idx| vm.select(idx))
            .map(|detail| detail.item().id)
            .collect();

        Ok(BrowseResult::new(vm.search_text(), viewed))
    }
}
