//! Browse command - interactive search, list and map

use crate::{
    NookError,
    catalog::Catalog,
    ui::{Browser, BrowserConfig},
};
use std::io::Write;

type Result<T> = std::result::Result<T, NookError>;

/// Execute the browse command
///
/// Runs `browser` over `catalog`, then prints the names of the spots the user
/// opened.
///
/// # Errors
/// Returns an error if the browser fails or output cannot be written.
pub fn execute(
    browser: &dyn Browser,
    catalog: &Catalog,
    config: &BrowserConfig,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    let result = browser.run(catalog, config)?;

    let viewed: Vec<&str> = result
        .viewed
        .iter()
        .filter_map(|id| catalog.find_by_id(*id))
        .map(|item| item.name.as_str())
        .collect();

    if viewed.is_empty() {
        if !quiet {
            writeln!(out, "No spots viewed.")?;
        }
        return Ok(());
    }

    if !quiet {
        writeln!(out, "=== Viewed Spots ===")?;
    }
    for name in viewed {
        if quiet {
            writeln!(out, "{name}")?;
        } else {
            writeln!(out, "  - {name}")?;
        }
    }
    Ok(())
}
