//! Show command - print the detail view of one spot

use crate::{NookError, catalog::Catalog, detail::DetailView, map::Span, output};
use std::io::Write;

type Result<T> = std::result::Result<T, NookError>;

/// Execute the show command
///
/// # Errors
/// Returns `NookError::NotFound` if no spot has that name, or an I/O error if
/// writing fails.
pub fn execute(
    catalog: &Catalog,
    name: &str,
    span: Span,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    let item = catalog
        .find_by_name(name)
        .ok_or_else(|| NookError::NotFound(name.trim().to_string()))?;

    let view = DetailView::with_span(item, span);
    writeln!(out, "{}", output::detail(&view, quiet))?;
    Ok(())
}
