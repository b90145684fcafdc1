//! List command - print spots matching a neighborhood query

use crate::{
    NookError,
    browse::{BrowseViewModel, ListRow},
    catalog::Catalog,
    cli::OutputFormat,
    output,
};
use std::io::Write;

type Result<T> = std::result::Result<T, NookError>;

/// Execute the list command
///
/// # Errors
/// Returns an error if serialization or writing to `out` fails.
pub fn execute(
    catalog: &Catalog,
    query: Option<&str>,
    format: OutputFormat,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut view_model = BrowseViewModel::new(catalog);
    if let Some(query) = query {
        view_model.set_search_text(query);
    }
    let rows = view_model.list_rows();
    log::debug!("list query={query:?} rows={}", rows.len());

    match format {
        OutputFormat::Text => write_text(&rows, query, quiet, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            if rows.is_empty() {
                writer.write_record(["name", "neighborhood", "image_name"])?;
            }
            for row in &rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
            Ok(())
        }
    }
}

fn write_text(
    rows: &[ListRow],
    query: Option<&str>,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    if rows.is_empty() {
        if !quiet {
            match query {
                Some(q) => writeln!(out, "No spots in a neighborhood matching '{q}'.")?,
                None => writeln!(out, "No spots in catalog.")?,
            }
        }
        return Ok(());
    }

    if !quiet {
        writeln!(out, "Spots ({}):", rows.len())?;
    }
    for row in rows {
        writeln!(out, "{}", output::list_row(row, quiet))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(query: Option<&str>, format: OutputFormat, quiet: bool) -> String {
        colored::control::set_override(false);
        let catalog = Catalog::builtin();
        let mut out = Vec::new();
        execute(&catalog, query, format, quiet, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_quiet_text_lists_all_names_in_order() {
        assert_eq!(
            run(None, OutputFormat::Text, true),
            "Flowers Hall\nAlbert B. Alkek Library\nNew Braunfels Coffee\nSan Marcos River\nHow to Find the Right Spot\n"
        );
    }

    #[test]
    fn test_text_with_header() {
        let text = run(Some("HOME"), OutputFormat::Text, false);
        assert_eq!(
            text,
            "Spots (1):\n  How to Find the Right Spot (your home) [korte.backyard]\n"
        );
    }

    #[test]
    fn test_text_no_matches() {
        assert_eq!(
            run(Some("zzz"), OutputFormat::Text, false),
            "No spots in a neighborhood matching 'zzz'.\n"
        );
        assert_eq!(run(Some("zzz"), OutputFormat::Text, true), "");
    }

    #[test]
    fn test_json_rows() {
        let text = run(Some("tx"), OutputFormat::Json, false);
        let rows: Vec<serde_json::Value> = serde_json::from_str(&text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "New Braunfels Coffee");
        assert_eq!(rows[1]["image_name"], "park");
        assert!(rows[0].get("id").is_none());
    }

    #[test]
    fn test_csv_rows() {
        let text = run(Some("campus"), OutputFormat::Csv, false);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("name,neighborhood,image_name"));
        assert_eq!(
            lines.next(),
            Some("Flowers Hall,Texas State University Campus,flowershall")
        );
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn test_csv_empty_still_has_header() {
        assert_eq!(
            run(Some("zzz"), OutputFormat::Csv, false),
            "name,neighborhood,image_name\n"
        );
    }
}
