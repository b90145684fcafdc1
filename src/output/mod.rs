//! Output formatting for CLI display
//!
//! Plain-text renderings of list rows and detail views, shared by the
//! `list` and `show` commands.

use crate::browse::ListRow;
use crate::detail::DetailView;
use crate::map::CameraPosition;
use colored::Colorize;

/// Format a list row for display
#[must_use]
pub fn list_row(row: &ListRow, quiet: bool) -> String {
    if quiet {
        row.name.clone()
    } else {
        format!(
            "  {} {} {}",
            row.name.bold(),
            format!("({})", row.neighborhood).dimmed(),
            format!("[{}]", row.image_name).cyan()
        )
    }
}

/// Format a camera as "center ± span"
#[must_use]
pub fn camera(camera: &CameraPosition) -> String {
    format!(
        "{} (span {:.2}° × {:.2}°)",
        camera.center, camera.span.latitude_delta, camera.span.longitude_delta
    )
}

/// Multi-line rendering of a detail view
#[must_use]
pub fn detail(view: &DetailView<'_>, quiet: bool) -> String {
    if quiet {
        return view.title().to_string();
    }

    let mut lines = vec![
        view.title().bold().to_string(),
        format!("Image: {}", view.image_name().cyan()),
        view.neighborhood_line(),
        view.description_line(),
        format!("Map: {}", camera(view.camera())),
    ];
    if view.is_sentinel() {
        lines.push("(no real map location)".dimmed().to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_quiet_row_is_name_only() {
        let catalog = Catalog::builtin();
        let row = ListRow::from(catalog.get(0).unwrap());
        assert_eq!(list_row(&row, true), "Flowers Hall");
    }

    #[test]
    fn test_row_contains_fields() {
        colored::control::set_override(false);
        let catalog = Catalog::builtin();
        let row = ListRow::from(catalog.get(3).unwrap());
        assert_eq!(
            list_row(&row, false),
            "  San Marcos River (650 River Rd, San Marcos, TX 78666) [park]"
        );
    }

    #[test]
    fn test_detail_of_sentinel_mentions_missing_location() {
        colored::control::set_override(false);
        let catalog = Catalog::builtin();
        let item = catalog.find_by_name("How to Find the Right Spot").unwrap();
        let text = detail(&DetailView::new(item), false);
        assert!(text.contains("Neighborhood: your home"));
        assert!(text.contains("Map: 0.000000, 0.000000 (span 0.20° × 0.20°)"));
        assert!(text.contains("no real map location"));
    }
}
