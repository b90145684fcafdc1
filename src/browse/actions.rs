//! External actions on a single item
//!
//! These reach outside the process (system browser, clipboard). They never
//! fail the caller: problems come back as [`ActionOutcome::Failed`] so the
//! TUI can show them in the status bar.

use super::models::ActionOutcome;
use crate::catalog::Item;
use crate::map::Span;

const WEB_MAP_BASE: &str = "https://www.openstreetmap.org/";

/// Build a web map URL centered on `item` at a zoom matching `span`
#[must_use]
pub fn web_map_url(item: &Item, span: Span) -> String {
    format!(
        "{WEB_MAP_BASE}?mlat={lat:.6}&mlon={lon:.6}#map={zoom}/{lat:.6}/{lon:.6}",
        lat = item.latitude,
        lon = item.longitude,
        zoom = zoom_level(span),
    )
}

/// Slippy-map zoom level whose width roughly matches `span`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn zoom_level(span: Span) -> u8 {
    let widest = span.latitude_delta.max(span.longitude_delta).max(f64::EPSILON);
    (360.0 / widest).log2().round().clamp(1.0, 19.0) as u8
}

/// Open the item's location in the system web browser
#[must_use]
pub fn execute_open_in_web_map(item: &Item, span: Span) -> ActionOutcome {
    let url = web_map_url(item, span);
    match open::that(&url) {
        Ok(()) => {
            log::info!("opened web map for {}", item.name);
            ActionOutcome::Success(format!("Opened {} in browser", item.name))
        }
        Err(e) => {
            log::warn!("failed to open {url}: {e}");
            ActionOutcome::Failed(format!("Failed to open browser: {e}"))
        }
    }
}

/// Copy "latitude, longitude" of the item to the clipboard
#[must_use]
pub fn execute_copy_coordinates(item: &Item) -> ActionOutcome {
    let text = item.coordinate().to_string();

    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(&text) {
            Ok(()) => {
                log::info!("copied coordinates of {}", item.name);
                ActionOutcome::Success(format!("Copied {text}"))
            }
            Err(e) => {
                log::warn!("clipboard write failed: {e}");
                ActionOutcome::Failed(format!("Clipboard error: {e}"))
            }
        },
        Err(e) => {
            log::warn!("clipboard unavailable: {e}");
            ActionOutcome::Failed(format!("Clipboard unavailable: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_map_url() {
        let item = Item::new("Spot", "Somewhere", "", 29.5, -97.25, "img");
        let url = web_map_url(&item, Span::uniform(0.2));
        assert_eq!(
            url,
            "https://www.openstreetmap.org/?mlat=29.500000&mlon=-97.250000#map=11/29.500000/-97.250000"
        );
    }

    #[test]
    fn test_sentinel_url_is_still_built() {
        let item = Item::new("Home", "your home", "", 0.0, 0.0, "img");
        let url = web_map_url(&item, Span::uniform(0.2));
        assert!(url.contains("mlat=0.000000&mlon=0.000000"));
    }

    #[test]
    fn test_zoom_level_bounds() {
        assert_eq!(zoom_level(Span::uniform(360.0)), 1);
        assert_eq!(zoom_level(Span::uniform(0.000_001)), 19);
        assert_eq!(zoom_level(Span::uniform(0.07)), 12);
    }
}
