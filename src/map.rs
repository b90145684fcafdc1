//! Map data contract shared by the browse and detail screens
//!
//! A map is described by one [`CameraPosition`] plus zero or more
//! [`Annotation`]s. Rendering (the canvas widget in the TUI) is a consumer of
//! this data and lives in `ui`.
//!
//! Each screen owns its camera. Panning and zooming mutate only that screen's
//! camera; the catalog is never touched.

use serde::{Deserialize, Serialize};

/// Smallest span the camera will zoom to, in degrees
pub const MIN_SPAN: f64 = 0.001;
/// Largest span the camera will zoom out to, in degrees
pub const MAX_SPAN: f64 = 180.0;

/// Fraction of the span moved by a single pan step
const PAN_FRACTION: f64 = 0.25;

/// A latitude/longitude pair in signed degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// The (0, 0) pair used by records that have no real map location
    pub const SENTINEL: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether this is exactly the (0, 0) "not applicable" pair
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }

    /// Whether latitude is within [-90, 90] and longitude within [-180, 180]
    #[must_use]
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Clamp both components into their valid ranges
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            latitude: self.latitude.clamp(-90.0, 90.0),
            longitude: self.longitude.clamp(-180.0, 180.0),
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Zoom extent of a camera in degrees of latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Span {
    /// Span with the same delta on both axes
    #[must_use]
    pub const fn uniform(delta: f64) -> Self {
        Self {
            latitude_delta: delta,
            longitude_delta: delta,
        }
    }

    #[must_use]
    fn scaled(self, factor: f64) -> Self {
        Self {
            latitude_delta: (self.latitude_delta * factor).clamp(MIN_SPAN, MAX_SPAN),
            longitude_delta: (self.longitude_delta * factor).clamp(MIN_SPAN, MAX_SPAN * 2.0),
        }
    }
}

/// Direction for a single camera pan step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    North,
    South,
    East,
    West,
}

/// Center and zoom of a map view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPosition {
    pub center: Coordinate,
    pub span: Span,
}

impl CameraPosition {
    /// Camera showing a region around `center`
    #[must_use]
    pub const fn region(center: Coordinate, span: Span) -> Self {
        Self { center, span }
    }

    /// Move the center a quarter of the span in `direction`
    pub fn pan(&mut self, direction: PanDirection) {
        let lat_step = self.span.latitude_delta * PAN_FRACTION;
        let lon_step = self.span.longitude_delta * PAN_FRACTION;
        let (dlat, dlon) = match direction {
            PanDirection::North => (lat_step, 0.0),
            PanDirection::South => (-lat_step, 0.0),
            PanDirection::East => (0.0, lon_step),
            PanDirection::West => (0.0, -lon_step),
        };
        self.center = Coordinate::new(self.center.latitude + dlat, self.center.longitude + dlon)
            .clamped();
    }

    /// Halve the span
    pub fn zoom_in(&mut self) {
        self.span = self.span.scaled(0.5);
    }

    /// Double the span
    pub fn zoom_out(&mut self) {
        self.span = self.span.scaled(2.0);
    }

    /// Visible window as `([min_lon, max_lon], [min_lat, max_lat])`
    ///
    /// Canvas widgets take x (longitude) before y (latitude).
    #[must_use]
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let half_lon = self.span.longitude_delta / 2.0;
        let half_lat = self.span.latitude_delta / 2.0;
        (
            [self.center.longitude - half_lon, self.center.longitude + half_lon],
            [self.center.latitude - half_lat, self.center.latitude + half_lat],
        )
    }

    /// Whether `coordinate` falls inside the visible window
    #[must_use]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        let ([min_lon, max_lon], [min_lat, max_lat]) = self.bounds();
        (min_lon..=max_lon).contains(&coordinate.longitude)
            && (min_lat..=max_lat).contains(&coordinate.latitude)
    }
}

/// A labelled pin on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub coordinate: Coordinate,
    pub label: String,
}

impl Annotation {
    #[must_use]
    pub fn new(coordinate: Coordinate, label: impl Into<String>) -> Self {
        Self {
            coordinate,
            label: label.into(),
        }
    }
}

/// Everything a map renderer needs: one camera and its pins
#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    pub camera: CameraPosition,
    pub annotations: Vec<Annotation>,
}

impl MapScene {
    #[must_use]
    pub const fn new(camera: CameraPosition, annotations: Vec<Annotation>) -> Self {
        Self {
            camera,
            annotations,
        }
    }

    /// Pins that fall inside the camera window
    pub fn visible_annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations
            .iter()
            .filter(|a| self.camera.contains(a.coordinate))
    }
}
