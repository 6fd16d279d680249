//! Geographic bounding boxes.

use geo::Coord;

/// Geographic bounding box in plain latitude/longitude degrees.
///
/// Used as the broad-phase rejection test before the exact point-in-polygon
/// check: any point outside a polygon's bounding box is provably outside the
/// polygon, so the cheap comparison short-circuits the expensive containment
/// test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBoundingBox {
    /// Minimum longitude (western edge) in degrees
    pub min_lon: f64,
    /// Minimum latitude (southern edge) in degrees
    pub min_lat: f64,
    /// Maximum longitude (eastern edge) in degrees
    pub max_lon: f64,
    /// Maximum latitude (northern edge) in degrees
    pub max_lat: f64,
}

impl GeoBoundingBox {
    /// Create a new bounding box.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Tightest box around a sequence of coordinates.
    ///
    /// Returns `None` for an empty sequence.
    pub fn from_coords(coords: impl IntoIterator<Item = Coord<f64>>) -> Option<Self> {
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        let mut bbox = Self::new(first.x, first.y, first.x, first.y);
        for c in iter {
            bbox.min_lon = bbox.min_lon.min(c.x);
            bbox.max_lon = bbox.max_lon.max(c.x);
            bbox.min_lat = bbox.min_lat.min(c.y);
            bbox.max_lat = bbox.max_lat.max(c.y);
        }
        Some(bbox)
    }

    /// Check if a point is within this bounding box (edges inclusive).
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }

    /// Get the center of the bounding box as (lon, lat).
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    /// Grow the box by a fixed margin in degrees on every side.
    pub fn with_margin(&self, margin_deg: f64) -> Self {
        Self {
            min_lon: self.min_lon - margin_deg,
            min_lat: self.min_lat - margin_deg,
            max_lon: self.max_lon + margin_deg,
            max_lat: self.max_lat + margin_deg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_contains() {
        let bbox = GeoBoundingBox::new(8.0, 63.5, 9.5, 64.0);

        assert!(bbox.contains(8.75, 63.75));
        assert!(bbox.contains(8.0, 63.5)); // edges are inclusive
        assert!(!bbox.contains(10.0, 63.75));
        assert!(!bbox.contains(8.75, 65.0));
    }

    #[test]
    fn test_from_coords() {
        let coords = vec![
            Coord { x: 9.0, y: 47.5 },
            Coord { x: 13.5, y: 50.0 },
            Coord { x: 10.2, y: 48.1 },
        ];
        let bbox = GeoBoundingBox::from_coords(coords).unwrap();
        assert!((bbox.min_lon - 9.0).abs() < TOL);
        assert!((bbox.max_lon - 13.5).abs() < TOL);
        assert!((bbox.min_lat - 47.5).abs() < TOL);
        assert!((bbox.max_lat - 50.0).abs() < TOL);
    }

    #[test]
    fn test_from_coords_empty() {
        assert!(GeoBoundingBox::from_coords(Vec::new()).is_none());
    }

    #[test]
    fn test_center_and_margin() {
        let bbox = GeoBoundingBox::new(8.0, 47.0, 10.0, 49.0);

        let (lon, lat) = bbox.center();
        assert!((lon - 9.0).abs() < TOL);
        assert!((lat - 48.0).abs() < TOL);

        let grown = bbox.with_margin(0.5);
        assert!((grown.min_lon - 7.5).abs() < TOL);
        assert!((grown.max_lat - 49.5).abs() < TOL);
    }
}
