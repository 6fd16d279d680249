//! Natural Earth shapefile boundary source.
//!
//! Reads administrative boundary polygons from Natural Earth 10m cultural
//! vector shapefiles (<https://www.naturalearthdata.com>), one file per
//! dataset, named `ne_10m_<dataset>.shp` (e.g. `ne_10m_admin_0_countries.shp`).

use std::path::PathBuf;

use geo::{Coord, LineString, MultiPolygon, Polygon};
use shapefile::dbase::{FieldValue, Record};
use shapefile::{PolygonRing, Reader, Shape};

use super::{BoundaryKind, BoundarySource, RegionError, RegionFeature};
use crate::types::GeoBoundingBox;

impl From<shapefile::Error> for RegionError {
    fn from(e: shapefile::Error) -> Self {
        RegionError::Shapefile(e.to_string())
    }
}

/// Boundary source backed by a directory of Natural Earth shapefiles.
///
/// # Example
///
/// ```no_run
/// use gridlist_rs::region::{BoundaryKind, BoundarySource, ShapefileBoundarySource};
///
/// let source = ShapefileBoundarySource::new("data/naturalearth");
/// let features = source
///     .lookup("Berlin", &BoundaryKind::states_provinces())
///     .unwrap();
/// ```
pub struct ShapefileBoundarySource {
    root: PathBuf,
}

impl ShapefileBoundarySource {
    /// Create a source rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the shapefile backing a boundary kind.
    pub fn dataset_path(&self, kind: &BoundaryKind) -> PathBuf {
        self.root.join(format!("ne_10m_{}.shp", kind.dataset()))
    }
}

impl BoundarySource for ShapefileBoundarySource {
    fn lookup(&self, name: &str, kind: &BoundaryKind) -> Result<Vec<RegionFeature>, RegionError> {
        let path = self.dataset_path(kind);
        let mut reader = Reader::from_path(&path)?;
        let field = kind.name_field();

        let mut features = Vec::new();
        for result in reader.iter_shapes_and_records() {
            let (shape, record) = result?;
            if record_name(&record, field) != Some(name) {
                continue;
            }

            match shape {
                Shape::Polygon(polygon) => {
                    let bbox = polygon_bbox(&polygon).ok_or_else(|| {
                        RegionError::EmptyGeometry {
                            name: name.to_string(),
                        }
                    })?;
                    features.push(RegionFeature {
                        geometry: rings_to_multi_polygon(&polygon),
                        bbox,
                    });
                }
                _ => {} // Ignore non-polygon shapes
            }
        }

        Ok(features)
    }
}

fn record_name<'a>(record: &'a Record, field: &str) -> Option<&'a str> {
    match record.get(field) {
        Some(FieldValue::Character(Some(value))) => Some(value.as_str()),
        _ => None,
    }
}

fn polygon_bbox(polygon: &shapefile::Polygon) -> Option<GeoBoundingBox> {
    GeoBoundingBox::from_coords(
        polygon
            .rings()
            .iter()
            .flat_map(|ring| ring.points())
            .map(|p| Coord { x: p.x, y: p.y }),
    )
}

/// Convert shapefile rings into `geo` polygons.
///
/// An outer ring opens a new polygon; inner rings become holes of the most
/// recently opened polygon (shapefiles list inner rings after the outer ring
/// they belong to).
fn rings_to_multi_polygon(polygon: &shapefile::Polygon) -> MultiPolygon<f64> {
    let mut polygons: Vec<Polygon<f64>> = Vec::new();

    for ring in polygon.rings() {
        let coords: Vec<Coord<f64>> = ring
            .points()
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect();
        let line = LineString::from(coords);

        match ring {
            PolygonRing::Outer(_) => polygons.push(Polygon::new(line, Vec::new())),
            PolygonRing::Inner(_) => match polygons.last_mut() {
                Some(last) => last.interiors_push(line),
                // Inner ring with no preceding outer ring; keep it as its
                // own outline rather than dropping geometry.
                None => polygons.push(Polygon::new(line, Vec::new())),
            },
        }
    }

    MultiPolygon(polygons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Contains, Point};
    use shapefile::Point as ShpPoint;
    use std::path::Path;

    #[test]
    fn test_dataset_path() {
        let source = ShapefileBoundarySource::new("data/naturalearth");
        let path = source.dataset_path(&BoundaryKind::countries());
        assert_eq!(
            path,
            Path::new("data/naturalearth/ne_10m_admin_0_countries.shp")
        );
    }

    #[test]
    fn test_lookup_missing_file_fails() {
        let source = ShapefileBoundarySource::new("/nonexistent/boundaries");
        let result = source.lookup("Germany", &BoundaryKind::countries());
        assert!(result.is_err());
    }

    #[test]
    fn test_rings_to_multi_polygon_with_hole() {
        let outer = PolygonRing::Outer(vec![
            ShpPoint::new(0.0, 0.0),
            ShpPoint::new(0.0, 4.0),
            ShpPoint::new(4.0, 4.0),
            ShpPoint::new(4.0, 0.0),
            ShpPoint::new(0.0, 0.0),
        ]);
        let inner = PolygonRing::Inner(vec![
            ShpPoint::new(1.0, 1.0),
            ShpPoint::new(3.0, 1.0),
            ShpPoint::new(3.0, 3.0),
            ShpPoint::new(1.0, 3.0),
            ShpPoint::new(1.0, 1.0),
        ]);
        let shp = shapefile::Polygon::with_rings(vec![outer, inner]);

        let multi = rings_to_multi_polygon(&shp);
        assert_eq!(multi.0.len(), 1);
        assert_eq!(multi.0[0].interiors().len(), 1);

        // Point in the ring but outside the hole is contained; the hole is not.
        assert!(multi.0[0].contains(&Point::new(0.5, 2.0)));
        assert!(!multi.0[0].contains(&Point::new(2.0, 2.0)));
    }

    #[test]
    fn test_polygon_bbox_covers_all_rings() {
        let outer = PolygonRing::Outer(vec![
            ShpPoint::new(-2.0, -1.0),
            ShpPoint::new(-2.0, 5.0),
            ShpPoint::new(6.0, 5.0),
            ShpPoint::new(6.0, -1.0),
            ShpPoint::new(-2.0, -1.0),
        ]);
        let shp = shapefile::Polygon::with_rings(vec![outer]);

        let bbox = polygon_bbox(&shp).unwrap();
        assert_eq!(bbox.min_lon, -2.0);
        assert_eq!(bbox.max_lon, 6.0);
        assert_eq!(bbox.min_lat, -1.0);
        assert_eq!(bbox.max_lat, 5.0);
    }
}
