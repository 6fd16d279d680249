//! Grid filtering against region boundaries.
//!
//! Builds the full cross product of a climate raster's longitude and latitude
//! axes and keeps the points that fall inside one or more named region
//! polygons. Each kept point is reported twice, in parallel: as geographic
//! coordinates and as zero-based indices into the original axes (the form
//! vegetation models address cells by).
//!
//! Filtering is two-phase per point: a cheap bounding-box rejection first,
//! then the exact point-in-polygon test only for survivors. Any point outside
//! the box is provably outside the polygon, so the broad phase never changes
//! the result, only the cost.
//!
//! # Example
//!
//! ```
//! use geo::{polygon, MultiPolygon};
//! use gridlist_rs::grid::filter_grid_to_regions;
//! use gridlist_rs::region::{RegionBoundary, RegionFeature};
//! use gridlist_rs::types::GeoBoundingBox;
//!
//! let square = polygon![
//!     (x: 0.0, y: 0.0),
//!     (x: 2.0, y: 0.0),
//!     (x: 2.0, y: 2.0),
//!     (x: 0.0, y: 2.0),
//!     (x: 0.0, y: 0.0),
//! ];
//! let region = RegionBoundary {
//!     name: "Square".to_string(),
//!     features: vec![RegionFeature {
//!         geometry: MultiPolygon(vec![square]),
//!         bbox: GeoBoundingBox::new(0.0, 0.0, 2.0, 2.0),
//!     }],
//! };
//!
//! let lons = [0.5, 1.5, 2.5];
//! let lats = [0.5, 1.5];
//! let gridlist = filter_grid_to_regions(&lons, &lats, &[region]).unwrap();
//! assert_eq!(gridlist.len(), 4); // the 2.5 column is outside
//! ```

use std::fmt;

use geo::{Contains, MultiPolygon, Point, Polygon};
use thiserror::Error;

use crate::region::RegionBoundary;
use crate::types::GeoBoundingBox;

/// Progress line interval for the containment loop.
const PROGRESS_INTERVAL: usize = 20_000;

/// Error type for grid filtering.
#[derive(Debug, Error)]
pub enum GridlistError {
    /// Coordinate axis is not strictly monotonic (duplicate or unordered values)
    #[error("{axis} axis is not a strictly monotonic sequence")]
    UnorderedAxis { axis: &'static str },

    /// A sub-region did not resolve to exactly one simple polygon
    #[error(
        "sub-region {name:?} resolved to {features} feature(s) with {parts} polygon part(s); \
         expected exactly one simple polygon; multi-part regions must be requested as \
         separate named sub-regions"
    )]
    MultiPartRegion {
        name: String,
        features: usize,
        parts: usize,
    },
}

/// A grid point in geographic coordinates (degrees).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPoint {
    /// Longitude in degrees
    pub lon: f64,
    /// Latitude in degrees
    pub lat: f64,
}

/// A grid point as zero-based positions in the coordinate axes.
///
/// `GridIndex { lon: i, lat: j }` addresses the point
/// `(lon_axis[i], lat_axis[j])`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridIndex {
    /// Position in the longitude axis
    pub lon: usize,
    /// Position in the latitude axis
    pub lat: usize,
}

/// Grid points known to lie inside the requested regions.
///
/// The point and index sequences are parallel: `indices()[k]` addresses
/// `points()[k]` in the original coordinate axes. Points appear in grid
/// iteration order (longitude-major) within each region, regions in request
/// order. Built once per invocation and immutable afterwards.
#[derive(Clone, Debug)]
pub struct RegionGridlist {
    points: Vec<GridPoint>,
    indices: Vec<GridIndex>,
    geometry: MultiPolygon<f64>,
    total_grid_points: usize,
    region_counts: Vec<(String, usize)>,
}

impl RegionGridlist {
    /// Number of selected grid points (duplicates from overlapping regions
    /// included).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if no grid point fell inside any region.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Selected points in geographic coordinates.
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// Selected points as grid indices, parallel to [`points`](Self::points).
    pub fn indices(&self) -> &[GridIndex] {
        &self.indices
    }

    /// The region outlines, collected for downstream display.
    pub fn geometry(&self) -> &MultiPolygon<f64> {
        &self.geometry
    }

    /// Get statistics about the selection.
    pub fn statistics(&self) -> GridlistStatistics {
        GridlistStatistics {
            total_grid_points: self.total_grid_points,
            selected_points: self.points.len(),
            region_counts: self.region_counts.clone(),
        }
    }
}

/// Statistics about a gridlist selection.
#[derive(Debug, Clone)]
pub struct GridlistStatistics {
    /// Number of points in the full coordinate cross product
    pub total_grid_points: usize,
    /// Number of selected points across all regions
    pub selected_points: usize,
    /// Per-region match counts, in request order
    pub region_counts: Vec<(String, usize)>,
}

impl fmt::Display for GridlistStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gridlist statistics:")?;
        writeln!(f, "  Grid points assessed: {}", self.total_grid_points)?;
        writeln!(f, "  Points selected:      {}", self.selected_points)?;
        for (name, count) in &self.region_counts {
            writeln!(f, "    {}: {}", name, count)?;
        }
        Ok(())
    }
}

/// Filter a coordinate grid down to the points inside named regions.
///
/// Builds the cross product of `lons` and `lats` (outer loop over longitude,
/// inner over latitude, which fixes the result ordering) and tests every
/// point against each region polygon in request order.
///
/// Each region must have resolved to exactly one simple polygon; anything
/// else fails with [`GridlistError::MultiPartRegion`] rather than silently
/// mishandling a multi-part geometry.
///
/// A grid point lying inside two overlapping regions of the same request is
/// reported once per region, in region order: the result is a concatenation,
/// not a set. Callers aggregating over the result should be aware of this
/// when requested regions can overlap.
///
/// # Arguments
/// * `lons` - Longitude axis, strictly ascending or descending
/// * `lats` - Latitude axis, strictly ascending or descending
/// * `regions` - Resolved region boundaries, in request order
pub fn filter_grid_to_regions(
    lons: &[f64],
    lats: &[f64],
    regions: &[RegionBoundary],
) -> Result<RegionGridlist, GridlistError> {
    check_axis("longitude", lons)?;
    check_axis("latitude", lats)?;

    let mut grid = Vec::with_capacity(lons.len() * lats.len());
    for (i, &lon) in lons.iter().enumerate() {
        for (j, &lat) in lats.iter().enumerate() {
            grid.push((GridPoint { lon, lat }, GridIndex { lon: i, lat: j }));
        }
    }

    println!(
        "assessing {} grid points against {} sub-region(s)",
        grid.len(),
        regions.len()
    );

    let mut points = Vec::new();
    let mut indices = Vec::new();
    let mut region_counts = Vec::with_capacity(regions.len());
    let mut outlines = Vec::with_capacity(regions.len());

    for (r, region) in regions.iter().enumerate() {
        let (polygon, bbox) = single_simple_polygon(region)?;
        println!("[{}/{}] {}", r + 1, regions.len(), region.name);

        let before = points.len();
        for (n, (point, index)) in grid.iter().enumerate() {
            if n > 0 && n % PROGRESS_INTERVAL == 0 {
                println!("  {} grid points done", n);
            }

            // Broad phase: outside the bounding box means outside the polygon.
            if !bbox.contains(point.lon, point.lat) {
                continue;
            }

            if polygon.contains(&Point::new(point.lon, point.lat)) {
                points.push(*point);
                indices.push(*index);
            }
        }

        let found = points.len() - before;
        println!("  found {} point(s) in {}", found, region.name);
        region_counts.push((region.name.clone(), found));
        outlines.push(polygon.clone());
    }

    Ok(RegionGridlist {
        points,
        indices,
        geometry: MultiPolygon(outlines),
        total_grid_points: grid.len(),
        region_counts,
    })
}

/// Enforce the single-simple-polygon precondition for one region.
fn single_simple_polygon(
    region: &RegionBoundary,
) -> Result<(&Polygon<f64>, &GeoBoundingBox), GridlistError> {
    let feature = match region.features.as_slice() {
        [feature] => feature,
        features => {
            return Err(GridlistError::MultiPartRegion {
                name: region.name.clone(),
                features: features.len(),
                parts: features.iter().map(|f| f.geometry.0.len()).sum(),
            })
        }
    };

    match feature.geometry.0.as_slice() {
        [polygon] => Ok((polygon, &feature.bbox)),
        parts => Err(GridlistError::MultiPartRegion {
            name: region.name.clone(),
            features: 1,
            parts: parts.len(),
        }),
    }
}

fn check_axis(axis: &'static str, values: &[f64]) -> Result<(), GridlistError> {
    let ascending = values.windows(2).all(|w| w[0] < w[1]);
    let descending = values.windows(2).all(|w| w[0] > w[1]);
    if ascending || descending {
        Ok(())
    } else {
        Err(GridlistError::UnorderedAxis { axis })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::RegionFeature;
    use geo::polygon;

    fn square_region(name: &str, min: f64, max: f64) -> RegionBoundary {
        let square = polygon![
            (x: min, y: min),
            (x: max, y: min),
            (x: max, y: max),
            (x: min, y: max),
            (x: min, y: min),
        ];
        RegionBoundary {
            name: name.to_string(),
            features: vec![RegionFeature {
                geometry: MultiPolygon(vec![square]),
                bbox: GeoBoundingBox::new(min, min, max, max),
            }],
        }
    }

    #[test]
    fn test_cross_product_ordering_is_lon_major() {
        let region = square_region("All", -10.0, 10.0);
        let lons = [0.0, 1.0];
        let lats = [5.0, 6.0, 7.0];

        let gridlist = filter_grid_to_regions(&lons, &lats, &[region]).unwrap();
        assert_eq!(gridlist.len(), 6);

        let expected_indices = [
            GridIndex { lon: 0, lat: 0 },
            GridIndex { lon: 0, lat: 1 },
            GridIndex { lon: 0, lat: 2 },
            GridIndex { lon: 1, lat: 0 },
            GridIndex { lon: 1, lat: 1 },
            GridIndex { lon: 1, lat: 2 },
        ];
        assert_eq!(gridlist.indices(), &expected_indices);
    }

    #[test]
    fn test_index_point_round_trip() {
        let region = square_region("All", -180.0, 90.0);
        let lons = [-12.25, -11.75, -11.25];
        let lats = [40.25, 40.75];

        let gridlist = filter_grid_to_regions(&lons, &lats, &[region]).unwrap();
        for (point, index) in gridlist.points().iter().zip(gridlist.indices()) {
            assert_eq!(point.lon, lons[index.lon]);
            assert_eq!(point.lat, lats[index.lat]);
        }
    }

    #[test]
    fn test_descending_latitude_axis_is_accepted() {
        // Climate rasters frequently store latitude north-to-south.
        let region = square_region("All", 0.0, 10.0);
        let lats = [9.0, 7.0, 5.0];
        let gridlist = filter_grid_to_regions(&[1.0, 2.0], &lats, &[region]).unwrap();
        assert_eq!(gridlist.len(), 6);
        assert_eq!(gridlist.points()[0].lat, 9.0);
        assert_eq!(gridlist.indices()[0], GridIndex { lon: 0, lat: 0 });
    }

    #[test]
    fn test_unordered_axis_fails() {
        let region = square_region("All", 0.0, 10.0);
        let result = filter_grid_to_regions(&[1.0, 3.0, 2.0], &[5.0], &[region.clone()]);
        assert!(matches!(
            result,
            Err(GridlistError::UnorderedAxis { axis: "longitude" })
        ));

        // Duplicate values break the one-to-one index correspondence.
        let result = filter_grid_to_regions(&[1.0, 2.0], &[5.0, 5.0], &[region]);
        assert!(matches!(
            result,
            Err(GridlistError::UnorderedAxis { axis: "latitude" })
        ));
    }

    #[test]
    fn test_points_outside_bbox_are_skipped() {
        let region = square_region("Small", 0.0, 1.0);
        let lons = [-5.0, 0.5, 5.0];
        let lats = [-5.0, 0.5, 5.0];

        let gridlist = filter_grid_to_regions(&lons, &lats, &[region]).unwrap();
        assert_eq!(gridlist.len(), 1);
        assert_eq!(gridlist.points()[0], GridPoint { lon: 0.5, lat: 0.5 });
        assert_eq!(gridlist.indices()[0], GridIndex { lon: 1, lat: 1 });
    }

    #[test]
    fn test_overlapping_regions_duplicate_points() {
        let a = square_region("A", 0.0, 2.0);
        let b = square_region("B", 1.0, 3.0);
        let lons = [1.5];
        let lats = [1.5];

        let gridlist = filter_grid_to_regions(&lons, &lats, &[a, b]).unwrap();
        // The point lies in both regions and is reported once per region.
        assert_eq!(gridlist.len(), 2);
        assert_eq!(gridlist.points()[0], gridlist.points()[1]);

        let stats = gridlist.statistics();
        assert_eq!(stats.region_counts.len(), 2);
        assert_eq!(stats.region_counts[0], ("A".to_string(), 1));
        assert_eq!(stats.region_counts[1], ("B".to_string(), 1));
    }

    #[test]
    fn test_multi_feature_region_fails() {
        let single = square_region("Twin", 0.0, 1.0);
        let doubled = RegionBoundary {
            name: "Twin".to_string(),
            features: vec![single.features[0].clone(), single.features[0].clone()],
        };

        let result = filter_grid_to_regions(&[0.5], &[0.5], &[doubled]);
        assert!(matches!(
            result,
            Err(GridlistError::MultiPartRegion {
                features: 2,
                parts: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_multi_part_geometry_fails() {
        let square = square_region("Islands", 0.0, 1.0);
        let mut geometry = square.features[0].geometry.clone();
        geometry.0.push(geometry.0[0].clone());
        let region = RegionBoundary {
            name: "Islands".to_string(),
            features: vec![RegionFeature {
                geometry,
                bbox: square.features[0].bbox,
            }],
        };

        let result = filter_grid_to_regions(&[0.5], &[0.5], &[region]);
        assert!(matches!(
            result,
            Err(GridlistError::MultiPartRegion {
                features: 1,
                parts: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_geometry_pass_through_collects_outlines() {
        let a = square_region("A", 0.0, 1.0);
        let b = square_region("B", 5.0, 6.0);
        let gridlist = filter_grid_to_regions(&[0.5, 5.5], &[0.5, 5.5], &[a, b]).unwrap();
        assert_eq!(gridlist.geometry().0.len(), 2);
    }

    #[test]
    fn test_empty_selection_is_not_an_error() {
        let region = square_region("Remote", 100.0, 101.0);
        let gridlist = filter_grid_to_regions(&[0.5], &[0.5], &[region]).unwrap();
        assert!(gridlist.is_empty());
        assert_eq!(gridlist.statistics().selected_points, 0);
    }
}
