//! Named administrative region boundaries.
//!
//! Resolves human-readable region names (countries, states/provinces) to
//! boundary polygons from a reference vector dataset. The dataset itself is
//! an injected dependency behind the [`BoundarySource`] trait; the shipped
//! implementation reads Natural Earth cultural shapefiles
//! ([`ShapefileBoundarySource`]).
//!
//! # Example
//!
//! ```ignore
//! use gridlist_rs::region::{resolve_region, BoundaryKind, ShapefileBoundarySource};
//!
//! let source = ShapefileBoundarySource::new("data/naturalearth");
//! let kind = BoundaryKind::states_provinces();
//! let bavaria = resolve_region(&source, "Bayern", &kind)?;
//! println!("{} feature(s)", bavaria.features.len());
//! ```

use std::fmt;

use geo::MultiPolygon;
use thiserror::Error;

use crate::types::GeoBoundingBox;

mod shapefile_source;

pub use shapefile_source::ShapefileBoundarySource;

/// Error type for region boundary lookups.
#[derive(Debug, Error)]
pub enum RegionError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Shapefile parsing error
    #[error("shapefile error: {0}")]
    Shapefile(String),

    /// Region name has no match in the boundary dataset
    #[error("no feature named {name:?} in boundary dataset {dataset:?}")]
    NotFound { name: String, dataset: String },

    /// A matched feature carried no usable geometry
    #[error("feature {name:?} has an empty geometry")]
    EmptyGeometry { name: String },
}

/// Which reference boundary dataset to query.
///
/// Wraps the dataset name of a Natural Earth cultural vector product, e.g.
/// `admin_0_countries` or `admin_1_states_provinces`. The dataset determines
/// which attribute field holds the human-readable feature name: the
/// states/provinces product uses lower-case `name`, every other product uses
/// upper-case `NAME`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoundaryKind {
    dataset: String,
}

impl BoundaryKind {
    /// Boundary kind for an arbitrary dataset name.
    pub fn new(dataset: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
        }
    }

    /// Country outlines (`admin_0_countries`).
    pub fn countries() -> Self {
        Self::new("admin_0_countries")
    }

    /// First-level subdivisions (`admin_1_states_provinces`).
    pub fn states_provinces() -> Self {
        Self::new("admin_1_states_provinces")
    }

    /// The dataset name, e.g. `"admin_0_countries"`.
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// The attribute field holding the feature name for this dataset.
    pub fn name_field(&self) -> &str {
        if self.dataset == "admin_1_states_provinces" {
            "name"
        } else {
            "NAME"
        }
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dataset)
    }
}

/// One boundary feature matched by name in the reference dataset.
#[derive(Clone, Debug)]
pub struct RegionFeature {
    /// The feature geometry as read from the dataset. A feature composed of
    /// several islands or exclaves has more than one polygon part.
    pub geometry: MultiPolygon<f64>,
    /// Bounding box over the whole feature geometry
    pub bbox: GeoBoundingBox,
}

/// All features matched for one requested sub-region name.
///
/// Resolution does not enforce that the match is unique; the grid filter
/// checks cardinality where its single-polygon assumption actually matters.
#[derive(Clone, Debug)]
pub struct RegionBoundary {
    /// The requested region name
    pub name: String,
    /// Matched features, in dataset order (never empty)
    pub features: Vec<RegionFeature>,
}

/// Source of named boundary geometries.
///
/// Implementations return every feature whose name field exactly matches
/// `name` (case-sensitive), with an empty vector for no match. Backed by a
/// vector-geometry file in production and by in-memory fixtures in tests.
pub trait BoundarySource {
    /// Look up all features named `name` in the dataset selected by `kind`.
    fn lookup(&self, name: &str, kind: &BoundaryKind) -> Result<Vec<RegionFeature>, RegionError>;
}

/// Resolve a named region to its boundary feature(s).
///
/// Fails with [`RegionError::NotFound`] if the name matches nothing; a
/// missing region must never be silently accepted as an empty result.
/// Multiple matches are passed through; downstream consumers enforce the
/// cardinality they need.
pub fn resolve_region<S: BoundarySource + ?Sized>(
    source: &S,
    name: &str,
    kind: &BoundaryKind,
) -> Result<RegionBoundary, RegionError> {
    let features = source.lookup(name, kind)?;
    if features.is_empty() {
        return Err(RegionError::NotFound {
            name: name.to_string(),
            dataset: kind.dataset().to_string(),
        });
    }
    Ok(RegionBoundary {
        name: name.to_string(),
        features,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{polygon, MultiPolygon};

    struct FixtureSource;

    impl BoundarySource for FixtureSource {
        fn lookup(
            &self,
            name: &str,
            _kind: &BoundaryKind,
        ) -> Result<Vec<RegionFeature>, RegionError> {
            let square = polygon![
                (x: 0.0, y: 0.0),
                (x: 1.0, y: 0.0),
                (x: 1.0, y: 1.0),
                (x: 0.0, y: 1.0),
                (x: 0.0, y: 0.0),
            ];
            let feature = RegionFeature {
                geometry: MultiPolygon(vec![square]),
                bbox: GeoBoundingBox::new(0.0, 0.0, 1.0, 1.0),
            };
            match name {
                "Unique" => Ok(vec![feature]),
                "Twin" => Ok(vec![feature.clone(), feature]),
                _ => Ok(Vec::new()),
            }
        }
    }

    #[test]
    fn test_name_field_lookup_table() {
        assert_eq!(BoundaryKind::states_provinces().name_field(), "name");
        assert_eq!(BoundaryKind::countries().name_field(), "NAME");
        // Any other dataset falls in the upper-case bucket.
        assert_eq!(BoundaryKind::new("admin_0_map_units").name_field(), "NAME");
    }

    #[test]
    fn test_resolve_single_match() {
        let region = resolve_region(&FixtureSource, "Unique", &BoundaryKind::countries()).unwrap();
        assert_eq!(region.name, "Unique");
        assert_eq!(region.features.len(), 1);
    }

    #[test]
    fn test_resolve_passes_multiple_matches_through() {
        let region = resolve_region(&FixtureSource, "Twin", &BoundaryKind::countries()).unwrap();
        assert_eq!(region.features.len(), 2);
    }

    #[test]
    fn test_resolve_unknown_name_fails() {
        let result = resolve_region(&FixtureSource, "Atlantis", &BoundaryKind::countries());
        assert!(matches!(result, Err(RegionError::NotFound { .. })));
    }

    #[test]
    fn test_lookup_is_case_sensitive_by_contract() {
        let result = resolve_region(&FixtureSource, "unique", &BoundaryKind::countries());
        assert!(matches!(result, Err(RegionError::NotFound { .. })));
    }
}
