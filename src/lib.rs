//! # gridlist-rs
//!
//! Extract the grid points of a gridded climate dataset that fall within
//! named administrative regions, and aggregate per-cell simulation output
//! into yearly regional totals using ellipsoidal cell areas.
//!
//! This crate provides the building blocks of the gridlist workflow:
//! - Ellipsoidal geodesy (degree lengths, trapezoidal cell areas)
//! - Named-region boundary lookup from Natural Earth shapefiles
//! - Two-phase (bounding box, then exact containment) grid filtering
//! - Area-weighted yearly aggregation of (lon, lat, year) tables
//! - Readers and writers for climate rasters, simulation output tables and
//!   tab-separated gridlist files
//! - Overview map rendering of a selection
//!
//! The `create_gridlist` binary wires these together for the common case:
//! climate raster in, two gridlist files and a map out.

pub mod geodesy;
pub mod grid;
pub mod io;
pub mod plot;
pub mod region;
pub mod table;
pub mod types;

// Re-export main types for convenience
pub use geodesy::{
    cell_area, half_degree_cell_area, length_of_latitude_degree, length_of_longitude_degree,
    GeodesyError, WGS84_SEMI_MAJOR_AXIS_M, WGS84_SEMI_MINOR_AXIS_M,
};
pub use grid::{
    filter_grid_to_regions, GridIndex, GridPoint, GridlistError, GridlistStatistics,
    RegionGridlist,
};
pub use region::{
    resolve_region, BoundaryKind, BoundarySource, RegionBoundary, RegionError, RegionFeature,
    ShapefileBoundarySource,
};
pub use table::{aggregate_yearly, AggregationError, LonLatYearTable, TableRow};
pub use types::{GeoBoundingBox, GridResolution, ResolutionError};

// I/O types
pub use io::{
    check_filename_consistency, parse_table, read_table_file, write_gridlist,
    write_gridlist_indices, NamingError, TableFileError,
};
#[cfg(feature = "netcdf")]
pub use io::{read_coordinate_axes, ClimateFileError, CoordinateAxes};
pub use plot::{render_region_map, PlotError};
