//! I/O utilities for reading and writing data files.
//!
//! This module provides:
//! - **Climate coordinates**: 1-D longitude/latitude axes from NetCDF rasters
//!   (requires the `netcdf` feature)
//! - **Simulation output tables**: whitespace-delimited (lon, lat, year)
//!   tables as written by vegetation models
//! - **Gridlist output**: tab-separated point and index lists
//! - **Filename guard**: consistency check between a climate file name and
//!   the requested region/resolution
//!
//! # File Formats
//!
//! ## Simulation Output Tables
//!
//! ```text
//! Lon     Lat     Year    VegC    SoilC
//! 11.25   48.25   2019    4.721   8.102
//! 11.25   48.25   2020    4.698   8.135
//! ```
//!
//! Whitespace-separated, one header line; the first three columns must be
//! exactly `Lon Lat Year`, followed by one or more numeric value columns.
//!
//! ## Gridlist Files
//!
//! Tab-separated, no header, one selected grid point per row; the coordinate
//! file holds `lon<TAB>lat`, the index file `lon_index<TAB>lat_index`,
//! row-aligned with each other.

#[cfg(feature = "netcdf")]
mod climate;
mod gridlist_writer;
mod naming;
mod table_reader;

#[cfg(feature = "netcdf")]
pub use climate::{read_coordinate_axes, ClimateFileError, CoordinateAxes};
pub use gridlist_writer::{write_gridlist, write_gridlist_indices};
pub use naming::{check_filename_consistency, NamingError};
pub use table_reader::{parse_table, read_table_file, TableFileError};
