//! NetCDF coordinate axes reader.
//!
//! Reads the 1-D longitude/latitude coordinate variables of a prepared
//! climate raster. Only the coordinate axes are needed here: the grid
//! filter works purely on the cell positions, never on the climate values
//! themselves.

use std::path::Path;

use thiserror::Error;

/// Error type for climate raster access.
#[derive(Debug, Error)]
pub enum ClimateFileError {
    /// NetCDF library error
    #[error("NetCDF error: {0}")]
    NetCDF(#[from] netcdf::Error),

    /// Missing coordinate variable
    #[error("missing coordinate variable: {0}")]
    MissingVariable(String),
}

/// The ordered coordinate axes of a regular lon/lat raster.
#[derive(Clone, Debug)]
pub struct CoordinateAxes {
    /// Longitude axis in degrees, as stored in the file
    pub lons: Vec<f64>,
    /// Latitude axis in degrees, as stored in the file
    pub lats: Vec<f64>,
}

impl CoordinateAxes {
    /// Number of points in the full coordinate cross product.
    pub fn n_points(&self) -> usize {
        self.lons.len() * self.lats.len()
    }
}

/// Read the longitude/latitude axes from a NetCDF climate raster.
///
/// Accepts the common coordinate variable spellings (`lon`/`longitude`,
/// `lat`/`latitude`).
pub fn read_coordinate_axes(path: impl AsRef<Path>) -> Result<CoordinateAxes, ClimateFileError> {
    let file = netcdf::open(path)?;

    let lons = read_coord(&file, &["lon", "longitude"])?;
    let lats = read_coord(&file, &["lat", "latitude"])?;

    Ok(CoordinateAxes { lons, lats })
}

/// Read a coordinate variable under its first matching name.
fn read_coord(file: &netcdf::File, names: &[&str]) -> Result<Vec<f64>, ClimateFileError> {
    for name in names {
        if let Some(var) = file.variable(name) {
            let data: Vec<f64> = var.get_values(..)?;
            return Ok(data);
        }
    }
    Err(ClimateFileError::MissingVariable(names.join(" or ")))
}
