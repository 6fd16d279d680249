//! Ellipsoidal geodesy for latitude/longitude grids.
//!
//! Closed-form lengths of one degree of longitude and latitude on a
//! WGS84-like reference ellipsoid, and a trapezoidal surface-area model for
//! regular lat/lon grid cells. Because a degree of longitude shrinks towards
//! the poles, a grid cell is not a rectangle on the ground: its northern and
//! southern edges have different lengths, so the cell is treated as a
//! trapezoid (rectangle plus triangular correction).
//!
//! # Example
//!
//! ```
//! use gridlist_rs::geodesy::{cell_area, length_of_longitude_degree};
//!
//! // One degree of longitude at the equator is about 111.3 km.
//! let l = length_of_longitude_degree(0.0).unwrap();
//! assert!((l - 111_320.0).abs() < 20.0);
//!
//! // Area of a half-degree cell centered at 48°N, in square meters.
//! let area = cell_area(48.0, 0.5, 0.5).unwrap();
//! assert!(area > 0.0);
//! ```

use std::f64::consts::PI;

use thiserror::Error;

/// WGS84 semi-major axis (equatorial radius) in meters.
pub const WGS84_SEMI_MAJOR_AXIS_M: f64 = 6_378_137.0;
/// WGS84 semi-minor axis (polar radius) in meters.
pub const WGS84_SEMI_MINOR_AXIS_M: f64 = 6_356_752.314_2;

/// Error type for geodesic computations.
#[derive(Debug, Error)]
pub enum GeodesyError {
    /// Latitude outside the valid [-90, 90] degree range
    #[error("latitude {0}° is outside the valid range [-90°, 90°]")]
    LatitudeOutOfRange(f64),
}

fn check_latitude(latitude: f64) -> Result<(), GeodesyError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(GeodesyError::LatitudeOutOfRange(latitude));
    }
    Ok(())
}

/// Length, in meters, of one degree of longitude at the given latitude.
///
/// Uses the exact expression on the ellipsoid,
/// `π·a·cos(φ) / (180·sqrt(1 − e²·sin²(φ)))`,
/// with eccentricity `e² = (a² − b²)/a²`.
///
/// The result is symmetric in the sign of the latitude and evaluates to
/// (numerically) zero at the poles.
///
/// # Arguments
/// * `latitude` - Latitude in degrees, must be within [-90, 90]
pub fn length_of_longitude_degree(latitude: f64) -> Result<f64, GeodesyError> {
    check_latitude(latitude)?;

    let a = WGS84_SEMI_MAJOR_AXIS_M;
    let b = WGS84_SEMI_MINOR_AXIS_M;
    let e2 = (a * a - b * b) / (a * a);

    let phi = latitude.to_radians();
    Ok(PI * a * phi.cos() / (180.0 * (1.0 - e2 * phi.sin() * phi.sin()).sqrt()))
}

/// Length, in meters, of one degree of latitude at the given latitude.
///
/// Uses the standard polynomial approximation of the meridian arc,
/// `|111132.954 − 559.822·cos(2φ) + 1.175·cos(4φ)|`. Always positive and
/// symmetric in the sign of the latitude.
///
/// # Arguments
/// * `latitude` - Latitude in degrees, must be within [-90, 90]
pub fn length_of_latitude_degree(latitude: f64) -> Result<f64, GeodesyError> {
    check_latitude(latitude)?;

    let phi = latitude.to_radians();
    Ok((111_132.954 - 559.822 * (2.0 * phi).cos() + 1.175 * (4.0 * phi).cos()).abs())
}

/// Surface area, in square meters, of a grid cell centered at `latitude`.
///
/// The cell spans `lat_frac` degrees of latitude and `lon_frac` degrees of
/// longitude. The longitude-degree length is evaluated at the northern and
/// southern cell edges (`latitude ± lat_frac/2`); the shorter edge forms a
/// rectangle with the meridional extent and the remainder is the triangular
/// correction for the trapezoid's slanted sides:
///
/// ```text
/// area = lat_length·short + lat_length·(long − short)/2
/// ```
///
/// A cell whose edge latitude leaves [-90, 90] (e.g. a half-degree cell
/// centered exactly on a pole) fails with
/// [`GeodesyError::LatitudeOutOfRange`].
pub fn cell_area(latitude: f64, lat_frac: f64, lon_frac: f64) -> Result<f64, GeodesyError> {
    check_latitude(latitude)?;

    let lat_length = length_of_latitude_degree(latitude)? * lat_frac;
    let lon_north = length_of_longitude_degree(latitude + lat_frac / 2.0)?;
    let lon_south = length_of_longitude_degree(latitude - lat_frac / 2.0)?;

    let short_edge = lon_north.min(lon_south) * lon_frac;
    let long_edge = lon_north.max(lon_south) * lon_frac;

    Ok(lat_length * short_edge + lat_length * (long_edge - short_edge) / 2.0)
}

/// Area of a 0.5° × 0.5° grid cell centered at `latitude`.
///
/// Convenience wrapper for the dominant simulation-output resolution.
pub fn half_degree_cell_area(latitude: f64) -> Result<f64, GeodesyError> {
    cell_area(latitude, 0.5, 0.5)
}
