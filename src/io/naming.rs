//! Climate-data filename consistency guard.
//!
//! Prepared climate files embed the region label and the resolution token in
//! their names (e.g. `model_obsclim_tas_1800arcsec_bavaria_daily.nc`).
//! Requesting a gridlist for a mismatched region or resolution is almost
//! certainly an operator error, so the pipeline fails fast before reading
//! anything.

use std::path::Path;

use thiserror::Error;

use crate::types::GridResolution;

/// Error type for the filename guard.
#[derive(Debug, Error)]
pub enum NamingError {
    /// File name does not embed the requested region label
    #[error("climate data file {path:?} does not contain the region label {label:?}")]
    RegionLabelMismatch { path: String, label: String },

    /// File name does not embed the requested resolution token
    #[error("climate data file {path:?} does not contain the resolution token {token:?}")]
    ResolutionMismatch { path: String, token: String },
}

/// Check that a climate data path embeds the region label and resolution
/// token it is supposed to have been prepared for.
pub fn check_filename_consistency(
    path: &Path,
    region_label: &str,
    resolution: GridResolution,
) -> Result<(), NamingError> {
    let name = path.to_string_lossy();

    if !name.contains(region_label) {
        return Err(NamingError::RegionLabelMismatch {
            path: name.into_owned(),
            label: region_label.to_string(),
        });
    }

    let token = resolution.token();
    if !name.contains(&token) {
        return Err(NamingError::ResolutionMismatch {
            path: name.into_owned(),
            token,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn res(token: &str) -> GridResolution {
        GridResolution::parse(token).unwrap()
    }

    #[test]
    fn test_consistent_filename_passes() {
        let path = Path::new("data/model_obsclim_tas_1800arcsec_bavaria_daily.nc");
        assert!(check_filename_consistency(path, "bavaria", res("1800arcsec")).is_ok());
    }

    #[test]
    fn test_missing_region_label_fails() {
        let path = Path::new("data/model_obsclim_tas_1800arcsec_bavaria_daily.nc");
        let result = check_filename_consistency(path, "saxony", res("1800arcsec"));
        assert!(matches!(
            result,
            Err(NamingError::RegionLabelMismatch { .. })
        ));
    }

    #[test]
    fn test_missing_resolution_token_fails() {
        let path = Path::new("data/model_obsclim_tas_1800arcsec_bavaria_daily.nc");
        let result = check_filename_consistency(path, "bavaria", res("300arcsec"));
        assert!(matches!(result, Err(NamingError::ResolutionMismatch { .. })));
    }
}
