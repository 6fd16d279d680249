//! Grid resolution tokens.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error type for resolution-token parsing.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// Token is not of the form `<integer>arcsec`
    #[error("invalid resolution token {0:?}: expected the form \"<integer>arcsec\", e.g. \"1800arcsec\"")]
    InvalidFormat(String),
}

/// Grid resolution in arcseconds.
///
/// Climate data products encode their grid spacing as tokens like
/// `"1800arcsec"` (0.5°) or `"300arcsec"` (1/12°). This type parses such
/// tokens and converts between arcseconds and degrees.
///
/// # Example
///
/// ```
/// use gridlist_rs::types::GridResolution;
///
/// let res = GridResolution::parse("1800arcsec").unwrap();
/// assert_eq!(res.arcseconds(), 1800);
/// assert_eq!(res.degrees(), 0.5);
/// assert_eq!(res.token(), "1800arcsec");
///
/// assert!(GridResolution::parse("wronginput").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridResolution {
    arcseconds: u32,
}

impl GridResolution {
    /// Create a resolution from a whole number of arcseconds.
    ///
    /// # Panics
    ///
    /// Panics if `arcseconds` is zero.
    pub fn from_arcseconds(arcseconds: u32) -> Self {
        assert!(arcseconds > 0, "resolution must be positive");
        Self { arcseconds }
    }

    /// Parse a token of the form `<integer>arcsec`.
    pub fn parse(token: &str) -> Result<Self, ResolutionError> {
        let digits = token
            .strip_suffix("arcsec")
            .ok_or_else(|| ResolutionError::InvalidFormat(token.to_string()))?;
        let arcseconds = digits
            .parse::<u32>()
            .map_err(|_| ResolutionError::InvalidFormat(token.to_string()))?;
        if arcseconds == 0 {
            return Err(ResolutionError::InvalidFormat(token.to_string()));
        }
        Ok(Self { arcseconds })
    }

    /// Resolution in arcseconds.
    #[inline]
    pub fn arcseconds(&self) -> u32 {
        self.arcseconds
    }

    /// Resolution in degrees (3600 arcseconds per degree).
    #[inline]
    pub fn degrees(&self) -> f64 {
        self.arcseconds as f64 / 3600.0
    }

    /// The canonical token form, e.g. `"1800arcsec"`.
    pub fn token(&self) -> String {
        format!("{}arcsec", self.arcseconds)
    }
}

impl FromStr for GridResolution {
    type Err = ResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GridResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}arcsec", self.arcseconds)
    }
}
