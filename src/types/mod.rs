//! Strongly-typed domain types for safer APIs.
//!
//! Newtypes and small structured types that make the gridlist APIs
//! self-documenting and prevent parameter mix-ups: a resolution token is not
//! "just a string", a bounding box is not four loose floats.
//!
//! # Example
//!
//! ```
//! use gridlist_rs::types::{GeoBoundingBox, GridResolution};
//!
//! let res = GridResolution::parse("1800arcsec").unwrap();
//! assert_eq!(res.degrees(), 0.5);
//!
//! let bbox = GeoBoundingBox::new(8.0, 47.0, 14.0, 51.0);
//! assert!(bbox.contains(11.6, 48.1));
//! ```

mod bbox;
mod resolution;

pub use bbox::GeoBoundingBox;
pub use resolution::{GridResolution, ResolutionError};
