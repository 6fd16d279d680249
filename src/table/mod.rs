//! Area-weighted yearly aggregation of simulation output tables.
//!
//! Vegetation-model output comes as a table keyed by (longitude, latitude,
//! year) with one or more per-cell value columns (e.g. carbon pools in
//! kg/m²). Multiplying each value by its grid cell's surface area and summing
//! per year turns the per-square-meter quantities into regional totals.
//!
//! # Example
//!
//! ```
//! use gridlist_rs::table::{aggregate_yearly, LonLatYearTable, TableRow};
//!
//! let mut table = LonLatYearTable::new(vec!["VegC".to_string()]);
//! table.push(TableRow { lon: 11.25, lat: 48.25, year: 2019, values: vec![1.5] });
//! table.push(TableRow { lon: 11.25, lat: 48.75, year: 2019, values: vec![2.0] });
//!
//! let totals = aggregate_yearly(&table, "VegC", 0.5, 0.5).unwrap();
//! assert!(totals[&2019] > 0.0);
//! ```

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use crate::geodesy::{self, GeodesyError};

/// Error type for yearly aggregation.
#[derive(Debug, Error)]
pub enum AggregationError {
    /// The requested value column does not exist
    #[error("unknown variable column {0:?}")]
    UnknownVariable(String),

    /// The (lon, lat, year) composite key is not unique
    #[error("duplicate (lon, lat, year) key ({lon}, {lat}, {year})")]
    DuplicateKey { lon: f64, lat: f64, year: i32 },

    /// A numeric cell is NaN or infinite
    #[error("undefined value in column {column:?} at (lon, lat, year) = ({lon}, {lat}, {year})")]
    MissingValue {
        column: String,
        lon: f64,
        lat: f64,
        year: i32,
    },

    /// Cell-area computation failed (latitude out of range)
    #[error(transparent)]
    Geodesy(#[from] GeodesyError),
}

/// One table row: the composite key plus the value columns.
#[derive(Clone, Debug)]
pub struct TableRow {
    /// Grid cell center longitude in degrees
    pub lon: f64,
    /// Grid cell center latitude in degrees
    pub lat: f64,
    /// Simulation year
    pub year: i32,
    /// One value per table column, in column order
    pub values: Vec<f64>,
}

/// A table keyed by (longitude, latitude, year).
///
/// Row order is preserved from construction; key uniqueness and value
/// validity are checked by [`aggregate_yearly`] before any computation, not
/// at insertion time.
#[derive(Clone, Debug, Default)]
pub struct LonLatYearTable {
    columns: Vec<String>,
    rows: Vec<TableRow>,
}

impl LonLatYearTable {
    /// Create an empty table with the given value column names.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row.
    ///
    /// # Panics
    ///
    /// Panics if the row's value count does not match the column count.
    pub fn push(&mut self, row: TableRow) {
        assert_eq!(
            row.values.len(),
            self.columns.len(),
            "row has {} values for {} columns",
            row.values.len(),
            self.columns.len()
        );
        self.rows.push(row);
    }

    /// Value column names, in column order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows, in insertion order.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a value column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Aggregate one value column into per-year regional totals.
///
/// For every row the cell area at the row's latitude (spanning `lat_frac` ×
/// `lon_frac` degrees) is multiplied with the row's value in `variable`; the
/// products are summed per year. Years without rows are absent from the
/// result rather than zero-filled.
///
/// All validation happens before any computation: the variable must exist,
/// the (lon, lat, year) key must be unique, and every numeric cell (keys
/// included) must be finite.
pub fn aggregate_yearly(
    table: &LonLatYearTable,
    variable: &str,
    lat_frac: f64,
    lon_frac: f64,
) -> Result<BTreeMap<i32, f64>, AggregationError> {
    let column = table
        .column_index(variable)
        .ok_or_else(|| AggregationError::UnknownVariable(variable.to_string()))?;

    let mut seen = HashSet::with_capacity(table.len());
    for row in table.rows() {
        if !row.lon.is_finite() {
            return Err(missing(row, "Lon"));
        }
        if !row.lat.is_finite() {
            return Err(missing(row, "Lat"));
        }
        if !seen.insert((row.lon.to_bits(), row.lat.to_bits(), row.year)) {
            return Err(AggregationError::DuplicateKey {
                lon: row.lon,
                lat: row.lat,
                year: row.year,
            });
        }
        for (name, value) in table.columns().iter().zip(&row.values) {
            if !value.is_finite() {
                return Err(missing(row, name));
            }
        }
    }

    let mut totals = BTreeMap::new();
    for row in table.rows() {
        let area = geodesy::cell_area(row.lat, lat_frac, lon_frac)?;
        *totals.entry(row.year).or_insert(0.0) += area * row.values[column];
    }

    Ok(totals)
}

fn missing(row: &TableRow, column: &str) -> AggregationError {
    AggregationError::MissingValue {
        column: column.to_string(),
        lon: row.lon,
        lat: row.lat,
        year: row.year,
    }
}
