//! Reader for whitespace-delimited simulation output tables.
//!
//! Parses the column-aligned text tables vegetation models write per output
//! variable group, e.g.:
//!
//! ```text
//! Lon     Lat     Year    VegC    SoilC
//! 11.25   48.25   2019    4.721   8.102
//! 11.75   48.25   2019    4.698   8.135
//! ```
//!
//! The header must lead with exactly `Lon Lat Year`; everything after those
//! three columns is a numeric value column.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::table::{LonLatYearTable, TableRow};

/// Error type for table file parsing.
#[derive(Debug, Error)]
pub enum TableFileError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Header line is missing or not keyed by Lon/Lat/Year
    #[error("bad table header: {0}")]
    BadHeader(String),

    /// Parse error with line number
    #[error("parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },
}

/// Parse a table from a string.
///
/// Same format as the file reader; useful for testing or embedded data.
pub fn parse_table(content: &str) -> Result<LonLatYearTable, TableFileError> {
    let mut lines = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header) = lines
        .next()
        .ok_or_else(|| TableFileError::BadHeader("empty table".to_string()))?;
    let header: Vec<&str> = header.split_whitespace().collect();

    if header.len() < 4 || header[0] != "Lon" || header[1] != "Lat" || header[2] != "Year" {
        return Err(TableFileError::BadHeader(format!(
            "expected \"Lon Lat Year <columns...>\", got {:?}",
            header.join(" ")
        )));
    }

    let columns: Vec<String> = header[3..].iter().map(|c| c.to_string()).collect();
    let mut table = LonLatYearTable::new(columns);

    for (line_num, line) in lines {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != header.len() {
            return Err(TableFileError::ParseError {
                line: line_num + 1,
                message: format!("expected {} columns, got {}", header.len(), parts.len()),
            });
        }

        let lon = parse_cell(parts[0], "Lon", line_num)?;
        let lat = parse_cell(parts[1], "Lat", line_num)?;
        let year = parts[2]
            .parse::<i32>()
            .map_err(|_| TableFileError::ParseError {
                line: line_num + 1,
                message: format!("invalid Year value {:?}", parts[2]),
            })?;

        let mut values = Vec::with_capacity(parts.len() - 3);
        for (cell, name) in parts[3..].iter().zip(table.columns()) {
            values.push(parse_cell(cell, name, line_num)?);
        }

        table.push(TableRow {
            lon,
            lat,
            year,
            values,
        });
    }

    Ok(table)
}

/// Read a simulation output table file.
pub fn read_table_file(path: &Path) -> Result<LonLatYearTable, TableFileError> {
    let content = fs::read_to_string(path)?;
    parse_table(&content)
}

fn parse_cell(cell: &str, column: &str, line_num: usize) -> Result<f64, TableFileError> {
    cell.parse::<f64>().map_err(|_| TableFileError::ParseError {
        line: line_num + 1,
        message: format!("invalid {} value {:?}", column, cell),
    })
}
