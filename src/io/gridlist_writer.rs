//! Gridlist output files.
//!
//! Writes the two row-aligned, tab-separated files downstream tools consume:
//! geographic coordinates (`lon<TAB>lat`) and grid indices
//! (`lon_index<TAB>lat_index`), no header, one selected point per row.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::grid::RegionGridlist;

/// Write the (lon, lat) coordinate gridlist.
pub fn write_gridlist(path: &Path, gridlist: &RegionGridlist) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for point in gridlist.points() {
        writeln!(out, "{}\t{}", point.lon, point.lat)?;
    }
    out.flush()
}

/// Write the (lon index, lat index) gridlist, row-aligned with the
/// coordinate file.
pub fn write_gridlist_indices(path: &Path, gridlist: &RegionGridlist) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for index in gridlist.indices() {
        writeln!(out, "{}\t{}", index.lon, index.lat)?;
    }
    out.flush()
}
