//! Overview map rendering.
//!
//! Draws the selected grid points together with the region outlines to a PNG
//! so the selection can be eyeballed before a simulation is queued. The
//! gridlist and the geometry are explicit parameters; the renderer holds no
//! state from earlier pipeline steps.

use std::path::Path;

use geo::MultiPolygon;
use plotters::prelude::*;
use thiserror::Error;

use crate::grid::RegionGridlist;
use crate::types::GeoBoundingBox;

/// Error type for map rendering.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The gridlist holds no points, so there is no extent to draw
    #[error("empty gridlist: no extent to draw")]
    EmptyGridlist,

    /// Backend drawing error
    #[error("drawing error: {0}")]
    Drawing(String),
}

/// Render the region outlines and the selected grid points to a PNG.
///
/// The map extent is the gridlist's coordinate range padded by `margin_deg`
/// on every side (one grid cell is a good choice).
///
/// # Arguments
/// * `path` - Output PNG path
/// * `geometry` - Region outlines, as returned by the grid filter
/// * `gridlist` - Selected grid points
/// * `margin_deg` - Extent padding in degrees
pub fn render_region_map(
    path: &Path,
    geometry: &MultiPolygon<f64>,
    gridlist: &RegionGridlist,
    margin_deg: f64,
) -> Result<(), PlotError> {
    let extent = gridlist_extent(gridlist)
        .ok_or(PlotError::EmptyGridlist)?
        .with_margin(margin_deg);

    let root = BitMapBackend::new(path, (900, 900)).into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error)?;

    // No axis text; text rendering would require system fonts.
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .build_cartesian_2d(
            extent.min_lon..extent.max_lon,
            extent.min_lat..extent.max_lat,
        )
        .map_err(drawing_error)?;

    for polygon in &geometry.0 {
        let rings = std::iter::once(polygon.exterior()).chain(polygon.interiors());
        for ring in rings {
            let outline: Vec<(f64, f64)> = ring.coords().map(|c| (c.x, c.y)).collect();
            chart
                .draw_series(LineSeries::new(outline, &BLACK))
                .map_err(drawing_error)?;
        }
    }

    chart
        .draw_series(
            gridlist
                .points()
                .iter()
                .map(|p| Circle::new((p.lon, p.lat), 3, BLUE.filled())),
        )
        .map_err(drawing_error)?;

    root.present().map_err(drawing_error)?;
    Ok(())
}

fn gridlist_extent(gridlist: &RegionGridlist) -> Option<GeoBoundingBox> {
    GeoBoundingBox::from_coords(
        gridlist
            .points()
            .iter()
            .map(|p| geo::Coord { x: p.lon, y: p.lat }),
    )
}

fn drawing_error(e: impl std::fmt::Display) -> PlotError {
    PlotError::Drawing(e.to_string())
}
