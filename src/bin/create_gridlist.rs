//! Create gridlist files for a named region of a climate raster.
//!
//! Reads the coordinate axes of a prepared climate data file, resolves the
//! requested sub-regions from Natural Earth boundary shapefiles, keeps the
//! grid points inside them and writes two row-aligned gridlist files
//! (coordinates and grid indices) plus an overview map.
//!
//! Run with: cargo run --features netcdf --bin create_gridlist -- \
//!     data/model_obsclim_tas_1800arcsec_bavaria_daily.nc 1800arcsec bavaria \
//!     Bayern admin_1_states_provinces gridlist.txt gridlist_cf.txt

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use gridlist_rs::grid::filter_grid_to_regions;
use gridlist_rs::io::{
    check_filename_consistency, read_coordinate_axes, write_gridlist, write_gridlist_indices,
};
use gridlist_rs::plot::render_region_map;
use gridlist_rs::region::{resolve_region, BoundaryKind, ShapefileBoundarySource};
use gridlist_rs::types::GridResolution;

#[derive(Parser, Debug)]
#[command(
    name = "create_gridlist",
    about = "Extract the grid points of a climate raster that fall within named regions"
)]
struct Args {
    /// Climate data file providing the lon/lat coordinate axes (NetCDF)
    climate_data: PathBuf,

    /// Grid resolution token, e.g. "1800arcsec"
    resolution: String,

    /// Region label expected to appear in the climate data file name
    region_label: String,

    /// Comma-separated sub-region names, e.g. "Bayern" or "France,Germany"
    subregions: String,

    /// Boundary dataset, e.g. "admin_0_countries" or "admin_1_states_provinces"
    boundary_type: String,

    /// Output path for the (lon, lat) gridlist
    output: PathBuf,

    /// Output path for the (lon index, lat index) gridlist
    output_indices: PathBuf,

    /// Directory holding the Natural Earth boundary shapefiles
    #[arg(long, default_value = "data/naturalearth")]
    boundary_dir: PathBuf,

    /// Skip rendering the overview map next to the gridlist output
    #[arg(long)]
    no_map: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let resolution = GridResolution::parse(&args.resolution)?;
    check_filename_consistency(&args.climate_data, &args.region_label, resolution)?;

    println!(
        "reading coordinate axes from {}",
        args.climate_data.display()
    );
    let axes = read_coordinate_axes(&args.climate_data)
        .with_context(|| format!("reading {}", args.climate_data.display()))?;
    println!(
        "grid is {} x {} ({} points)",
        axes.lons.len(),
        axes.lats.len(),
        axes.n_points()
    );

    let kind = BoundaryKind::new(&args.boundary_type);
    let source = ShapefileBoundarySource::new(&args.boundary_dir);
    let mut regions = Vec::new();
    for name in args.subregions.split(',') {
        regions.push(
            resolve_region(&source, name, &kind)
                .with_context(|| format!("resolving sub-region {:?}", name))?,
        );
    }

    let gridlist = filter_grid_to_regions(&axes.lons, &axes.lats, &regions)?;
    print!("{}", gridlist.statistics());

    write_gridlist(&args.output, &gridlist)
        .with_context(|| format!("writing {}", args.output.display()))?;
    write_gridlist_indices(&args.output_indices, &gridlist)
        .with_context(|| format!("writing {}", args.output_indices.display()))?;

    if !args.no_map {
        let mut map_path = OsString::from(args.output.as_os_str());
        map_path.push(".png");
        let map_path = PathBuf::from(map_path);

        render_region_map(&map_path, gridlist.geometry(), &gridlist, resolution.degrees())?;
        println!("wrote map to {}", map_path.display());
    }

    Ok(())
}
