use clap::Parser;
use orbit_visual::config::plot::{ColumnNames, PlotConfig};
use orbit_visual::constants::*;
use orbit_visual::plot::{OrbitPlotter, WindowRenderer};
use std::error::Error;
use std::path::PathBuf;

/// Plot a precomputed satellite trajectory in 3D around the Earth.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// CSV file with one position per row
    #[arg(default_value = DEFAULT_DATA_PATH)]
    data_path: PathBuf,

    /// Header of the X coordinate column
    #[arg(long, default_value = DEFAULT_X_COLUMN)]
    x_column: String,

    /// Header of the Y coordinate column
    #[arg(long, default_value = DEFAULT_Y_COLUMN)]
    y_column: String,

    /// Header of the Z coordinate column
    #[arg(long, default_value = DEFAULT_Z_COLUMN)]
    z_column: String,

    /// Window title
    #[arg(long, default_value = WINDOW_TITLE)]
    title: String,
}

impl From<Args> for PlotConfig {
    fn from(args: Args) -> Self {
        PlotConfig {
            data_path: args.data_path,
            columns: ColumnNames::new(args.x_column, args.y_column, args.z_column),
            title: args.title,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PlotConfig::from(Args::parse());
    let plotter = OrbitPlotter::new(config);
    plotter.plot(&mut WindowRenderer::new())?;

    Ok(())
}
