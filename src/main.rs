//! CLI entry point for rendering a Voronoi diagram to PNG

use clap::Parser;
use voronoi_raster::io::cli::{Cli, DiagramRunner};

fn main() -> voronoi_raster::Result<()> {
    let cli = Cli::parse();
    let runner = DiagramRunner::new(cli);
    runner.run()
}
