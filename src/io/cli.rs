//! Command-line interface for rendering a single diagram

use crate::color::SchemeResolver;
use crate::diagram::DiagramConfig;
use crate::diagram::raster::SearchBound;
use crate::diagram::render::{Diagram, generate_voronoi_diagram};
use crate::io::configuration::{
    DEFAULT_COLOR_MAP1, DEFAULT_COLOR_MAP2, DEFAULT_HEIGHT, DEFAULT_MEAN_X, DEFAULT_MEAN_Y,
    DEFAULT_NUM_CELLS, DEFAULT_OUTPUT_FILE, DEFAULT_SEED, DEFAULT_STDV_X, DEFAULT_STDV_Y,
    DEFAULT_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{ImageSink, PngSink};
use crate::io::progress::ProgressReporter;
use crate::math::random::SeededRandom;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "voronoi-raster")]
#[command(
    author,
    version,
    about = "Render a Voronoi diagram from Gaussian-sampled sites"
)]
/// Command-line arguments for the diagram renderer
pub struct Cli {
    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Number of sites
    #[arg(short = 'n', long = "cells", default_value_t = DEFAULT_NUM_CELLS)]
    pub num_cells: usize,

    /// Mean of the x-coordinate distribution
    #[arg(long, default_value_t = DEFAULT_MEAN_X, allow_negative_numbers = true)]
    pub mean_x: f64,

    /// Standard deviation of the x-coordinate distribution
    #[arg(long, default_value_t = DEFAULT_STDV_X, allow_negative_numbers = true)]
    pub stdv_x: f64,

    /// Mean of the y-coordinate distribution
    #[arg(long, default_value_t = DEFAULT_MEAN_Y, allow_negative_numbers = true)]
    pub mean_y: f64,

    /// Standard deviation of the y-coordinate distribution
    #[arg(long, default_value_t = DEFAULT_STDV_Y, allow_negative_numbers = true)]
    pub stdv_y: f64,

    /// Color map for even-indexed sites (e.g. `PuBuGn` or `viridis`, `_r` to reverse)
    #[arg(long = "color-map1", default_value = DEFAULT_COLOR_MAP1)]
    pub color_map1: String,

    /// Color map for odd-indexed sites (e.g. `PuBuGn` or `viridis`, `_r` to reverse)
    #[arg(long = "color-map2", default_value = DEFAULT_COLOR_MAP2)]
    pub color_map2: String,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Search every site instead of only those within the canvas diagonal
    #[arg(short, long)]
    pub unbounded: bool,

    /// Worker threads for rasterization, at least 1 (omit for the rayon default)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Search bound selected by the `--unbounded` flag
    pub const fn search_bound(&self) -> SearchBound {
        if self.unbounded {
            SearchBound::Unbounded
        } else {
            SearchBound::Diagonal
        }
    }

    /// Diagram parameters described by these arguments
    pub fn config(&self) -> DiagramConfig {
        DiagramConfig {
            width: self.width,
            height: self.height,
            num_cells: self.num_cells,
            mean_x: self.mean_x,
            stdv_x: self.stdv_x,
            mean_y: self.mean_y,
            stdv_y: self.stdv_y,
            color_map1: self.color_map1.clone(),
            color_map2: self.color_map2.clone(),
            search_bound: self.search_bound(),
        }
    }
}

/// Renders the diagram described by the CLI arguments and writes it to disk
pub struct DiagramRunner {
    cli: Cli,
    progress: ProgressReporter,
}

impl DiagramRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressReporter::new()
        } else {
            ProgressReporter::hidden()
        };

        Self { cli, progress }
    }

    /// Render, then write the canvas to the output path
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, rendering fails or the
    /// PNG cannot be written
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        let config = self.cli.config();

        let diagram = self.render(&config)?;
        PngSink.write(&diagram.canvas, &self.cli.output)?;
        self.progress.finish();

        // Allow print for user feedback on completion
        #[allow(clippy::print_stderr)]
        if self.cli.should_show_progress() {
            eprintln!(
                "Wrote {} ({}x{}, {} sites) in {:.2?}",
                self.cli.output.display(),
                config.width,
                config.height,
                diagram.sites.len(),
                start_time.elapsed()
            );
        }

        Ok(())
    }

    /// Render without writing, on a dedicated pool when `--threads` is given
    ///
    /// Parameters are validated before any pool is built.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, `--threads` is 0, the
    /// thread pool cannot be built or a pixel has no site within the search bound
    pub fn render(&self, config: &DiagramConfig) -> Result<Diagram> {
        config.validate()?;
        let mut random = SeededRandom::new(self.cli.seed);

        match self.cli.threads {
            Some(0) => Err(invalid_parameter(
                "threads",
                &0,
                &"must be at least 1, omit the flag for the rayon default",
            )),
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| invalid_parameter("threads", &threads, &e))?;
                pool.install(|| {
                    generate_voronoi_diagram(config, &SchemeResolver, &mut random, &self.progress)
                })
            }
            None => generate_voronoi_diagram(config, &SchemeResolver, &mut random, &self.progress),
        }
    }
}
