//! End-to-end diagram rendering: validate, resolve palettes, sample sites, rasterize

use crate::color::{Palette, PaletteResolver};
use crate::diagram::canvas::Canvas;
use crate::diagram::config::DiagramConfig;
use crate::diagram::raster::{BruteForce, NearestSite, rasterize};
use crate::diagram::sites::{Site, SiteGenerator};
use crate::io::error::Result;
use crate::io::progress::ProgressReporter;
use crate::math::random::RandomSource;

/// Sites and the canvas rendered from them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    /// Sites in generation order
    pub sites: Vec<Site>,
    /// Fully assigned canvas
    pub canvas: Canvas,
}

/// Render a diagram using the exact brute-force search
///
/// # Errors
///
/// Returns an error if the configuration or palette names are invalid, or if a
/// pixel has no site within the configured search bound
pub fn generate_voronoi_diagram<P, R>(
    config: &DiagramConfig,
    resolver: &P,
    random: &mut R,
    progress: &ProgressReporter,
) -> Result<Diagram>
where
    P: PaletteResolver + ?Sized,
    R: RandomSource + ?Sized,
{
    let strategy = BruteForce::new(config.search_bound, config.width, config.height);
    generate_with_strategy(config, resolver, random, &strategy, progress)
}

/// Render a diagram with a caller-supplied nearest-site strategy
///
/// All validation, including palette resolution, completes before the first
/// random draw.
///
/// # Errors
///
/// Returns an error if the configuration or palette names are invalid, or if the
/// strategy leaves a pixel unassigned
pub fn generate_with_strategy<P, R, S>(
    config: &DiagramConfig,
    resolver: &P,
    random: &mut R,
    strategy: &S,
    progress: &ProgressReporter,
) -> Result<Diagram>
where
    P: PaletteResolver + ?Sized,
    R: RandomSource + ?Sized,
    S: NearestSite + ?Sized,
{
    config.validate()?;

    let palette1 = Palette::resolve(resolver, "color_map1", &config.color_map1)?;
    let palette2 = Palette::resolve(resolver, "color_map2", &config.color_map2)?;
    let generator = SiteGenerator::new(palette1, palette2);

    let site_bar = progress.stage("sites", config.num_cells as u64);
    let sites = generator.generate(config, random, &site_bar)?;

    let row_bar = progress.stage("rows", u64::from(config.height));
    let canvas = rasterize(&sites, config.width, config.height, strategy, &row_bar)?;

    Ok(Diagram { sites, canvas })
}
