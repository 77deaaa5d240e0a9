//! Site sampling from two Gaussian distributions with alternating palettes

use crate::color::{Palette, Rgb};
use crate::diagram::config::DiagramConfig;
use crate::io::configuration::{MAX_NUM_CELLS, PALETTE_SIZE};
use crate::io::error::{Result, computation_error};
use crate::math::metric::truncate_coordinate;
use crate::math::random::RandomSource;
use indicatif::ProgressBar;

/// Seed point of one Voronoi cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    /// Pixel coordinates `[x, y]`, possibly outside the canvas
    pub position: [i32; 2],
    /// Color painted into every pixel of this cell
    pub color: Rgb,
    /// Generation order, starting at zero
    pub index: usize,
}

impl Site {
    /// Create a site
    pub const fn new(position: [i32; 2], color: Rgb, index: usize) -> Self {
        Self {
            position,
            color,
            index,
        }
    }
}

/// Samples sites, coloring even indices from the first palette and odd from the second
pub struct SiteGenerator {
    palettes: [Palette; 2],
}

impl SiteGenerator {
    /// Create a generator over two resolved palettes
    pub const fn new(palette1: Palette, palette2: Palette) -> Self {
        Self {
            palettes: [palette1, palette2],
        }
    }

    /// Palette used for the site with the given index
    pub fn palette_for(&self, index: usize) -> &Palette {
        let [even, odd] = &self.palettes;
        if index % 2 == 0 { even } else { odd }
    }

    /// Generate `config.num_cells` sites
    ///
    /// Each site draws, in order, its x coordinate, its y coordinate and a palette
    /// entry. Coordinates are truncated toward zero and never clamped to the canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the random source picks an index outside the palette
    pub fn generate<R>(
        &self,
        config: &DiagramConfig,
        random: &mut R,
        progress: &ProgressBar,
    ) -> Result<Vec<Site>>
    where
        R: RandomSource + ?Sized,
    {
        let mut sites = Vec::with_capacity(config.num_cells.min(MAX_NUM_CELLS));

        for index in 0..config.num_cells {
            let x = truncate_coordinate(random.gaussian(config.mean_x, config.stdv_x));
            let y = truncate_coordinate(random.gaussian(config.mean_y, config.stdv_y));

            let palette = self.palette_for(index);
            let entry = random.uniform_index(PALETTE_SIZE);
            let color = palette.rgb(entry).ok_or_else(|| {
                computation_error(
                    "site color selection",
                    &format!("palette '{}' has no entry {entry}", palette.name()),
                )
            })?;

            sites.push(Site::new([x, y], color, index));
            progress.inc(1);
        }

        progress.finish();
        Ok(sites)
    }
}
