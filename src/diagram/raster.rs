//! Nearest-site search and parallel rasterization
//!
//! Every pixel is independent given the immutable site list, so rows are
//! assigned in parallel with one writer per row. Within a pixel, sites are
//! scanned in generation order with a strict `<`, so the earliest of several
//! equidistant sites wins regardless of how rows are scheduled.

use crate::diagram::canvas::Canvas;
use crate::diagram::sites::Site;
use crate::io::error::{DiagramError, Result};
use crate::math::metric::{canvas_diagonal, euclidean};
use indicatif::ProgressBar;
use ndarray::Axis;
use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};

/// Initial best distance of the nearest-site search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchBound {
    /// Seed with the canvas diagonal `hypot(width - 1, height - 1)`
    ///
    /// A site farther than the diagonal from a pixel can never be chosen for it,
    /// even when it is the closest one. A pixel with no site inside the diagonal
    /// fails with [`DiagramError::NoSiteFound`].
    #[default]
    Diagonal,
    /// Seed with infinity so the closest site always wins
    Unbounded,
}

impl SearchBound {
    /// Starting best distance for a `width x height` canvas
    pub fn initial_distance(self, width: u32, height: u32) -> f64 {
        match self {
            Self::Diagonal => canvas_diagonal(width, height),
            Self::Unbounded => f64::INFINITY,
        }
    }
}

/// Strategy answering "which site is nearest to this pixel"
///
/// Implementations are shared across rayon workers.
pub trait NearestSite: Sync {
    /// Index into `sites` of the nearest site, or `None` if no site qualifies
    fn nearest(&self, sites: &[Site], pixel: [u32; 2]) -> Option<usize>;
}

/// Exact linear scan over every site
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BruteForce {
    initial_distance: f64,
}

impl BruteForce {
    /// Create a scan seeded according to `bound` for a `width x height` canvas
    pub fn new(bound: SearchBound, width: u32, height: u32) -> Self {
        Self {
            initial_distance: bound.initial_distance(width, height),
        }
    }

    /// Distance a site must beat to be selected
    pub const fn initial_distance(&self) -> f64 {
        self.initial_distance
    }
}

impl NearestSite for BruteForce {
    fn nearest(&self, sites: &[Site], pixel: [u32; 2]) -> Option<usize> {
        let mut best_distance = self.initial_distance;
        let mut best_index = None;

        for (index, site) in sites.iter().enumerate() {
            let distance = euclidean(site.position, pixel);
            if distance < best_distance {
                best_distance = distance;
                best_index = Some(index);
            }
        }

        best_index
    }
}

/// Fill a `width x height` canvas with the color of each pixel's nearest site
///
/// `progress` advances once per completed row.
///
/// # Errors
///
/// Returns [`DiagramError::NoSiteFound`] for a pixel the strategy cannot assign
pub fn rasterize<S>(
    sites: &[Site],
    width: u32,
    height: u32,
    strategy: &S,
    progress: &ProgressBar,
) -> Result<Canvas>
where
    S: NearestSite + ?Sized,
{
    let mut canvas = Canvas::new(width, height);

    canvas
        .pixels_mut()
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .try_for_each(|(row, mut pixels)| {
            let y = row as u32;
            for (col, pixel) in pixels.iter_mut().enumerate() {
                let x = col as u32;
                let site = strategy
                    .nearest(sites, [x, y])
                    .and_then(|index| sites.get(index))
                    .ok_or(DiagramError::NoSiteFound { x, y })?;
                *pixel = site.color;
            }
            progress.inc(1);
            Ok::<(), DiagramError>(())
        })?;

    progress.finish();
    Ok(canvas)
}
