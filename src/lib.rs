//! Raster Voronoi diagrams from Gaussian-sampled sites
//!
//! Sites are drawn from two independent normal distributions and colored from two
//! alternating named gradients. Every pixel then takes the color of its nearest site.

#![forbid(unsafe_code)]

/// Named gradients, palettes and channel conversion
pub mod color;
/// Site generation, nearest-site search and rendering
pub mod diagram;
/// Input/output operations and error handling
pub mod io;
/// Distance metric and random sources
pub mod math;

pub use io::error::{DiagramError, Result};
