//! Voronoi diagram generation
//!
//! Sites are sampled first and then every pixel takes the color of its nearest site.

/// In-memory pixel grid
pub mod canvas;
/// Diagram parameters and validation
pub mod config;
/// Nearest-site search and parallel rasterization
pub mod raster;
/// End-to-end diagram rendering
pub mod render;
/// Site sampling and palette assignment
pub mod sites;

pub use canvas::Canvas;
pub use config::DiagramConfig;
pub use raster::{BruteForce, NearestSite, SearchBound};
pub use sites::Site;
