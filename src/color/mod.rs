//! Named color gradients and the palettes sampled from them

/// Sequential and diverging schemes by Cynthia Brewer
pub mod brewer;
/// Palette type, resolver trait and channel conversion
pub mod palette;
/// Perceptually uniform colormaps
pub mod perceptual;
/// Scheme type and lookup across every built-in table
pub mod scheme;

pub use palette::{Palette, PaletteResolver, SchemeResolver};

/// 8-bit RGB color
pub type Rgb = [u8; 3];
