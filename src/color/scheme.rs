//! Named gradient anchors shared by every built-in color map table

use crate::color::{brewer, perceptual};

/// Shape of a gradient's lightness profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeKind {
    /// Lightness changes monotonically from the first anchor to the last
    Sequential,
    /// Two sequential ramps meeting at a light midpoint
    Diverging,
    /// Perceptually uniform ramp from dark to light
    Perceptual,
}

/// Anchors of one named gradient, as packed `0xRRGGBB` values
#[derive(Debug)]
pub struct Scheme {
    /// Scheme name as accepted on the command line
    pub name: &'static str,
    /// Lightness profile of the gradient
    pub kind: SchemeKind,
    /// Evenly spaced gradient anchors, first to last
    pub anchors: &'static [u32],
}

/// Every built-in scheme, Brewer tables first
pub fn all() -> impl Iterator<Item = &'static Scheme> {
    brewer::SCHEMES.iter().chain(perceptual::SCHEMES)
}

/// Look up a scheme by exact name
pub fn find(name: &str) -> Option<&'static Scheme> {
    all().find(|scheme| scheme.name == name)
}

/// Unpack a `0xRRGGBB` anchor into unit channel values
pub fn unpack(packed: u32) -> [f64; 3] {
    let [_, r, g, b] = packed.to_be_bytes();
    [
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    ]
}
