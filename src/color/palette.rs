//! Palette resolution from named gradients and conversion to 8-bit colors

use crate::color::Rgb;
use crate::color::scheme;
use crate::io::configuration::{CHANNEL_SCALE, PALETTE_SIZE};
use crate::io::error::{DiagramError, Result, invalid_parameter};

/// Suffix selecting the reversed version of a gradient
const REVERSED_SUFFIX: &str = "_r";

/// Turns a gradient name into an ordered sequence of unit RGB triples
pub trait PaletteResolver {
    /// Sample `count` colors from the gradient called `name`
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a known gradient
    fn resolve(&self, name: &str, count: usize) -> Result<Vec<[f64; 3]>>;
}

/// Resolver backed by the built-in Brewer and perceptual schemes
///
/// Accepts every name in [`scheme::all`], optionally suffixed with `_r`
/// for the reversed gradient. Names are case-sensitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemeResolver;

impl SchemeResolver {
    /// Names this resolver accepts, excluding reversed variants
    pub fn names() -> impl Iterator<Item = &'static str> {
        scheme::all().map(|gradient| gradient.name)
    }
}

impl PaletteResolver for SchemeResolver {
    fn resolve(&self, name: &str, count: usize) -> Result<Vec<[f64; 3]>> {
        let (base, reversed) = name
            .strip_suffix(REVERSED_SUFFIX)
            .map_or((name, false), |base| (base, true));

        let gradient = scheme::find(base).ok_or_else(|| {
            invalid_parameter(
                "color_map",
                &name,
                &format!(
                    "unknown color map, expected one of: {}",
                    Self::names().collect::<Vec<_>>().join(", ")
                ),
            )
        })?;

        let mut anchors: Vec<[f64; 3]> =
            gradient.anchors.iter().map(|&c| scheme::unpack(c)).collect();
        if reversed {
            anchors.reverse();
        }

        Ok(sample_gradient(&anchors, count))
    }
}

/// Sample `count` evenly spaced colors along a piecewise-linear gradient
///
/// Entry `j` lies at `j / (count - 1)` along the gradient, so the first and last
/// entries equal the first and last anchors.
pub fn sample_gradient(anchors: &[[f64; 3]], count: usize) -> Vec<[f64; 3]> {
    let (Some(&first), Some(&last)) = (anchors.first(), anchors.last()) else {
        return Vec::new();
    };
    if anchors.len() == 1 || count == 1 {
        return vec![first; count];
    }

    let segments = anchors.len() - 1;
    (0..count)
        .map(|j| {
            let t = j as f64 / (count - 1) as f64;
            let position = t * segments as f64;
            let segment = (position.floor() as usize).min(segments - 1);
            let frac = position - segment as f64;

            match (anchors.get(segment), anchors.get(segment + 1)) {
                (Some(lo), Some(hi)) => [
                    (hi[0] - lo[0]).mul_add(frac, lo[0]),
                    (hi[1] - lo[1]).mul_add(frac, lo[1]),
                    (hi[2] - lo[2]).mul_add(frac, lo[2]),
                ],
                _ => last,
            }
        })
        .collect()
}

/// Convert a unit channel value to 8 bits as `floor(channel * 256)`
///
/// A channel of exactly 1.0 would scale to 256 and is clamped to 255.
pub fn scale_channel(channel: f64) -> u8 {
    (channel * CHANNEL_SCALE).floor().clamp(0.0, 255.0) as u8
}

/// Convert a unit RGB triple to 8-bit color
pub fn to_rgb(color: [f64; 3]) -> Rgb {
    [
        scale_channel(color[0]),
        scale_channel(color[1]),
        scale_channel(color[2]),
    ]
}

/// Immutable palette of exactly [`PALETTE_SIZE`] unit RGB triples
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    name: String,
    colors: Vec<[f64; 3]>,
}

impl Palette {
    /// Build a palette, rejecting anything but [`PALETTE_SIZE`] finite unit colors
    ///
    /// # Errors
    ///
    /// Returns an error if the color count is wrong or a channel is outside `[0, 1]`
    pub fn new(parameter: &'static str, name: &str, colors: Vec<[f64; 3]>) -> Result<Self> {
        if colors.len() != PALETTE_SIZE {
            return Err(invalid_parameter(
                parameter,
                &name,
                &format!(
                    "color map yields {} entries, expected {PALETTE_SIZE}",
                    colors.len()
                ),
            ));
        }

        if let Some(index) = colors
            .iter()
            .position(|color| color.iter().any(|c| !(0.0..=1.0).contains(c)))
        {
            return Err(invalid_parameter(
                parameter,
                &name,
                &format!("color map entry {index} has a channel outside [0, 1]"),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            colors,
        })
    }

    /// Resolve `name` through `resolver` into a validated palette
    ///
    /// `parameter` names the configuration field the name came from, for error messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolver rejects the name or yields a malformed palette
    pub fn resolve<P>(resolver: &P, parameter: &'static str, name: &str) -> Result<Self>
    where
        P: PaletteResolver + ?Sized,
    {
        let colors = resolver.resolve(name, PALETTE_SIZE).map_err(|err| match err {
            DiagramError::InvalidParameter { value, reason, .. } => {
                DiagramError::InvalidParameter {
                    parameter,
                    value,
                    reason,
                }
            }
            other => other,
        })?;
        Self::new(parameter, name, colors)
    }

    /// Gradient name this palette was resolved from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All colors in gradient order
    pub fn colors(&self) -> &[[f64; 3]] {
        &self.colors
    }

    /// Unit color at `index`
    pub fn get(&self, index: usize) -> Option<[f64; 3]> {
        self.colors.get(index).copied()
    }

    /// 8-bit color at `index`
    pub fn rgb(&self, index: usize) -> Option<Rgb> {
        self.get(index).map(to_rgb)
    }
}
