//! Pixel grid filled by the raster assigner

use crate::color::Rgb;
use image::RgbImage;
use ndarray::Array2;

/// `width x height` grid of RGB pixels, stored row-major as `[y, x]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Array2<Rgb>,
}

impl Canvas {
    /// Create a black canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: Array2::from_elem((height as usize, width as usize), [0, 0, 0]),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.ncols() as u32
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.nrows() as u32
    }

    /// Color of the pixel at column `x`, row `y`
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.pixels.get([y as usize, x as usize]).copied()
    }

    /// Underlying `[row, col]` array
    pub const fn pixels(&self) -> &Array2<Rgb> {
        &self.pixels
    }

    /// Mutable access for the raster assigner
    pub(crate) const fn pixels_mut(&mut self) -> &mut Array2<Rgb> {
        &mut self.pixels
    }

    /// Copy into an image buffer for encoding
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width(), self.height(), |x, y| {
            image::Rgb(self.pixel(x, y).unwrap_or([0, 0, 0]))
        })
    }
}
