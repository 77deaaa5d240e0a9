//! PNG export of a rendered canvas

use crate::diagram::Canvas;
use crate::io::error::{DiagramError, Result};
use image::ImageFormat;
use std::path::Path;

/// Destination that persists a finished canvas
pub trait ImageSink {
    /// Write `canvas` to `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot be encoded or written
    fn write(&self, canvas: &Canvas, path: &Path) -> Result<()>;
}

/// Writes 8-bit RGB PNG files, creating missing parent directories
#[derive(Debug, Clone, Copy, Default)]
pub struct PngSink;

impl ImageSink for PngSink {
    fn write(&self, canvas: &Canvas, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| DiagramError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        canvas
            .to_image()
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| DiagramError::ImageExport {
                path: path.to_path_buf(),
                source: e,
            })
    }
}
