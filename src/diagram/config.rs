//! Diagram parameters and their validation

use crate::diagram::raster::SearchBound;
use crate::io::configuration::{
    DEFAULT_COLOR_MAP1, DEFAULT_COLOR_MAP2, DEFAULT_HEIGHT, DEFAULT_MEAN_X, DEFAULT_MEAN_Y,
    DEFAULT_NUM_CELLS, DEFAULT_STDV_X, DEFAULT_STDV_Y, DEFAULT_WIDTH, MAX_CANVAS_DIMENSION,
    MAX_NUM_CELLS,
};
use crate::io::error::{Result, invalid_parameter};

/// Parameters of one diagram
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Number of sites
    pub num_cells: usize,
    /// Mean of the x-coordinate distribution
    pub mean_x: f64,
    /// Standard deviation of the x-coordinate distribution
    pub stdv_x: f64,
    /// Mean of the y-coordinate distribution
    pub mean_y: f64,
    /// Standard deviation of the y-coordinate distribution
    pub stdv_y: f64,
    /// Gradient for even-indexed sites
    pub color_map1: String,
    /// Gradient for odd-indexed sites
    pub color_map2: String,
    /// Initial best distance of the nearest-site search
    pub search_bound: SearchBound,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            num_cells: DEFAULT_NUM_CELLS,
            mean_x: DEFAULT_MEAN_X,
            stdv_x: DEFAULT_STDV_X,
            mean_y: DEFAULT_MEAN_Y,
            stdv_y: DEFAULT_STDV_Y,
            color_map1: DEFAULT_COLOR_MAP1.to_string(),
            color_map2: DEFAULT_COLOR_MAP2.to_string(),
            search_bound: SearchBound::default(),
        }
    }
}

impl DiagramConfig {
    /// Check every numeric parameter
    ///
    /// Palette names are checked when they are resolved, which also happens
    /// before any sites are generated.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid parameter
    pub fn validate(&self) -> Result<()> {
        validate_dimension("width", self.width)?;
        validate_dimension("height", self.height)?;

        if self.num_cells == 0 {
            return Err(invalid_parameter(
                "num_cells",
                &self.num_cells,
                &"at least one site is required",
            ));
        }
        if self.num_cells > MAX_NUM_CELLS {
            return Err(invalid_parameter(
                "num_cells",
                &self.num_cells,
                &format!("must not exceed {MAX_NUM_CELLS}"),
            ));
        }

        validate_mean("mean_x", self.mean_x)?;
        validate_mean("mean_y", self.mean_y)?;
        validate_std_dev("stdv_x", self.stdv_x)?;
        validate_std_dev("stdv_y", self.stdv_y)?;

        Ok(())
    }
}

fn validate_dimension(parameter: &'static str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    if value > MAX_CANVAS_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_CANVAS_DIMENSION}"),
        ));
    }
    Ok(())
}

fn validate_mean(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid_parameter(parameter, &value, &"must be finite"))
    }
}

fn validate_std_dev(parameter: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(invalid_parameter(parameter, &value, &"must be finite"));
    }
    if value < 0.0 {
        return Err(invalid_parameter(parameter, &value, &"must not be negative"));
    }
    Ok(())
}
