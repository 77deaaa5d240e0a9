// Default diagram parameters
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 3840;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 2160;
/// Default number of sites
pub const DEFAULT_NUM_CELLS: usize = 1024;
/// Default mean of the x-coordinate distribution
pub const DEFAULT_MEAN_X: f64 = 1280.0;
/// Default standard deviation of the x-coordinate distribution
pub const DEFAULT_STDV_X: f64 = 640.0;
/// Default mean of the y-coordinate distribution
pub const DEFAULT_MEAN_Y: f64 = 960.0;
/// Default standard deviation of the y-coordinate distribution
pub const DEFAULT_STDV_Y: f64 = 480.0;
/// Palette used for even-indexed sites
pub const DEFAULT_COLOR_MAP1: &str = "PuBuGn";
/// Palette used for odd-indexed sites
pub const DEFAULT_COLOR_MAP2: &str = "YlOrRd";

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Palette settings
/// Number of entries every resolved palette must contain
pub const PALETTE_SIZE: usize = 256;
/// Scale applied to a unit channel value before truncation to 8 bits
pub const CHANNEL_SCALE: f64 = 256.0;

// Safety limits to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: u32 = 10_000;
/// Maximum number of sites in one diagram
pub const MAX_NUM_CELLS: usize = 1_000_000;

// Output settings
/// File written when no output path is given
pub const DEFAULT_OUTPUT_FILE: &str = "Voronoi Diagram.png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
