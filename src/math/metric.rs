/// Euclidean distance between a site position and a pixel
///
/// Differences are taken in `f64` so extreme site coordinates cannot overflow.
pub fn euclidean(site: [i32; 2], pixel: [u32; 2]) -> f64 {
    let dx = f64::from(site[0]) - f64::from(pixel[0]);
    let dy = f64::from(site[1]) - f64::from(pixel[1]);
    dx.hypot(dy)
}

/// Length of the canvas diagonal, `hypot(width - 1, height - 1)`
pub fn canvas_diagonal(width: u32, height: u32) -> f64 {
    let w = f64::from(width.saturating_sub(1));
    let h = f64::from(height.saturating_sub(1));
    w.hypot(h)
}

/// Convert a sampled coordinate to a pixel coordinate by truncating toward zero
///
/// Values beyond the `i32` range saturate and NaN maps to zero.
pub fn truncate_coordinate(value: f64) -> i32 {
    value.trunc() as i32
}
