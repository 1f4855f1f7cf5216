//! Dense numeric grids for sampling and visualization.

/// Evenly spaced samples from `start` to `stop` inclusive.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Depth of the simplified curvature surface `-rs / sqrt(x^2 + y^2 + rs^2)`
/// at a grid point. Always in `[-1, 0)` for positive `rs`.
pub fn curvature_height(x: f64, y: f64, rs_m: f64) -> f64 {
    -rs_m / (x * x + y * y + rs_m * rs_m).sqrt()
}
