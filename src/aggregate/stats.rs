//! Summary statistics over a dilation factor series.

/// Min, max, mean and sample standard deviation of a non-empty series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

/// Compute summary statistics. Returns `None` for an empty series. The
/// standard deviation uses the N-1 denominator; a single-value series
/// reports 0.0 so downstream charts stay renderable.
pub fn summarize(values: &[f64]) -> Option<SummaryStats> {
    if values.is_empty() {
        return None;
    }

    let n = values.len() as f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
        sum += v;
    }
    let mean = sum / n;

    let std_dev = if values.len() < 2 {
        0.0
    } else {
        let sum_sq: f64 = values.iter().map(|&v| (v - mean) * (v - mean)).sum();
        (sum_sq / (n - 1.0)).sqrt()
    };

    Some(SummaryStats {
        min,
        max,
        mean,
        std_dev,
    })
}

/// Round to 4 decimal digits, the precision of the printed summary.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
