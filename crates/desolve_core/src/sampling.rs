/// `n` evenly spaced points from `start` to `end` inclusive.
///
/// Point `i` is `start + i * (end - start) / (n - 1)`; the last point is pinned
/// to `end`. `n == 1` yields `[start]` and `n == 0` an empty vector.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = step_size(start, end, n);
            let mut points: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            points[n - 1] = end;
            points
        }
    }
}

/// Spacing of an `n`-point grid over `[x0, xf]`: `(xf - x0) / (n - 1)`.
///
/// Not meaningful for `n < 2`.
pub fn step_size(x0: f64, xf: f64, n: usize) -> f64 {
    (xf - x0) / (n as f64 - 1.0)
}
