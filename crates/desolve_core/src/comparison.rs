use crate::methods::Method;
use crate::problem::exact;
use crate::sampling::{linspace, step_size};
use anyhow::{bail, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Validated numeric inputs for one redraw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    pub x0: f64,
    pub y0: f64,
    pub xf: f64,
    /// Number of grid points, including both endpoints.
    pub steps: usize,
}

impl Default for ComparisonRequest {
    fn default() -> Self {
        Self {
            x0: 1.0,
            y0: 1.0,
            xf: 10.3,
            steps: 21,
        }
    }
}

/// One method's approximations on the grid and its pointwise errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodSeries {
    pub method: Method,
    pub values: Vec<f64>,
    /// `exact[i] - values[i]`
    pub errors: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodSummary {
    pub method: Method,
    pub label: &'static str,
    pub order: u32,
    pub final_value: f64,
    pub final_error: f64,
    pub max_abs_error: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub request: ComparisonRequest,
    pub step_size: f64,
    pub xs: Vec<f64>,
    pub exact: Vec<f64>,
    /// In [`Method::ALL`] order.
    pub series: Vec<MethodSeries>,
}

impl Comparison {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn series(&self, method: Method) -> &MethodSeries {
        &self.series[method as usize]
    }

    pub fn values(&self, method: Method) -> &[f64] {
        &self.series(method).values
    }

    pub fn errors(&self, method: Method) -> &[f64] {
        &self.series(method).errors
    }

    /// Abscissa of the error plot: the grid index of every point.
    pub fn error_steps(&self) -> Vec<f64> {
        (0..self.len()).map(|i| i as f64).collect()
    }

    /// Largest finite `|error|`, or `None` when no entry is finite.
    pub fn max_abs_error(&self, method: Method) -> Option<f64> {
        self.errors(method)
            .iter()
            .map(|e| e.abs())
            .filter(|e| e.is_finite())
            .fold(None, |acc: Option<f64>, e| Some(acc.map_or(e, |m| m.max(e))))
    }

    /// Last value of each method followed by the last exact value.
    pub fn final_values(&self) -> Vec<f64> {
        self.series
            .iter()
            .map(|s| s.values.last().copied().unwrap_or(self.request.y0))
            .chain(self.exact.last().copied())
            .collect()
    }

    pub fn summary(&self) -> Vec<MethodSummary> {
        self.series
            .iter()
            .map(|s| MethodSummary {
                method: s.method,
                label: s.method.label(),
                order: s.method.order(),
                final_value: s.values.last().copied().unwrap_or(self.request.y0),
                final_error: s.errors.last().copied().unwrap_or(0.0),
                max_abs_error: self.max_abs_error(s.method),
            })
            .collect()
    }
}

/// Samples every method and the exact solution on the `steps`-point grid
/// over `[x0, xf]`.
///
/// Point 0 of every sequence is `y0`. Every later point integrates afresh
/// from `(x0, y0)` with `h = (xf - x0) / (steps - 1)`.
pub fn compare(request: &ComparisonRequest) -> Result<Comparison> {
    let ComparisonRequest { x0, y0, xf, steps } = *request;
    if !(x0.is_finite() && y0.is_finite() && xf.is_finite()) {
        bail!("Initial values and end point must be finite.");
    }
    if steps < 2 {
        bail!("Number of steps must be at least 2.");
    }
    if xf == x0 {
        bail!("End point X must differ from X0.");
    }

    let h = step_size(x0, xf, steps);
    debug!("comparing methods on [{x0}, {xf}] with {steps} points, h = {h}");

    let xs = linspace(x0, xf, steps);
    let mut exact_values = Vec::with_capacity(steps);
    exact_values.push(y0);
    exact_values.extend(xs[1..].iter().map(|&x| exact(x)));

    let series: Vec<MethodSeries> = Method::ALL
        .into_iter()
        .map(|method| {
            let mut values = Vec::with_capacity(steps);
            values.push(y0);
            values.extend(xs[1..].iter().map(|&x| method.integrate(x0, y0, h, x)));
            let errors = exact_values
                .iter()
                .zip(&values)
                .map(|(e, v)| e - v)
                .collect();
            MethodSeries {
                method,
                values,
                errors,
            }
        })
        .collect();

    for s in &series {
        if let Some(i) = s.values.iter().position(|v| !v.is_finite()) {
            warn!(
                "{} produced a non-finite value at x = {} (point {i})",
                s.method, xs[i]
            );
        }
    }
    if exact_values.iter().any(|v| !v.is_finite()) {
        warn!("exact solution is singular on [{x0}, {xf}]");
    }

    Ok(Comparison {
        request: *request,
        step_size: h,
        xs,
        exact: exact_values,
        series,
    })
}
