//! Axis ranges, titles and legend for the two stacked charts.

use crate::comparison::Comparison;
use crate::methods::Method;
use serde::Serialize;

pub const SOLUTION_TITLE: &str = "Solutions of DE y' = y²/x² − 2";
pub const ERROR_TITLE: &str = "Errors";
pub const EXACT_LABEL: &str = "Exact solution of IVP";

/// Padding added around the data on the solution chart.
const AXIS_MARGIN: f64 = 1.0;
/// The error chart always spans `[-1, 1]` vertically.
const ERROR_RANGE: (f64, f64) = (-1.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dotted,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    pub label: &'static str,
    /// `None` for the exact solution.
    pub method: Option<Method>,
    pub style: LineStyle,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: &'static str,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub curves: Vec<Curve>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub solutions: Panel,
    pub errors: Panel,
    /// Legend entries, shared by both panels.
    pub legend: Vec<&'static str>,
}

impl ChartLayout {
    pub fn for_comparison(comparison: &Comparison) -> Self {
        let request = comparison.request;
        let solutions = Panel {
            title: SOLUTION_TITLE,
            x_range: (request.x0 - AXIS_MARGIN, request.xf + AXIS_MARGIN),
            y_range: solution_y_range(comparison),
            curves: solution_curves(),
        };
        let errors = Panel {
            title: ERROR_TITLE,
            x_range: (0.0, comparison.len() as f64),
            y_range: ERROR_RANGE,
            curves: Method::ALL
                .into_iter()
                .map(|method| Curve {
                    label: method.label(),
                    method: Some(method),
                    style: LineStyle::Solid,
                    width: 1.0,
                })
                .collect(),
        };
        let legend = solutions.curves.iter().map(|c| c.label).collect();
        Self {
            solutions,
            errors,
            legend,
        }
    }
}

fn solution_curves() -> Vec<Curve> {
    let mut curves: Vec<Curve> = Method::ALL
        .into_iter()
        .map(|method| Curve {
            label: method.label(),
            method: Some(method),
            style: LineStyle::Dotted,
            width: if method == Method::ImprovedEuler { 1.0 } else { 2.0 },
        })
        .collect();
    curves.push(Curve {
        label: EXACT_LABEL,
        method: None,
        style: LineStyle::Solid,
        width: 1.0,
    });
    curves
}

/// From the lowest finite final value of the four curves down one unit, up to
/// `y0 + 1`.
fn solution_y_range(comparison: &Comparison) -> (f64, f64) {
    let y0 = comparison.request.y0;
    let lowest = comparison
        .final_values()
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(f64::INFINITY, f64::min);
    let bottom = if lowest.is_finite() {
        lowest - AXIS_MARGIN
    } else {
        y0 - AXIS_MARGIN
    };
    (bottom, y0 + AXIS_MARGIN)
}

#[cfg(test)]
mod tests {
    use super::{ChartLayout, LineStyle, ERROR_TITLE, EXACT_LABEL, SOLUTION_TITLE};
    use crate::comparison::{compare, ComparisonRequest};
    use crate::methods::Method;

    #[test]
    fn default_layout_matches_axis_rules() {
        let comparison = compare(&ComparisonRequest::default()).unwrap();
        let layout = ChartLayout::for_comparison(&comparison);

        assert_eq!(layout.solutions.title, SOLUTION_TITLE);
        assert_eq!(layout.solutions.x_range, (0.0, 11.3));
        let lowest = comparison
            .final_values()
            .into_iter()
            .fold(f64::INFINITY, f64::min);
        assert_eq!(layout.solutions.y_range, (lowest - 1.0, 2.0));
        // Euler overshoots downwards the most on this grid.
        assert_eq!(lowest, *comparison.values(Method::Euler).last().unwrap());

        assert_eq!(layout.errors.title, ERROR_TITLE);
        assert_eq!(layout.errors.x_range, (0.0, 21.0));
        assert_eq!(layout.errors.y_range, (-1.0, 1.0));
    }

    #[test]
    fn legend_lists_methods_then_exact() {
        let comparison = compare(&ComparisonRequest::default()).unwrap();
        let layout = ChartLayout::for_comparison(&comparison);
        assert_eq!(
            layout.legend,
            vec![
                "Euler Method",
                "Improved Euler Method",
                "Runge-Kutta Method",
                EXACT_LABEL
            ]
        );
        let exact = layout.solutions.curves.last().unwrap();
        assert_eq!(exact.method, None);
        assert_eq!(exact.style, LineStyle::Solid);
        assert!(layout.solutions.curves[..3]
            .iter()
            .all(|c| c.style == LineStyle::Dotted));
        assert_eq!(layout.errors.curves.len(), 3);
    }

    #[test]
    fn non_finite_final_values_are_skipped() {
        let comparison = compare(&ComparisonRequest {
            x0: -1.0,
            y0: 1.0,
            xf: 1.0,
            steps: 3,
        })
        .unwrap();
        let finals = comparison.final_values();
        assert!(finals[..3].iter().all(|v| !v.is_finite()));
        // Only exact(1) = 1 is left.
        let layout = ChartLayout::for_comparison(&comparison);
        assert_eq!(layout.solutions.y_range, (0.0, 2.0));
        assert_eq!(layout.solutions.x_range, (-2.0, 2.0));
    }
}
