//! Scalar entry points for the three fixed-step methods applied to
//! [`RiccatiIvp`](crate::problem::RiccatiIvp).
//!
//! Each function starts from `(x, y)` and returns the approximation of
//! `y(X)` after [`step_count`] steps of size `h`. Nothing is validated:
//! singular points of the equation yield inf/NaN which is returned as is.

use crate::problem::RiccatiIvp;
use crate::solvers::{Euler, ImprovedEuler, RK4};
use crate::traits::Steppable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Relative slack used when deciding whether `(X - x) / h` is a whole number.
pub const STEP_SNAP_TOLERANCE: f64 = 1e-9;

/// Number of steps of size `h` needed for `x` to reach `target`.
///
/// This is `ceil((target - x) / h)`, except that quotients within
/// [`STEP_SNAP_TOLERANCE`] of an integer are snapped to it, so that all
/// methods agree on grids built from `(xf - x0) / (n - 1)`. A negative `h`
/// walks towards a `target` below `x`. Returns 0 when the quotient is not
/// positive or any input is not finite.
pub fn step_count(x: f64, h: f64, target: f64) -> usize {
    if !(x.is_finite() && h.is_finite() && target.is_finite()) {
        return 0;
    }
    let ratio = (target - x) / h;
    if !(ratio.is_finite() && ratio > 0.0) {
        return 0;
    }
    let nearest = ratio.round();
    let steps = if (ratio - nearest).abs() <= STEP_SNAP_TOLERANCE * nearest.max(1.0) {
        nearest
    } else {
        ratio.ceil()
    };
    steps as usize
}

/// [`step_count`] for methods that only advance while `x < target`.
fn forward_step_count(x: f64, h: f64, target: f64) -> usize {
    if target > x {
        step_count(x, h, target)
    } else {
        0
    }
}

fn advance(mut stepper: impl Steppable<f64>, x: f64, y: f64, h: f64, steps: usize) -> f64 {
    let mut t = x;
    let mut state = [y];
    for _ in 0..steps {
        stepper.step(&RiccatiIvp, &mut t, &mut state, h);
    }
    state[0]
}

/// Forward Euler from `(x, y)` to `target`. Returns `y` when `target <= x`.
pub fn euler(x: f64, y: f64, h: f64, target: f64) -> f64 {
    advance(Euler::new(1), x, y, h, forward_step_count(x, h, target))
}

/// Improved Euler (Heun) from `(x, y)` to `target`. Returns `y` when `target <= x`.
pub fn euler_imp(x: f64, y: f64, h: f64, target: f64) -> f64 {
    advance(ImprovedEuler::new(1), x, y, h, forward_step_count(x, h, target))
}

/// Classical fourth-order Runge-Kutta from `(x, y)` to `target`.
///
/// Integrates backwards when `target < x` and `h < 0`.
pub fn runge_kutta(x: f64, y: f64, h: f64, target: f64) -> f64 {
    advance(RK4::new(1), x, y, h, step_count(x, h, target))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Euler,
    ImprovedEuler,
    RungeKutta,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown method \"{0}\"; expected one of euler, improved_euler, runge_kutta")]
pub struct UnknownMethod(pub String);

impl Method {
    /// Plot order: Euler, Improved Euler, Runge-Kutta.
    pub const ALL: [Method; 3] = [Method::Euler, Method::ImprovedEuler, Method::RungeKutta];

    pub fn label(self) -> &'static str {
        match self {
            Method::Euler => "Euler Method",
            Method::ImprovedEuler => "Improved Euler Method",
            Method::RungeKutta => "Runge-Kutta Method",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::ImprovedEuler => "improved_euler",
            Method::RungeKutta => "runge_kutta",
        }
    }

    /// Global order of accuracy.
    pub fn order(self) -> u32 {
        match self {
            Method::Euler => 1,
            Method::ImprovedEuler => 2,
            Method::RungeKutta => 4,
        }
    }

    pub fn integrate(self, x: f64, y: f64, h: f64, target: f64) -> f64 {
        match self {
            Method::Euler => euler(x, y, h, target),
            Method::ImprovedEuler => euler_imp(x, y, h, target),
            Method::RungeKutta => runge_kutta(x, y, h, target),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.key() == s)
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}
