//! The initial value problem `y' = y²/x² − 2` and its closed-form solution.

use crate::traits::{DynamicalSystem, Scalar};

/// Right-hand side `f(x, y) = y²/x² − 2`.
///
/// Singular at `x = 0`; the resulting infinity or NaN is returned as is.
pub fn f(x: f64, y: f64) -> f64 {
    rhs(x, y)
}

/// Exact solution through `(1, 1)`: `x·(−1 + 3/(1 + 0.5x³))`.
///
/// Blows up at `x = −2^(1/3)`.
pub fn exact(x: f64) -> f64 {
    x * (-1.0 + 3.0 / (1.0 + 0.5 * x.powi(3)))
}

fn rhs<T: Scalar>(x: T, y: T) -> T {
    y * y / (x * x) - T::constant(2.0)
}

/// The equation as a one-dimensional flow, with `x` playing the role of time.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiccatiIvp;

impl<T: Scalar> DynamicalSystem<T> for RiccatiIvp {
    fn dimension(&self) -> usize {
        1
    }

    fn apply(&self, t: T, x: &[T], out: &mut [T]) {
        out[0] = rhs(t, x[0]);
    }
}
