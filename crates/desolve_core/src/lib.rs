pub mod chart;
pub mod comparison;
pub mod input;
pub mod methods;
pub mod problem;
pub mod sampling;
pub mod solvers;
/// The `desolve_core` crate integrates the initial value problem
/// `y' = y²/x² − 2, y(x0) = y0` with three fixed-step methods and compares
/// them against the closed-form solution.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `DynamicalSystem` (ODEs), `Steppable` (Solvers).
/// - **Problem**: the right-hand side `f`, the exact solution and the `RiccatiIvp` system.
/// - **Solvers**: Euler, Improved Euler (Heun) and RK4 steppers.
/// - **Methods**: scalar `euler`, `euler_imp`, `runge_kutta` entry points sharing one step count.
/// - **Comparison**: sampled solution and error sequences on an evenly spaced grid.
/// - **Chart**: axis ranges, titles and legend for the solution and error charts.
/// - **Input**: parsing and validation of the four form fields.
pub mod traits;

pub use comparison::{compare, Comparison, ComparisonRequest};
pub use input::{FormInputs, InputError};
pub use methods::Method;
