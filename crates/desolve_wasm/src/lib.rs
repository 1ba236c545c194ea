//! `wasm-bindgen` bridge between `desolve_core` and the browser front-end in `web/`.
//!
//! The page reads its four text fields, builds a [`WasmComparison`] and draws
//! the returned arrays; all numerics and validation happen here.

mod comparison;
mod logging;

pub use comparison::{default_inputs, form_labels, WasmComparison};
pub use logging::set_log_level;
