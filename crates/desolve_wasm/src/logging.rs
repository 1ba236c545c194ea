//! Forwards `log` records from the core crate to the browser console.

use log::{Level, LevelFilter};
use wasm_bindgen::prelude::*;

/// Installs the panic hook and the console logger. Safe to call repeatedly.
pub(crate) fn init() {
    console_error_panic_hook::set_once();
    // Only the first call installs the logger; the level is left alone afterwards.
    let _ = console_log::init_with_level(Level::Info);
}

/// Sets the console verbosity: "off", "error", "warn", "info", "debug" or "trace".
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    init();
    let filter: LevelFilter = level
        .trim()
        .parse()
        .map_err(|_| JsValue::from_str(&format!("Unknown log level \"{}\"", level)))?;
    log::set_max_level(filter);
    Ok(())
}
