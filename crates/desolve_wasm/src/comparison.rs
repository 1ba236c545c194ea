//! Comparison wrapper handed to the web UI on every "draw plots" click.

use crate::logging::init;
use desolve_core::chart::ChartLayout;
use desolve_core::comparison::{compare, Comparison};
use desolve_core::input::FormInputs;
use desolve_core::methods::Method;
use js_sys::Float64Array;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmComparison {
    comparison: Comparison,
    layout: ChartLayout,
}

/// Form contents to pre-fill the inputs with.
#[wasm_bindgen]
pub fn default_inputs() -> Result<JsValue, JsValue> {
    to_value(&FormInputs::default())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[wasm_bindgen]
pub fn form_labels() -> Vec<String> {
    FormInputs::LABELS.iter().map(|s| s.to_string()).collect()
}

fn parse_method(key: &str) -> Result<Method, JsValue> {
    key.parse::<Method>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
impl WasmComparison {
    /// Builds the comparison from a `{ x0, y0, xf, steps }` object of strings.
    /// Missing fields take their defaults; `undefined` means all defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(inputs: JsValue) -> Result<WasmComparison, JsValue> {
        init();
        let form: FormInputs = if inputs.is_undefined() || inputs.is_null() {
            FormInputs::default()
        } else {
            from_value(inputs)
                .map_err(|e| JsValue::from_str(&format!("Invalid form payload: {}", e)))?
        };
        Self::from_form(&form)
            .map_err(|e| JsValue::from_str(&format!("Cannot draw plots: {}", e)))
    }

    /// Same as the constructor, with the four fields passed separately.
    pub fn from_fields(
        x0: &str,
        y0: &str,
        xf: &str,
        steps: &str,
    ) -> Result<WasmComparison, JsValue> {
        init();
        let form = FormInputs {
            x0: x0.to_string(),
            y0: y0.to_string(),
            xf: xf.to_string(),
            steps: steps.to_string(),
        };
        Self::from_form(&form)
            .map_err(|e| JsValue::from_str(&format!("Cannot draw plots: {}", e)))
    }

    pub fn len(&self) -> usize {
        self.comparison.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparison.is_empty()
    }

    pub fn step_size(&self) -> f64 {
        self.comparison.step_size
    }

    pub fn xs(&self) -> Float64Array {
        Float64Array::from(self.comparison.xs.as_slice())
    }

    pub fn exact(&self) -> Float64Array {
        Float64Array::from(self.comparison.exact.as_slice())
    }

    /// Approximations of one method, keyed "euler", "improved_euler" or "runge_kutta".
    pub fn values(&self, method: &str) -> Result<Float64Array, JsValue> {
        let method = parse_method(method)?;
        Ok(Float64Array::from(self.comparison.values(method)))
    }

    pub fn errors(&self, method: &str) -> Result<Float64Array, JsValue> {
        let method = parse_method(method)?;
        Ok(Float64Array::from(self.comparison.errors(method)))
    }

    pub fn error_steps(&self) -> Float64Array {
        Float64Array::from(self.comparison.error_steps().as_slice())
    }

    pub fn method_keys(&self) -> Vec<String> {
        Method::ALL.iter().map(|m| m.key().to_string()).collect()
    }

    pub fn layout(&self) -> Result<JsValue, JsValue> {
        to_value(&self.layout).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    pub fn summary(&self) -> Result<JsValue, JsValue> {
        to_value(&self.comparison.summary())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

impl WasmComparison {
    pub(crate) fn from_form(form: &FormInputs) -> anyhow::Result<Self> {
        let request = form.parse()?;
        let comparison = compare(&request)?;
        let layout = ChartLayout::for_comparison(&comparison);
        log::info!(
            "drew {} points on [{}, {}] with h = {}",
            comparison.len(),
            request.x0,
            request.xf,
            comparison.step_size
        );
        Ok(Self { comparison, layout })
    }
}
