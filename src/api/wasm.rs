//! Browser entry points beyond the effect handle itself

use wasm_bindgen::prelude::*;

use crate::domain::{Lineup, Tuning};

pub use crate::simulation::{EffectHandle, FrameStats};

/// Effect descriptors for the page: kind, container selector, pause delay
#[wasm_bindgen]
pub fn lineup_json() -> Result<String, JsValue> {
    Lineup::default()
        .to_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Every tunable constant with its default, as a template for overrides
#[wasm_bindgen]
pub fn default_tuning_json() -> Result<String, JsValue> {
    Tuning::default()
        .to_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check a tuning bundle without mounting anything
#[wasm_bindgen]
pub fn validate_tuning(json: &str) -> Result<(), JsValue> {
    Tuning::from_json(json)
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Toggle FPS reports in the console
#[wasm_bindgen]
pub fn set_debug(enabled: bool) {
    crate::core::utils::console::set_debug(enabled);
}
