//! Folio Effects - canvas particle effects for the portfolio page in WASM
//!
//! Architecture:
//! - core/        - math, random numbers, easing, console logging
//! - domain/      - colours, tuning tables, effect lineup, errors
//! - systems/     - particle variants, particle pool, word rasterizer
//! - simulation/  - frame loop, effects, drawing surfaces
//! - api/         - browser entry points

// Logging macros must be defined before the modules that use them
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Install the panic hook and announce the module
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("folio-effects {} initialized", env!("CARGO_PKG_VERSION"));
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub use api::wasm::{EffectHandle, FrameStats};
pub use domain::{EffectKind, Lineup, Tuning};
pub use simulation::{create_effect, Effect, LoopState, Sketch};
