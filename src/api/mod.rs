//! Public API surface for JS hosts

pub mod wasm;
