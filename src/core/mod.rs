//! Core helpers shared by every effect
//!
//! - utils/    - console logging macros
//! - math      - 2D vector and point distance
//! - random    - explicit xorshift32 source
//! - easing    - cubic-bezier timing curves

#[macro_use]
pub mod utils;
pub mod math;
pub mod random;
pub mod easing;
