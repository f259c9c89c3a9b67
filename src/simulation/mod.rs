//! Simulation - the frame loop and the effects it drives
//!
//! - `context`  - per-frame clock, canvas size and pointer state
//! - `effects`  - the seven page effects behind the `Effect` trait
//! - `render`   - the `Surface` drawing contract and its implementations
//! - `sketch`   - running/paused loop around one effect
//! - `facade`   - wasm-exported handle binding a sketch to a canvas

pub mod context;
pub mod effects;
pub mod render;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/frame_stats.rs"]
mod frame_stats;
#[path = "perf/fps.rs"]
mod fps;
#[path = "sketch/sketch.rs"]
mod sketch;
mod facade;

pub use context::{FrameContext, PointerEvent, PointerState};
pub use effects::{create_effect, DrawTextPhase, Effect};
pub use facade::EffectHandle;
pub use fps::{classify, FpsMonitor, FpsReading};
pub use frame_stats::FrameStats;
pub use sketch::{LoopState, Sketch};

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
