//! Drawing surface contract, a recording implementation for tests, and the
//! canvas-backed implementation for the browser

mod canvas;
mod surface;
mod recording;

pub use canvas::{CanvasSurface, CanvasText};
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{LineJoin, Surface};
