use wasm_bindgen::prelude::*;

/// Timings of the last rendered frame
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub(super) update_ms: f64,
    pub(super) draw_ms: f64,
    pub(super) particle_count: u32,
    pub(super) frames: u32,
}

impl FrameStats {
    pub(crate) fn record(&mut self, update_ms: f64, draw_ms: f64, particle_count: usize) {
        self.update_ms = update_ms;
        self.draw_ms = draw_ms;
        self.particle_count = u32::try_from(particle_count).unwrap_or(u32::MAX);
        self.frames = self.frames.wrapping_add(1);
    }

    pub(crate) fn reset(&mut self) {
        *self = FrameStats::default();
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn update_ms(&self) -> f64 { self.update_ms }
    #[wasm_bindgen(getter)]
    pub fn draw_ms(&self) -> f64 { self.draw_ms }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    /// Frames rendered since setup
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> u32 { self.frames }
}
