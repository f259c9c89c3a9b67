use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::core::math::Vec2;
use crate::domain::{ConfigError, EffectKind, Tuning};

use super::effects::create_effect;
use super::frame_stats::FrameStats;
use super::render::CanvasSurface;
use super::sketch::Sketch;

fn to_js(err: ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// One effect mounted on one canvas
#[wasm_bindgen]
pub struct EffectHandle {
    sketch: Sketch,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl EffectHandle {
    /// Mount `kind` (e.g. `"ball_pit"`) on `canvas` with default tuning
    #[wasm_bindgen(constructor)]
    pub fn new(kind: &str, canvas: HtmlCanvasElement, seed: u32) -> Result<EffectHandle, JsValue> {
        EffectHandle::with_tuning(kind, canvas, seed, None)
    }

    /// Mount with a JSON tuning bundle; missing sections keep their defaults
    pub fn with_tuning(
        kind: &str,
        canvas: HtmlCanvasElement,
        seed: u32,
        tuning_json: Option<String>,
    ) -> Result<EffectHandle, JsValue> {
        let kind: EffectKind = kind.parse().map_err(to_js)?;
        let tuning = match tuning_json {
            Some(json) => Tuning::from_json(&json).map_err(to_js)?,
            None => Tuning::default(),
        };

        let mut surface = CanvasSurface::new(canvas)?;
        let mut sketch = Sketch::new(create_effect(kind, &tuning, seed), surface.width(), surface.height());
        sketch.setup(&mut surface);
        Ok(EffectHandle { sketch, surface })
    }

    pub fn kind(&self) -> String {
        self.sketch.kind().name().to_string()
    }

    pub fn start(&mut self) {
        self.sketch.start();
    }

    pub fn stop(&mut self) {
        self.sketch.stop();
    }

    pub fn is_running(&self) -> bool {
        self.sketch.is_running()
    }

    /// Pause after the effect has rendered for `after_ms`
    pub fn pause_after(&mut self, after_ms: f64) {
        self.sketch.schedule_pause(after_ms);
    }

    /// Render one animation frame. Returns whether anything was drawn.
    pub fn frame(&mut self, now_ms: f64, dt: Option<f64>) -> bool {
        self.sketch.tick(now_ms, dt, &mut self.surface)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.sketch.resize(width as f64, height as f64, &mut self.surface);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.sketch.pointer_move(x, y, &mut self.surface);
    }

    /// Touch points as a flat `[x0, y0, x1, y1, ...]` list
    pub fn touch(&mut self, points: Vec<f64>) {
        let touches: Vec<Vec2> = points
            .chunks_exact(2)
            .map(|xy| Vec2::new(xy[0], xy[1]))
            .collect();
        self.sketch.touch(&touches, &mut self.surface);
    }

    pub fn click(&mut self, x: f64, y: f64) {
        self.sketch.click(x, y, &mut self.surface);
    }

    pub fn mouse_over(&mut self) {
        self.sketch.mouse_over();
    }

    pub fn mouse_out(&mut self) {
        self.sketch.mouse_out();
    }

    pub fn destroy(&mut self) {
        self.sketch.destroy(&mut self.surface);
    }

    /// Writing progress of the draw-text effect; `undefined` for others
    pub fn phase(&self) -> Option<String> {
        self.sketch.effect().phase().map(|phase| phase.name().to_string())
    }

    pub fn particle_count(&self) -> u32 {
        u32::try_from(self.sketch.effect().particle_count()).unwrap_or(u32::MAX)
    }

    pub fn stats(&self) -> FrameStats {
        self.sketch.stats()
    }
}
