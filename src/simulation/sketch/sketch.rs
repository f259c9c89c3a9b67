//! Simulation loop
//!
//! A `Sketch` wraps one effect with the running/paused state machine, the
//! frame clock, the latest pointer state and the perf counters. The harness
//! calls `tick` once per animation frame; paused sketches skip update and
//! draw but still take pointer input.

use crate::core::math::Vec2;
use crate::core::utils::console::debug_enabled;
use crate::domain::EffectKind;

use super::context::{FrameContext, PointerEvent, PointerState};
use super::effects::Effect;
use super::fps::FpsMonitor;
use super::frame_stats::FrameStats;
use super::perf_timer::PerfTimer;
use super::render::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Paused,
}

pub struct Sketch {
    effect: Box<dyn Effect>,
    state: LoopState,
    frame: FrameContext,
    pointer: PointerState,
    /// Timestamp of the first tick; `millis` counts from here
    origin: Option<f64>,
    /// Loop time at which to pause
    pause_at: Option<f64>,
    fps: FpsMonitor,
    stats: FrameStats,
}

impl Sketch {
    pub fn new(effect: Box<dyn Effect>, width: f64, height: f64) -> Self {
        Self {
            effect,
            state: LoopState::Running,
            frame: FrameContext::new(width, height),
            pointer: PointerState::default(),
            origin: None,
            pause_at: None,
            fps: FpsMonitor::new(),
            stats: FrameStats::default(),
        }
    }

    pub fn kind(&self) -> EffectKind {
        self.effect.kind()
    }

    pub fn effect(&self) -> &dyn Effect {
        self.effect.as_ref()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn frame(&self) -> &FrameContext {
        &self.frame
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn start(&mut self) {
        self.state = LoopState::Running;
    }

    pub fn stop(&mut self) {
        self.state = LoopState::Paused;
    }

    /// Pause once the loop has run `after_ms` past the current frame. The
    /// frame that crosses the deadline is still rendered.
    pub fn schedule_pause(&mut self, after_ms: f64) {
        self.pause_at = Some(self.frame.millis + after_ms.max(0.0));
    }

    pub fn setup(&mut self, surface: &mut dyn Surface) {
        self.stats.reset();
        self.effect.setup(&self.frame, surface);
        if debug_enabled() {
            console_log!(
                "{}: {} particles on {}x{}",
                self.kind(),
                self.effect.particle_count(),
                self.frame.width,
                self.frame.height
            );
        }
    }

    /// Advance the clock to `now_ms` and render a frame if running. `dt`
    /// overrides the frame time derived from the previous tick. Returns
    /// whether a frame was rendered.
    pub fn tick(&mut self, now_ms: f64, dt: Option<f64>, surface: &mut dyn Surface) -> bool {
        let origin = *self.origin.get_or_insert(now_ms);
        self.frame.advance_to(now_ms - origin);
        if let Some(dt) = dt {
            self.frame.dt = dt;
        }

        let rendered = self.is_running();
        if rendered {
            self.render(surface);
        }

        if let Some(at) = self.pause_at {
            if self.frame.millis >= at {
                self.pause_at = None;
                self.stop();
            }
        }
        rendered
    }

    fn render(&mut self, surface: &mut dyn Surface) {
        let mut timer = PerfTimer::start();
        self.effect.update(&self.frame, &self.pointer);
        let update_ms = timer.lap();

        if self.effect.autoclear() {
            surface.clear(self.frame.width, self.frame.height);
        }
        self.effect.draw(&self.frame, surface);
        let draw_ms = timer.lap();

        self.stats.record(update_ms, draw_ms, self.effect.particle_count());
        self.fps.observe(self.effect.kind().name(), &self.frame, debug_enabled());
    }

    /// Rebuild the effect for a new canvas size
    pub fn resize(&mut self, width: f64, height: f64, surface: &mut dyn Surface) {
        self.effect.destroy(surface);
        self.frame.resize(width, height);
        self.setup(surface);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64, surface: &mut dyn Surface) {
        self.pointer.move_to(x, y);
        self.dispatch(PointerEvent::Move, surface);
    }

    pub fn touch(&mut self, touches: &[Vec2], surface: &mut dyn Surface) {
        if touches.is_empty() {
            return;
        }
        self.pointer.set_touches(touches);
        self.dispatch(PointerEvent::Move, surface);
    }

    pub fn click(&mut self, x: f64, y: f64, surface: &mut dyn Surface) {
        self.pointer.move_to(x, y);
        self.dispatch(PointerEvent::Click, surface);
    }

    fn dispatch(&mut self, event: PointerEvent, surface: &mut dyn Surface) {
        self.effect.pointer(event, &self.frame, &self.pointer, surface);
    }

    pub fn mouse_over(&mut self) {
        self.start();
    }

    pub fn mouse_out(&mut self) {
        self.stop();
    }

    /// Tear the effect down; the sketch stays paused afterwards
    pub fn destroy(&mut self, surface: &mut dyn Surface) {
        self.effect.destroy(surface);
        self.pause_at = None;
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tuning;
    use crate::simulation::effects::create_effect;
    use crate::simulation::render::RecordingSurface;

    fn sketch(kind: EffectKind) -> (Sketch, RecordingSurface) {
        let mut surface = RecordingSurface::new();
        let mut sketch = Sketch::new(create_effect(kind, &Tuning::default(), 1), 300.0, 200.0);
        sketch.setup(&mut surface);
        (sketch, surface)
    }

    #[test]
    fn starts_running() {
        let (sketch, _) = sketch(EffectKind::BallPit);
        assert_eq!(sketch.state(), LoopState::Running);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let (mut sketch, _) = sketch(EffectKind::BallPit);
        sketch.start();
        sketch.start();
        assert!(sketch.is_running());
        sketch.stop();
        sketch.stop();
        assert_eq!(sketch.state(), LoopState::Paused);
        sketch.mouse_over();
        assert!(sketch.is_running());
        sketch.mouse_out();
        assert!(!sketch.is_running());
    }

    #[test]
    fn paused_ticks_skip_rendering() {
        let (mut sketch, mut surface) = sketch(EffectKind::Stripes);
        surface.take();
        sketch.stop();
        assert!(!sketch.tick(16.0, None, &mut surface));
        assert!(surface.commands().is_empty());
        assert_eq!(sketch.stats().frames(), 0);
    }

    #[test]
    fn millis_count_from_the_first_tick() {
        let (mut sketch, mut surface) = sketch(EffectKind::Stripes);
        sketch.tick(5000.0, None, &mut surface);
        sketch.tick(5016.0, None, &mut surface);
        assert_eq!(sketch.frame().millis, 16.0);
        assert_eq!(sketch.frame().dt, 16.0);
        sketch.tick(5040.0, Some(10.0), &mut surface);
        assert_eq!(sketch.frame().dt, 10.0);
    }

    #[test]
    fn scheduled_pause_renders_up_to_the_deadline() {
        let (mut sketch, mut surface) = sketch(EffectKind::River);
        sketch.schedule_pause(700.0);
        assert!(sketch.tick(0.0, None, &mut surface));
        assert!(sketch.tick(600.0, None, &mut surface));
        assert!(sketch.is_running());
        assert!(sketch.tick(700.0, None, &mut surface));
        assert!(!sketch.is_running());
        assert!(!sketch.tick(716.0, None, &mut surface));
    }

    #[test]
    fn zero_delay_pause_still_renders_once() {
        let (mut sketch, mut surface) = sketch(EffectKind::BrainFailure);
        sketch.schedule_pause(0.0);
        assert!(sketch.tick(1234.0, None, &mut surface));
        assert!(!sketch.is_running());
        assert_eq!(sketch.stats().frames(), 1);
    }

    #[test]
    fn pointer_input_reaches_paused_effects() {
        let (mut sketch, mut surface) = sketch(EffectKind::Bubbles);
        sketch.stop();
        let before = sketch.effect().particle_count();
        sketch.click(150.0, 100.0, &mut surface);
        assert_eq!(sketch.effect().particle_count(), before + 50);
        assert_eq!(sketch.pointer().mouse, Vec2::new(150.0, 100.0));
    }

    #[test]
    fn resize_rebuilds_for_the_new_canvas() {
        let (mut sketch, mut surface) = sketch(EffectKind::Stripes);
        let before = sketch.effect().particle_count();
        sketch.resize(600.0, 200.0, &mut surface);
        assert_eq!(sketch.frame().width, 600.0);
        assert!(sketch.effect().particle_count() > before);
    }

    #[test]
    fn destroy_empties_and_pauses() {
        let (mut sketch, mut surface) = sketch(EffectKind::BallPit);
        sketch.schedule_pause(100.0);
        sketch.destroy(&mut surface);
        assert_eq!(sketch.effect().particle_count(), 0);
        assert!(!sketch.is_running());
        sketch.start();
        sketch.tick(500.0, None, &mut surface);
        assert!(sketch.is_running());
    }
}
