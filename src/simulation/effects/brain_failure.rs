//! Rotating plus-sign grid
//!
//! Two styles alternate every period: each swap flips which colour is the
//! background and which the plus, shifts the grid, and reverses the turn
//! direction. Rotation is eased across the period.

use crate::core::easing::CubicBezier;
use crate::core::math::{Vec2, HALF_PI};
use crate::core::random::Rng;
use crate::domain::color::Color;
use crate::domain::tuning::BrainFailureTuning;
use crate::domain::EffectKind;
use crate::simulation::context::{FrameContext, PointerEvent, PointerState};
use crate::simulation::render::Surface;
use crate::systems::particles::{PlusPaint, PlusTile};
use crate::systems::ParticlePool;

use super::Effect;

/// Diagonal shift repeats every this many columns
const SHIFT_CYCLE: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlusStyle {
    pub plus: Color,
    pub background: Color,
    pub offset: Vec2,
    pub reverse: bool,
}

/// Plain grid first, then the shifted and reversed one
fn initial_styles(tuning: &BrainFailureTuning) -> [PlusStyle; 2] {
    let w = tuning.plus_width;
    [
        PlusStyle {
            plus: tuning.white,
            background: tuning.grey,
            offset: Vec2::zero(),
            reverse: false,
        },
        PlusStyle {
            plus: tuning.grey,
            background: tuning.white,
            offset: Vec2::new(-w * 2.0 / 3.0, -w / 3.0),
            reverse: true,
        },
    ]
}

pub struct BrainFailure {
    tuning: BrainFailureTuning,
    styles: [PlusStyle; 2],
    current: usize,
    next_switch: f64,
    tiles: ParticlePool<PlusTile>,
    easing: CubicBezier,
    rng: Rng,
}

impl BrainFailure {
    pub fn new(tuning: BrainFailureTuning, seed: u32) -> Self {
        let styles = initial_styles(&tuning);
        Self {
            tuning,
            styles,
            current: 0,
            next_switch: 0.0,
            tiles: ParticlePool::unbounded(),
            easing: CubicBezier::EASE_IN_OUT,
            rng: Rng::new(seed),
        }
    }

    pub fn style(&self) -> &PlusStyle {
        &self.styles[self.current]
    }

    pub fn next_switch(&self) -> f64 {
        self.next_switch
    }

    fn swap_style(&mut self, millis: f64) {
        self.next_switch = millis + self.tuning.period_ms;
        self.current = (self.current + 1) % self.styles.len();
    }

    /// Eased quarter turn over the remaining part of the period
    pub fn rotation(&self, millis: f64) -> f64 {
        let remaining = (self.next_switch - millis) / self.tuning.period_ms;
        let mut eased = self.easing.get(remaining);
        if self.style().reverse {
            eased = 1.0 - eased;
        }
        eased * HALF_PI
    }

    fn paint(&self, millis: f64) -> PlusPaint {
        let style = self.style();
        PlusPaint {
            width: self.tuning.plus_width,
            rotation: self.rotation(millis),
            color: style.plus,
            offset: style.offset,
        }
    }

    /// Row-wise layout: each row steps a third of a tile right, each column
    /// starts a third of a tile higher, cycling every ten columns. Columns
    /// start left of the canvas so the shift still covers the left edge.
    fn lay_out(&mut self, frame: &FrameContext) {
        self.tiles.clear();
        let w = self.tuning.plus_width;
        let rows = frame.height / w + self.tuning.extra_rows;

        let mut col = -frame.width / w;
        while col < frame.width / w {
            let mut x = col * w;
            let mut row = 0.0;
            while row < rows {
                x += w / 3.0;
                let y = row * w - (col % SHIFT_CYCLE) * w / 3.0;
                self.tiles.push(PlusTile::new(Vec2::new(x, y)));
                row += 1.0;
            }
            col += 1.0;
        }

        let paint = self.paint(frame.millis);
        self.tiles.cull(&paint, frame);
    }
}

impl Effect for BrainFailure {
    fn kind(&self) -> EffectKind {
        EffectKind::BrainFailure
    }

    fn setup(&mut self, frame: &FrameContext, _surface: &mut dyn Surface) {
        self.styles = initial_styles(&self.tuning);
        self.current = 0;
        self.swap_style(frame.millis);
        self.lay_out(frame);
    }

    fn update(&mut self, frame: &FrameContext, pointer: &PointerState) {
        if frame.millis > self.next_switch {
            self.swap_style(frame.millis);
        }
        let paint = self.paint(frame.millis);
        self.tiles.update(&paint, frame, pointer, &mut self.rng);
    }

    fn draw(&mut self, frame: &FrameContext, surface: &mut dyn Surface) {
        surface.set_fill(&self.style().background);
        surface.fill_rect(0.0, 0.0, frame.width, frame.height);

        let paint = self.paint(frame.millis);
        self.tiles.draw(&paint, surface);
    }

    /// Click swaps the colour pairs of the two styles
    fn pointer(&mut self, event: PointerEvent, _: &FrameContext, _: &PointerState, _: &mut dyn Surface) {
        if event != PointerEvent::Click {
            return;
        }
        let [first, second] = &mut self.styles;
        std::mem::swap(&mut first.plus, &mut second.plus);
        std::mem::swap(&mut first.background, &mut second.background);
    }

    fn particle_count(&self) -> usize {
        self.tiles.len()
    }

    fn destroy(&mut self, _surface: &mut dyn Surface) {
        self.tiles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::render::{DrawCommand, RecordingSurface};
    use crate::systems::particles::Particle;

    fn brain(frame: &FrameContext) -> BrainFailure {
        let mut effect = BrainFailure::new(BrainFailureTuning::default(), 1);
        effect.setup(frame, &mut RecordingSurface::new());
        effect
    }

    #[test]
    fn setup_switches_to_the_shifted_style() {
        let effect = brain(&FrameContext::new(300.0, 300.0));
        assert!(effect.style().reverse);
        assert_eq!(effect.style().offset, Vec2::new(-50.0, -25.0));
        assert_eq!(effect.next_switch(), 1450.0);
        assert!(effect.particle_count() > 0);
    }

    #[test]
    fn tiles_cover_canvas_with_margin() {
        let frame = FrameContext::new(300.0, 200.0);
        let effect = brain(&frame);
        let paint = effect.paint(0.0);
        for tile in effect.tiles.iter() {
            assert!(tile.is_alive(&paint, &frame));
        }
    }

    #[test]
    fn style_alternates_each_period() {
        let mut frame = FrameContext::new(300.0, 300.0);
        let mut effect = brain(&frame);
        let pointer = PointerState::default();

        frame.advance_to(1000.0);
        effect.update(&frame, &pointer);
        assert!(effect.style().reverse);

        frame.advance_to(1451.0);
        effect.update(&frame, &pointer);
        assert!(!effect.style().reverse);
        assert_eq!(effect.next_switch(), 2901.0);
    }

    #[test]
    fn rotation_eases_through_a_quarter_turn() {
        let frame = FrameContext::new(300.0, 300.0);
        let mut effect = brain(&frame);
        // reversed style: starts square, ends a quarter turn in
        assert!(effect.rotation(0.0).abs() < 1e-9);
        assert!((effect.rotation(1450.0) - HALF_PI).abs() < 1e-9);

        effect.swap_style(0.0);
        assert!((effect.rotation(0.0) - HALF_PI).abs() < 1e-9);
        assert!((effect.rotation(725.0) - HALF_PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn click_swaps_colours() {
        let frame = FrameContext::new(300.0, 300.0);
        let mut effect = brain(&frame);
        let before = *effect.style();
        effect.pointer(PointerEvent::Click, &frame, &PointerState::default(), &mut RecordingSurface::new());
        assert_eq!(effect.style().plus, before.background);
        assert_eq!(effect.style().background, before.plus);
        assert_eq!(effect.style().offset, before.offset);
    }

    #[test]
    fn draw_paints_background_then_tiles() {
        let frame = FrameContext::new(300.0, 300.0);
        let mut effect = brain(&frame);
        let mut surface = RecordingSurface::new();
        effect.draw(&frame, &mut surface);
        assert_eq!(surface.commands()[0], DrawCommand::Fill(Color::hsl(48.0, 0.0, 100.0)));
        assert_eq!(
            surface.commands()[1],
            DrawCommand::FillRect { x: 0.0, y: 0.0, width: 300.0, height: 300.0 }
        );
        let rects = surface.count(|c| matches!(c, DrawCommand::FillRect { .. }));
        assert_eq!(rects, 1 + 2 * effect.particle_count());
    }

    #[test]
    fn setup_again_starts_from_the_first_style() {
        let frame = FrameContext::new(300.0, 300.0);
        let mut effect = brain(&frame);
        let first = *effect.style();
        let mut surface = RecordingSurface::new();
        effect.pointer(PointerEvent::Click, &frame, &PointerState::default(), &mut surface);

        effect.setup(&frame, &mut surface);
        assert_eq!(*effect.style(), first);
        effect.setup(&frame, &mut surface);
        assert_eq!(*effect.style(), first);
    }
}
