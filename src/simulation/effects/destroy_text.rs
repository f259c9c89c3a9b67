use crate::core::random::Rng;
use crate::domain::tuning::DestroyTextTuning;
use crate::domain::EffectKind;
use crate::simulation::context::{FrameContext, PointerEvent, PointerState};
use crate::simulation::render::Surface;
use crate::systems::particles::Dot;
use crate::systems::raster::{rasterize_word, TextRenderer};
use crate::systems::ParticlePool;

use super::Effect;

/// A word drawn in dots; the pointer knocks them loose, and once every dot
/// is loose a banner replaces the word
pub struct DestroyText {
    tuning: DestroyTextTuning,
    dots: ParticlePool<Dot>,
    renderer: Box<dyn TextRenderer>,
    won: bool,
    rng: Rng,
}

impl DestroyText {
    pub fn new(tuning: DestroyTextTuning, renderer: Box<dyn TextRenderer>, seed: u32) -> Self {
        Self {
            tuning,
            dots: ParticlePool::unbounded(),
            renderer,
            won: false,
            rng: Rng::new(seed),
        }
    }

    pub fn dots(&self) -> &ParticlePool<Dot> {
        &self.dots
    }

    /// Whether any dot is still part of the word
    pub fn has_pixels_left(&self) -> bool {
        self.dots.iter().any(|dot| !dot.released)
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    fn draw_win(&mut self, frame: &FrameContext, surface: &mut dyn Surface) {
        let key = self.tuning.win_image.as_str();
        if let Some((image_width, image_height)) = surface.image_size(key) {
            if image_height > 0.0 {
                let height = frame.height * self.tuning.win_height;
                let width = height / image_height * image_width;
                let x = frame.width / 2.0 - width / 2.0;
                let y = frame.height / 2.0 - height / 2.0;
                surface.draw_image(key, x, y, width, height);
            }
        }
        if !self.won {
            surface.set_backdrop(Some(&self.tuning.win_backdrop));
            self.won = true;
            console_log!("{}: every dot knocked loose", self.kind());
        }
    }
}

impl Effect for DestroyText {
    fn kind(&self) -> EffectKind {
        EffectKind::DestroyText
    }

    fn setup(&mut self, frame: &FrameContext, surface: &mut dyn Surface) {
        surface.set_backdrop(None);
        self.won = false;
        self.dots.clear();

        let tuning = &self.tuning;
        let points = rasterize_word(
            self.renderer.as_mut(),
            frame.width.max(0.0) as u32,
            frame.height.max(0.0) as u32,
            &tuning.word,
            tuning.density,
            tuning.stride,
            &tuning.font,
        );
        for point in points {
            self.dots.push(Dot::new(point, tuning.radius));
        }
        surface.load_image(&self.tuning.win_image);
    }

    fn update(&mut self, frame: &FrameContext, pointer: &PointerState) {
        self.dots.update(&self.tuning, frame, pointer, &mut self.rng);
    }

    fn draw(&mut self, frame: &FrameContext, surface: &mut dyn Surface) {
        if !self.has_pixels_left() {
            self.draw_win(frame, surface);
        }
        self.dots.draw(&self.tuning, surface);
    }

    fn pointer(&mut self, event: PointerEvent, _: &FrameContext, pointer: &PointerState, _: &mut dyn Surface) {
        let is_click = event == PointerEvent::Click;
        for dot in self.dots.iter_mut() {
            dot.hit(pointer.mouse, is_click, &self.tuning, &mut self.rng);
        }
    }

    fn particle_count(&self) -> usize {
        self.dots.len()
    }

    fn destroy(&mut self, surface: &mut dyn Surface) {
        self.dots.clear();
        self.won = false;
        surface.set_backdrop(None);
    }
}
