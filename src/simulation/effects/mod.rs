//! The seven page effects
//!
//! Each effect owns its particles, its tuning section and its own `Rng`.
//! The `Sketch` loop drives them through the `Effect` trait.

mod ball_pit;
mod brain_failure;
mod bubbles;
mod destroy_text;
mod draw_text;
mod river;
mod stripes;

pub use ball_pit::BallPit;
pub use brain_failure::BrainFailure;
pub use bubbles::Bubbles;
pub use destroy_text::DestroyText;
pub use draw_text::{DrawText, DrawTextPhase, Painter};
pub use river::River;
pub use stripes::Stripes;

use crate::domain::{EffectKind, Tuning};
use crate::systems::raster::{BlockFont, TextRenderer};

use super::context::{FrameContext, PointerEvent, PointerState};
use super::render::Surface;

/// A canvas effect as seen by the simulation loop
pub trait Effect {
    fn kind(&self) -> EffectKind;

    /// Build the initial particles for the current canvas size. Called
    /// again after a resize, so it must start from a clean slate.
    fn setup(&mut self, frame: &FrameContext, surface: &mut dyn Surface);

    fn update(&mut self, frame: &FrameContext, pointer: &PointerState);

    fn draw(&mut self, frame: &FrameContext, surface: &mut dyn Surface);

    /// Pointer input; runs whether or not the loop is paused
    fn pointer(&mut self, _event: PointerEvent, _frame: &FrameContext, _pointer: &PointerState, _surface: &mut dyn Surface) {}

    /// Whether the loop wipes the canvas before each draw
    fn autoclear(&self) -> bool {
        true
    }

    fn particle_count(&self) -> usize;

    /// Writing progress, for effects that write text
    fn phase(&self) -> Option<DrawTextPhase> {
        None
    }

    /// Drop every particle and undo any page-level styling
    fn destroy(&mut self, surface: &mut dyn Surface);
}

/// Build the effect for `kind` with its section of `tuning`
pub fn create_effect(kind: EffectKind, tuning: &Tuning, seed: u32) -> Box<dyn Effect> {
    match kind {
        EffectKind::DrawText => Box::new(DrawText::new(tuning.draw_text.clone())),
        EffectKind::BallPit => Box::new(BallPit::new(tuning.ball_pit.clone(), seed)),
        EffectKind::River => Box::new(River::new(tuning.river.clone(), seed)),
        EffectKind::Bubbles => Box::new(Bubbles::new(tuning.bubbles.clone(), seed)),
        EffectKind::Stripes => Box::new(Stripes::new(tuning.stripes.clone(), seed)),
        EffectKind::BrainFailure => Box::new(BrainFailure::new(tuning.brain_failure.clone(), seed)),
        EffectKind::DestroyText => {
            Box::new(DestroyText::new(tuning.destroy_text.clone(), text_renderer(), seed))
        }
    }
}

impl EffectKind {
    pub fn create(self, tuning: &Tuning, seed: u32) -> Box<dyn Effect> {
        create_effect(self, tuning, seed)
    }
}

/// Offscreen canvas text in the browser, the block font elsewhere
pub fn text_renderer() -> Box<dyn TextRenderer> {
    #[cfg(target_arch = "wasm32")]
    {
        match super::render::CanvasText::new() {
            Ok(canvas) => return Box::new(canvas),
            Err(_) => console_warn!("offscreen canvas unavailable, rasterizing with the block font"),
        }
    }
    Box::new(BlockFont::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_builds_every_kind() {
        let tuning = Tuning::default();
        for kind in EffectKind::ALL {
            let effect = create_effect(kind, &tuning, 7);
            assert_eq!(effect.kind(), kind);
            assert_eq!(effect.particle_count(), 0);
        }
    }

    #[test]
    fn only_trail_effects_keep_their_canvas() {
        let tuning = Tuning::default();
        let keeps: Vec<EffectKind> = EffectKind::ALL
            .into_iter()
            .filter(|kind| !kind.create(&tuning, 1).autoclear())
            .collect();
        assert_eq!(keeps, vec![EffectKind::DrawText, EffectKind::River]);
    }
}
