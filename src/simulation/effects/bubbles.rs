use crate::core::math::Vec2;
use crate::core::random::Rng;
use crate::domain::tuning::BubblesTuning;
use crate::domain::EffectKind;
use crate::simulation::context::{FrameContext, PointerEvent, PointerState};
use crate::simulation::render::Surface;
use crate::systems::particles::Bubble;
use crate::systems::ParticlePool;

use super::Effect;

const DEFAULT_COMPOSITE: &str = "source-over";

/// Shrinking bubbles blown by the pointer, blended with `lighter`
pub struct Bubbles {
    tuning: BubblesTuning,
    bubbles: ParticlePool<Bubble>,
    rng: Rng,
}

impl Bubbles {
    pub fn new(tuning: BubblesTuning, seed: u32) -> Self {
        let bubbles = ParticlePool::bounded(tuning.max_particles);
        Self {
            tuning,
            bubbles,
            rng: Rng::new(seed),
        }
    }

    pub fn bubbles(&self) -> &ParticlePool<Bubble> {
        &self.bubbles
    }

    /// Add one bubble, evicting the oldest when the pool is full
    pub fn spawn(&mut self, pos: Vec2, large: bool) {
        let tuning = &self.tuning;
        let rng = &mut self.rng;
        let radius = rng.sample(if large { tuning.large_radius } else { tuning.small_radius });
        self.bubbles.spawn_with(|slot| match slot {
            Some(mut bubble) => {
                bubble.reset(pos, radius, tuning, rng);
                bubble
            }
            None => Bubble::new(pos, radius, tuning, rng),
        });
    }
}

impl Effect for Bubbles {
    fn kind(&self) -> EffectKind {
        EffectKind::Bubbles
    }

    fn setup(&mut self, frame: &FrameContext, surface: &mut dyn Surface) {
        self.bubbles.clear();
        surface.set_composite(&self.tuning.composite);

        let centre = frame.center();
        let spread = self.tuning.initial_spread;
        for _ in 0..self.tuning.initial_particles {
            let pos = Vec2::new(
                centre.x + self.rng.range(-spread, spread),
                centre.y + self.rng.range(-spread, spread),
            );
            self.spawn(pos, false);
        }
    }

    fn update(&mut self, frame: &FrameContext, pointer: &PointerState) {
        self.bubbles.update(&self.tuning, frame, pointer, &mut self.rng);
    }

    fn draw(&mut self, _frame: &FrameContext, surface: &mut dyn Surface) {
        self.bubbles.draw(&self.tuning, surface);
    }

    fn pointer(&mut self, event: PointerEvent, _: &FrameContext, pointer: &PointerState, _: &mut dyn Surface) {
        let at = pointer.primary();
        match event {
            PointerEvent::Move => {
                let count = self.rng.range(1.0, self.tuning.spawn_on_touch).ceil() as usize;
                for _ in 0..count {
                    self.spawn(at, false);
                }
            }
            PointerEvent::Click => {
                for _ in 0..self.tuning.spawn_on_click {
                    self.spawn(at, true);
                }
            }
        }
    }

    fn particle_count(&self) -> usize {
        self.bubbles.len()
    }

    fn destroy(&mut self, surface: &mut dyn Surface) {
        self.bubbles.clear();
        surface.set_composite(DEFAULT_COMPOSITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::render::{DrawCommand, RecordingSurface};

    fn bubbles(seed: u32) -> (Bubbles, FrameContext, RecordingSurface) {
        let frame = FrameContext::new(600.0, 400.0);
        let mut effect = Bubbles::new(BubblesTuning::default(), seed);
        let mut surface = RecordingSurface::new();
        effect.setup(&frame, &mut surface);
        (effect, frame, surface)
    }

    #[test]
    fn setup_blows_initial_bubbles_near_centre() {
        let (effect, _, surface) = bubbles(1);
        assert_eq!(effect.particle_count(), 40);
        assert_eq!(surface.commands()[0], DrawCommand::Composite("lighter".to_string()));
        for bubble in effect.bubbles().iter() {
            assert!((bubble.body.pos.x - 300.0).abs() <= 100.0);
            assert!((bubble.body.pos.y - 200.0).abs() <= 100.0);
        }
    }

    #[test]
    fn pointer_move_spawns_up_to_four() {
        let (mut effect, frame, mut surface) = bubbles(2);
        let pointer = PointerState::at(10.0, 10.0);
        effect.pointer(PointerEvent::Move, &frame, &pointer, &mut surface);
        let added = effect.particle_count() - 40;
        assert!((1..=4).contains(&added), "added {added}");
    }

    #[test]
    fn clicks_respect_the_cap() {
        let (mut effect, frame, mut surface) = bubbles(3);
        let pointer = PointerState::at(10.0, 10.0);
        for _ in 0..10 {
            effect.pointer(PointerEvent::Click, &frame, &pointer, &mut surface);
        }
        assert_eq!(effect.particle_count(), 280);
        // the newest bubble is the last one clicked in, and it is large
        let newest = effect.bubbles().iter().last().unwrap();
        assert_eq!(newest.body.pos, Vec2::new(10.0, 10.0));
        assert!(newest.radius >= 30.0);
    }

    #[test]
    fn bubbles_shrink_away() {
        let (mut effect, frame, _) = bubbles(4);
        let pointer = PointerState::default();
        // 80 * 0.96^n < 0.5 after 125 frames
        for _ in 0..130 {
            effect.update(&frame, &pointer);
        }
        assert_eq!(effect.particle_count(), 0);
        assert!(effect.bubbles().recycled_len() > 0);
    }

    #[test]
    fn destroy_restores_compositing() {
        let (mut effect, _, mut surface) = bubbles(5);
        effect.destroy(&mut surface);
        assert_eq!(effect.particle_count(), 0);
        assert_eq!(
            surface.commands().last(),
            Some(&DrawCommand::Composite("source-over".to_string()))
        );
    }
}
