use crate::core::math::Vec2;
use crate::core::random::Rng;
use crate::domain::tuning::BallPitTuning;
use crate::domain::EffectKind;
use crate::simulation::context::{FrameContext, PointerEvent, PointerState};
use crate::simulation::render::Surface;
use crate::systems::particles::Ball;
use crate::systems::ParticlePool;

use super::Effect;

/// Balls drifting around, fleeing the pointer; a click doubles every
/// velocity
pub struct BallPit {
    tuning: BallPitTuning,
    balls: ParticlePool<Ball>,
    rng: Rng,
}

impl BallPit {
    pub fn new(tuning: BallPitTuning, seed: u32) -> Self {
        Self {
            tuning,
            balls: ParticlePool::unbounded(),
            rng: Rng::new(seed),
        }
    }

    pub fn balls(&self) -> &ParticlePool<Ball> {
        &self.balls
    }
}

impl Effect for BallPit {
    fn kind(&self) -> EffectKind {
        EffectKind::BallPit
    }

    fn setup(&mut self, frame: &FrameContext, _surface: &mut dyn Surface) {
        self.balls.clear();
        if frame.is_empty() {
            return;
        }
        let count = (frame.width * frame.height * self.tuning.density).ceil() as usize;
        for _ in 0..count {
            let pos = Vec2::new(self.rng.below(frame.width), self.rng.below(frame.height));
            let ball = Ball::new(pos, &self.tuning, &mut self.rng);
            self.balls.push(ball);
        }
    }

    fn update(&mut self, frame: &FrameContext, pointer: &PointerState) {
        self.balls.update(&self.tuning, frame, pointer, &mut self.rng);
    }

    fn draw(&mut self, _frame: &FrameContext, surface: &mut dyn Surface) {
        self.balls.draw(&self.tuning, surface);
    }

    fn pointer(&mut self, event: PointerEvent, _: &FrameContext, _: &PointerState, _: &mut dyn Surface) {
        if event != PointerEvent::Click {
            return;
        }
        for ball in self.balls.iter_mut() {
            ball.boost(self.tuning.click_boost, self.tuning.max_speed);
        }
    }

    fn particle_count(&self) -> usize {
        self.balls.len()
    }

    fn destroy(&mut self, _surface: &mut dyn Surface) {
        self.balls.clear();
    }
}
