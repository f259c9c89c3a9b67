use crate::core::math::{distance, Vec2};
use crate::core::random::Rng;
use crate::domain::tuning::StripesTuning;
use crate::simulation::context::{FrameContext, PointerState};
use crate::simulation::render::Surface;

use super::Particle;

/// Stripe vertex tied to a rest position by a spring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripeVertex {
    pub pos: Vec2,
    pub rest: Vec2,
}

impl StripeVertex {
    pub fn new(rest: Vec2) -> Self {
        Self { pos: rest, rest }
    }

    /// Displacement away from the pointer, falling off with distance
    fn pointer_push(&self, mouse: Vec2, sensitivity: f64) -> Vec2 {
        let d = distance(self.pos, mouse);
        if d.magnitude <= f64::EPSILON {
            return Vec2::zero();
        }
        let theta = d.dy.atan2(d.dx);
        let strength = sensitivity / d.magnitude;
        Vec2::new(theta.cos() * strength, theta.sin() * strength)
    }
}

impl Particle for StripeVertex {
    type Params = StripesTuning;

    fn update(&mut self, tuning: &StripesTuning, _: &FrameContext, pointer: &PointerState, _: &mut Rng) {
        let push = self.pointer_push(pointer.mouse, tuning.mouse_sensitivity);
        let pull = (self.rest - self.pos) * tuning.spring;
        self.pos += push + pull;
    }

    fn is_alive(&self, _: &StripesTuning, _: &FrameContext) -> bool {
        true
    }

    // Vertices render as part of their line's path.
    fn draw(&self, _: &StripesTuning, _: &mut dyn Surface) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushed_away_from_pointer() {
        let tuning = StripesTuning::default();
        let mut rng = Rng::new(1);
        let mut vertex = StripeVertex::new(Vec2::new(100.0, 50.0));
        vertex.update(&tuning, &FrameContext::default(), &PointerState::at(100.0, 40.0), &mut rng);
        // 450 / 10 straight down
        assert!((vertex.pos.y - 95.0).abs() < 1e-9);
        assert!((vertex.pos.x - 100.0).abs() < 1e-9);
    }

    #[test]
    fn springs_back_to_rest() {
        let tuning = StripesTuning::default();
        let mut rng = Rng::new(1);
        let far = PointerState::at(1e9, 1e9);
        let mut vertex = StripeVertex::new(Vec2::new(0.0, 0.0));
        vertex.pos = Vec2::new(0.0, 40.0);
        for _ in 0..200 {
            vertex.update(&tuning, &FrameContext::default(), &far, &mut rng);
        }
        assert!(vertex.pos.y.abs() < 0.01);
    }

    #[test]
    fn pointer_on_vertex_is_ignored() {
        let tuning = StripesTuning::default();
        let mut rng = Rng::new(1);
        let mut vertex = StripeVertex::new(Vec2::new(3.0, 3.0));
        vertex.update(&tuning, &FrameContext::default(), &PointerState::at(3.0, 3.0), &mut rng);
        assert_eq!(vertex.pos, Vec2::new(3.0, 3.0));
    }
}
