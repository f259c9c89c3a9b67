use crate::core::math::{Vec2, TWO_PI};
use crate::core::random::Rng;
use crate::domain::color::Color;
use crate::domain::tuning::BubblesTuning;
use crate::simulation::context::{FrameContext, PointerState};
use crate::simulation::render::Surface;

use super::body::{Body, Wander};
use super::Particle;

/// Bubble that drifts and shrinks until it vanishes
#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
    pub body: Body,
    pub radius: f64,
    pub drag: f64,
    pub wander: Wander,
    pub color: Color,
}

impl Bubble {
    pub fn new(pos: Vec2, radius: f64, tuning: &BubblesTuning, rng: &mut Rng) -> Self {
        let saturation = rng.sample(tuning.saturation).floor();
        let lightness = rng.sample(tuning.lightness).floor();
        let wander = Wander::new(&tuning.wander, rng);
        let drag = rng.sample(tuning.drag);
        let speed = if radius > tuning.fast_above {
            rng.sample(tuning.fast_speed)
        } else {
            rng.sample(tuning.speed)
        };

        Self {
            body: Body::new(pos, Vec2::from_heading(wander.theta) * speed),
            radius,
            drag,
            wander,
            color: Color::hsl(tuning.hue, saturation, lightness),
        }
    }

    /// Reinitialize a recycled bubble in place
    pub fn reset(&mut self, pos: Vec2, radius: f64, tuning: &BubblesTuning, rng: &mut Rng) {
        *self = Self::new(pos, radius, tuning, rng);
    }
}

impl Particle for Bubble {
    type Params = BubblesTuning;

    fn update(&mut self, tuning: &BubblesTuning, _: &FrameContext, _: &PointerState, rng: &mut Rng) {
        self.wander.steer(&mut self.body, &tuning.wander, rng);
        self.body.damp(self.drag);
        self.body.integrate();
        self.radius *= tuning.shrink;
    }

    fn is_alive(&self, tuning: &BubblesTuning, _: &FrameContext) -> bool {
        self.radius > tuning.min_radius
    }

    fn draw(&self, _: &BubblesTuning, surface: &mut dyn Surface) {
        surface.begin_path();
        surface.arc(self.body.pos.x, self.body.pos.y, self.radius, 0.0, TWO_PI);
        surface.set_fill(&self.color);
        surface.fill();
    }
}
