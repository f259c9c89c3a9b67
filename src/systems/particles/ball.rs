use crate::core::math::{wrap, Vec2, TWO_PI};
use crate::core::random::Rng;
use crate::domain::color::Color;
use crate::domain::tuning::BallPitTuning;
use crate::simulation::context::{FrameContext, PointerState};
use crate::simulation::render::Surface;

use super::body::{Body, Wander};
use super::Particle;

/// Free-floating ball that shies away from the pointer and loops around the
/// canvas edges
#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    pub body: Body,
    pub radius: f64,
    pub drag: f64,
    pub wander: Wander,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, tuning: &BallPitTuning, rng: &mut Rng) -> Self {
        let radius = rng.sample(tuning.radius);
        let wander = Wander::new(&tuning.wander, rng);
        let drag = rng.sample(tuning.drag);
        let lightness = rng.sample(tuning.lightness).floor();
        let speed = rng.sample(tuning.speed);

        Self {
            body: Body::new(pos, Vec2::from_heading(wander.theta) * speed),
            radius,
            drag,
            wander,
            color: Color::hsl(tuning.hue, tuning.saturation, lightness),
        }
    }

    /// Multiply velocity, capped at `max_speed`
    pub fn boost(&mut self, factor: f64, max_speed: f64) {
        self.body.vel = (self.body.vel * factor).clamp_length(max_speed);
    }

    /// Fold the position back into `[0, width) x [0, height)`
    pub fn wrap(&mut self, width: f64, height: f64) {
        self.body.pos.x = wrap(self.body.pos.x, width);
        self.body.pos.y = wrap(self.body.pos.y, height);
    }
}

impl Particle for Ball {
    type Params = BallPitTuning;

    fn update(&mut self, tuning: &BallPitTuning, frame: &FrameContext, pointer: &PointerState, rng: &mut Rng) {
        self.body.repel(pointer.mouse, tuning.mouse_radius, tuning.mouse_repulsion);
        self.wander.steer(&mut self.body, &tuning.wander, rng);
        self.body.vel = self.body.vel.clamp_length(tuning.max_speed);
        self.body.damp(self.drag);
        self.body.integrate();
        self.wrap(frame.width, frame.height);
    }

    fn is_alive(&self, _: &BallPitTuning, _: &FrameContext) -> bool {
        true
    }

    fn draw(&self, _: &BallPitTuning, surface: &mut dyn Surface) {
        surface.begin_path();
        surface.arc(self.body.pos.x, self.body.pos.y, self.radius, 0.0, TWO_PI);
        surface.set_fill(&self.color);
        surface.fill();
    }
}
