use crate::core::math::Vec2;
use crate::core::random::Rng;
use crate::domain::color::Color;
use crate::domain::tuning::RiverTuning;
use crate::simulation::context::{FrameContext, PointerState};
use crate::simulation::render::Surface;

use super::body::Body;
use super::Particle;

/// Vertical band the river flows in
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    /// Band for a canvas of the given height, shifted above the centre
    pub fn for_height(height: f64, tuning: &RiverTuning) -> Self {
        let centre = height / 2.0;
        let width = tuning.flow_width * height;
        let offset = tuning.flow_offset * height;
        Self {
            min: centre - offset - offset,
            max: centre + width - offset,
        }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.min && y <= self.max
    }
}

/// River droplet: flows right inside its band and re-enters from the left
/// once it leaves the canvas
#[derive(Clone, Debug, PartialEq)]
pub struct Droplet {
    pub body: Body,
    pub band: Band,
    pub color: Color,
}

impl Droplet {
    pub fn new(x: f64, band: Band, tuning: &RiverTuning, rng: &mut Rng) -> Self {
        let lightness = rng.sample(tuning.lightness).floor();
        let mut droplet = Self {
            body: Body::default(),
            band,
            color: Color::hsl(0.0, 0.0, lightness),
        };
        droplet.reset(x, tuning, rng);
        droplet
    }

    fn reset(&mut self, x: f64, tuning: &RiverTuning, rng: &mut Rng) {
        self.body.pos = Vec2::new(x, rng.range(self.band.min, self.band.max));
        self.body.vel = Vec2::new(tuning.entry_speed, 0.0);
    }

    /// Past the right edge by more than two frames of travel
    pub fn is_out_of_bounds(&self, frame: &FrameContext) -> bool {
        self.body.pos.x > frame.width + self.body.vel.x * 2.0
    }

    /// Back to the left edge, two frames of travel before it
    pub fn recycle(&mut self, tuning: &RiverTuning, rng: &mut Rng) {
        let entry = -self.body.vel.x * 2.0;
        self.reset(entry, tuning, rng);
    }

    fn nudge_into_band(&mut self, strength: f64) {
        if self.body.pos.y > self.band.max {
            self.body.vel.y -= strength;
        } else if self.body.pos.y < self.band.min {
            self.body.vel.y += strength;
        }
    }
}

impl Particle for Droplet {
    type Params = RiverTuning;

    fn update(&mut self, tuning: &RiverTuning, frame: &FrameContext, pointer: &PointerState, rng: &mut Rng) {
        if self.is_out_of_bounds(frame) {
            self.recycle(tuning, rng);
        }

        self.body.vel.x += tuning.flow;
        self.body.vel.y += tuning.flow * rng.range(-1.0, 1.0);
        self.nudge_into_band(tuning.boundary_nudge);
        self.body.repel(pointer.mouse, tuning.mouse_radius, tuning.mouse_repulsion);

        self.body.damp(tuning.friction);
        self.body.integrate();
    }

    fn is_alive(&self, _: &RiverTuning, _: &FrameContext) -> bool {
        true
    }

    /// A short streak trailing back along the velocity
    fn draw(&self, _: &RiverTuning, surface: &mut dyn Surface) {
        let Body { pos, vel } = self.body;
        surface.begin_path();
        surface.move_to(pos.x, pos.y);
        surface.line_to(pos.x - vel.x, pos.y - vel.y);
        surface.set_stroke(&self.color);
        surface.stroke();
    }
}
