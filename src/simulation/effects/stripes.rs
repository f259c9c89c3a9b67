use crate::core::math::Vec2;
use crate::core::random::Rng;
use crate::domain::color::Color;
use crate::domain::tuning::StripesTuning;
use crate::domain::EffectKind;
use crate::simulation::context::{FrameContext, PointerState};
use crate::simulation::render::{LineJoin, Surface};
use crate::systems::particles::StripeVertex;
use crate::systems::ParticlePool;

use super::Effect;

/// One horizontal line of spring-bound vertices
pub struct Stripe {
    pub color: Color,
    pub vertices: ParticlePool<StripeVertex>,
}

impl Stripe {
    fn new(color: Color, y: f64, left: f64, right: f64, spacing: f64) -> Self {
        let mut vertices = ParticlePool::unbounded();
        let mut x = left;
        while x < right {
            vertices.push(StripeVertex::new(Vec2::new(x, y)));
            x += spacing;
        }
        Self { color, vertices }
    }

    /// Smooth path through the vertex midpoints
    fn draw(&self, tuning: &StripesTuning, surface: &mut dyn Surface) {
        let mut points = self.vertices.iter().map(|v| v.pos);
        let Some(first) = points.next() else {
            return;
        };

        surface.begin_path();
        surface.set_line_join(LineJoin::Round);
        surface.set_stroke(&self.color);
        surface.set_line_width(tuning.line_width);
        surface.move_to(first.x, first.y);

        let segments = self.vertices.len().saturating_sub(3);
        let current = self.vertices.iter().skip(1).map(|v| v.pos);
        let next = self.vertices.iter().skip(2).map(|v| v.pos);
        for (point, next) in current.zip(next).take(segments) {
            let mid_x = (point.x + next.x) / 2.0;
            let mid_y = (point.y + next.y) / 2.0;
            surface.quadratic_curve_to(point.x, point.y, mid_x, mid_y);
        }

        surface.stroke();
        surface.close_path();
    }
}

/// Thick lines that bulge away from the pointer and spring back
pub struct Stripes {
    tuning: StripesTuning,
    stripes: Vec<Stripe>,
    rng: Rng,
}

impl Stripes {
    pub fn new(tuning: StripesTuning, seed: u32) -> Self {
        Self {
            tuning,
            stripes: Vec::new(),
            rng: Rng::new(seed),
        }
    }

    pub fn stripes(&self) -> &[Stripe] {
        &self.stripes
    }
}

impl Effect for Stripes {
    fn kind(&self) -> EffectKind {
        EffectKind::Stripes
    }

    fn setup(&mut self, frame: &FrameContext, _surface: &mut dyn Surface) {
        let tuning = &self.tuning;
        let left = -tuning.overlap;
        let right = frame.width + tuning.overlap;
        self.stripes = tuning
            .lines
            .iter()
            .map(|line| {
                let y = frame.height / 2.0 - line.y_offset;
                Stripe::new(line.color, y, left, right, tuning.spacing)
            })
            .collect();
    }

    fn update(&mut self, frame: &FrameContext, pointer: &PointerState) {
        for stripe in &mut self.stripes {
            stripe.vertices.update(&self.tuning, frame, pointer, &mut self.rng);
        }
    }

    fn draw(&mut self, _frame: &FrameContext, surface: &mut dyn Surface) {
        for stripe in &self.stripes {
            stripe.draw(&self.tuning, surface);
        }
    }

    fn particle_count(&self) -> usize {
        self.stripes.iter().map(|s| s.vertices.len()).sum()
    }

    fn destroy(&mut self, _surface: &mut dyn Surface) {
        self.stripes.clear();
    }
}
