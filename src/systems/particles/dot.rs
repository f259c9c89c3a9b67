use crate::core::math::{distance, Vec2, TWO_PI};
use crate::core::random::Rng;
use crate::domain::tuning::DestroyTextTuning;
use crate::simulation::context::{FrameContext, PointerState};
use crate::simulation::render::Surface;

use super::body::Body;
use super::Particle;

/// One dot of the destroyable word; sits still until the pointer knocks it
/// loose
#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    pub body: Body,
    pub radius: f64,
    pub released: bool,
}

impl Dot {
    pub fn new(pos: Vec2, radius: f64) -> Self {
        Self {
            body: Body::at_rest(pos),
            radius,
            released: false,
        }
    }

    /// React to a pointer at `pointer`; clicks reach further than moves.
    /// Returns whether the dot was within reach.
    pub fn hit(&mut self, pointer: Vec2, is_click: bool, tuning: &DestroyTextTuning, rng: &mut Rng) -> bool {
        let d = distance(self.body.pos, pointer);
        let reach = if is_click { tuning.click_radius } else { tuning.mouse_radius };
        if d.magnitude >= reach {
            return false;
        }

        self.released = true;
        if self.body.vel.x < tuning.release_speed && self.body.vel.y < tuning.release_speed {
            self.body.vel = Vec2::new(
                d.dx / 4.0 + rng.sample(tuning.jitter),
                d.dy / 4.0 + rng.sample(tuning.jitter),
            );
        }
        true
    }

    pub fn is_out_of_bounds(&self, frame: &FrameContext) -> bool {
        let Vec2 { x, y } = self.body.pos;
        x < -self.radius
            || x > frame.width + self.radius
            || y < -self.radius
            || y > frame.height + self.radius
    }
}

impl Particle for Dot {
    type Params = DestroyTextTuning;

    fn update(&mut self, tuning: &DestroyTextTuning, _: &FrameContext, _: &PointerState, _: &mut Rng) {
        self.body.integrate();
        self.body.damp(tuning.drag);
    }

    fn is_alive(&self, _: &DestroyTextTuning, frame: &FrameContext) -> bool {
        !self.is_out_of_bounds(frame)
    }

    fn draw(&self, tuning: &DestroyTextTuning, surface: &mut dyn Surface) {
        surface.set_fill(&tuning.color);
        surface.begin_path();
        surface.arc(self.body.pos.x, self.body.pos.y, self.radius, 0.0, TWO_PI);
        surface.close_path();
        surface.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_dot_stays_put() {
        let tuning = DestroyTextTuning::default();
        let frame = FrameContext::new(100.0, 100.0);
        let mut rng = Rng::new(1);
        let mut dot = Dot::new(Vec2::new(50.0, 50.0), 4.0);
        dot.update(&tuning, &frame, &PointerState::default(), &mut rng);
        assert_eq!(dot.body.pos, Vec2::new(50.0, 50.0));
        assert!(dot.is_alive(&tuning, &frame));
    }

    #[test]
    fn click_reaches_further_than_move() {
        let tuning = DestroyTextTuning::default();
        let mut rng = Rng::new(2);
        let mut dot = Dot::new(Vec2::new(50.0, 50.0), 4.0);
        assert!(!dot.hit(Vec2::new(90.0, 50.0), false, &tuning, &mut rng));
        assert!(!dot.released);
        assert!(dot.hit(Vec2::new(90.0, 50.0), true, &tuning, &mut rng));
        assert!(dot.released);
        // kicked away from the pointer: dx = -40 / 4 plus jitter in [-2, 2)
        assert!(dot.body.vel.x < -7.0);
    }

    #[test]
    fn fast_dots_keep_their_velocity() {
        let tuning = DestroyTextTuning::default();
        let mut rng = Rng::new(3);
        let mut dot = Dot::new(Vec2::new(50.0, 50.0), 4.0);
        dot.body.vel = Vec2::new(5.0, 5.0);
        assert!(dot.hit(Vec2::new(52.0, 50.0), false, &tuning, &mut rng));
        assert_eq!(dot.body.vel, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn leaving_canvas_kills_the_dot() {
        let tuning = DestroyTextTuning::default();
        let frame = FrameContext::new(100.0, 100.0);
        let mut dot = Dot::new(Vec2::new(103.0, 50.0), 4.0);
        assert!(dot.is_alive(&tuning, &frame));
        dot.body.pos.x = 104.5;
        assert!(!dot.is_alive(&tuning, &frame));
    }

    #[test]
    fn damping_only_update_slows_down() {
        let tuning = DestroyTextTuning::default();
        let frame = FrameContext::new(1000.0, 1000.0);
        let mut rng = Rng::new(3);
        let mut dot = Dot::new(Vec2::new(500.0, 500.0), 4.0);
        dot.body.vel = Vec2::new(3.0, -4.0);
        let before = dot.body.speed();
        dot.update(&tuning, &frame, &PointerState::default(), &mut rng);
        assert!(dot.body.speed() < before);
    }

    #[test]
    fn moves_at_full_speed_before_drag() {
        let tuning = DestroyTextTuning::default();
        let frame = FrameContext::new(1000.0, 1000.0);
        let mut rng = Rng::new(3);
        let mut dot = Dot::new(Vec2::new(500.0, 500.0), 4.0);
        dot.body.vel = Vec2::new(3.0, -4.0);
        dot.update(&tuning, &frame, &PointerState::default(), &mut rng);
        assert_eq!(dot.body.pos, Vec2::new(503.0, 496.0));
        assert_eq!(dot.body.vel, Vec2::new(3.0 * tuning.drag, -4.0 * tuning.drag));
    }
}
