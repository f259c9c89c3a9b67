use crate::core::math::{distance, Vec2};
use crate::core::random::Rng;
use crate::domain::tuning::WanderTuning;

/// Position and velocity in pixels / pixels per frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn at_rest(pos: Vec2) -> Self {
        Self { pos, vel: Vec2::zero() }
    }

    /// Push away from `source` while closer than `radius`.
    ///
    /// Adds `strength / d * (pos - source)`, so the kick has length
    /// `strength` whatever the distance. Returns whether a push happened;
    /// zero distance has no direction and is skipped.
    #[inline]
    pub fn repel(&mut self, source: Vec2, radius: f64, strength: f64) -> bool {
        let d = distance(self.pos, source);
        if d.magnitude >= radius || d.magnitude <= f64::EPSILON {
            return false;
        }
        let ratio = strength / d.magnitude;
        self.vel += d.offset() * ratio;
        true
    }

    #[inline]
    pub fn damp(&mut self, drag: f64) {
        self.vel *= drag;
    }

    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    pub fn speed(&self) -> f64 {
        self.vel.length()
    }
}

/// Random heading walk
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wander {
    pub theta: f64,
    pub rate: f64,
}

impl Wander {
    pub fn new(tuning: &WanderTuning, rng: &mut Rng) -> Self {
        Self {
            rate: rng.sample(tuning.rate),
            theta: rng.angle(),
        }
    }

    /// Turn the heading a little and accelerate along it
    #[inline]
    pub fn steer(&mut self, body: &mut Body, tuning: &WanderTuning, rng: &mut Rng) {
        self.theta += rng.sample(tuning.step) * self.rate;
        body.vel += Vec2::from_heading(self.theta) * tuning.force;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repel_pushes_away_with_fixed_strength() {
        let mut body = Body::at_rest(Vec2::new(10.0, 0.0));
        assert!(body.repel(Vec2::zero(), 150.0, 0.4));
        assert!((body.vel.x - 0.4).abs() < 1e-12);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn repel_ignores_far_and_coincident_sources() {
        let mut body = Body::at_rest(Vec2::new(200.0, 0.0));
        assert!(!body.repel(Vec2::zero(), 150.0, 0.4));
        let mut body = Body::at_rest(Vec2::new(5.0, 5.0));
        assert!(!body.repel(Vec2::new(5.0, 5.0), 150.0, 0.4));
        assert_eq!(body.vel, Vec2::zero());
    }

    #[test]
    fn negative_strength_attracts() {
        let mut body = Body::at_rest(Vec2::new(0.0, 10.0));
        body.repel(Vec2::zero(), 50.0, -1.0);
        assert!(body.vel.y < 0.0);
    }

    #[test]
    fn damping_then_integration() {
        let mut body = Body::new(Vec2::zero(), Vec2::new(4.0, -2.0));
        body.damp(0.5);
        body.integrate();
        assert_eq!(body.pos, Vec2::new(2.0, -1.0));
    }
}
