//! 2D vector math shared by the particle variants

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub};

pub const TWO_PI: f64 = std::f64::consts::TAU;
pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;

/// 2D vector / point in canvas pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector for heading `theta`, measured the way the effects use it
    /// (x = sin, y = cos).
    pub fn from_heading(theta: f64) -> Self {
        Self { x: theta.sin(), y: theta.cos() }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Scale down to `max` length, keeping direction
    pub fn clamp_length(self, max: f64) -> Self {
        let len = self.length();
        if len > max && len > 0.0 {
            self * (max / len)
        } else {
            self
        }
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

/// Offset between two points together with its length
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distance {
    pub dx: f64,
    pub dy: f64,
    pub magnitude: f64,
}

impl Distance {
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }
}

/// `a - b` plus its euclidean length
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> Distance {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    Distance {
        dx,
        dy,
        magnitude: (dx * dx + dy * dy).sqrt(),
    }
}

/// Wrap `value` into `[0, extent)`.
///
/// `rem_euclid` can round up to exactly `extent` for tiny negative inputs, so
/// that case folds back to 0.
#[inline]
pub fn wrap(value: f64, extent: f64) -> f64 {
    if extent <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}
