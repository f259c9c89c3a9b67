//! Explicit random source
//!
//! Every effect owns one `Rng` seeded at construction, so a fixed seed
//! replays the same animation.

use serde::{Deserialize, Serialize};

use super::math::TWO_PI;

const DEFAULT_SEED: u32 = 12345;

/// Xorshift32 generator
#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    /// Zero is a fixed point of xorshift, so it is replaced by a default seed.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }

    /// Uniform in `[0, 1)`
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u32() >> 8) as f64 / (1u32 << 24) as f64
    }

    /// Uniform in `[min, max)`
    #[inline]
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform in `[0, max)`
    #[inline]
    pub fn below(&mut self, max: f64) -> f64 {
        self.range(0.0, max)
    }

    #[inline]
    pub fn sample(&mut self, span: Span) -> f64 {
        self.range(span.min, span.max)
    }

    /// Heading in `[0, 2π)`
    #[inline]
    pub fn angle(&mut self) -> f64 {
        self.below(TWO_PI)
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Half-open `[min, max)` interval used by tuning tables
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}
