//! Cubic-bezier timing curves (CSS `cubic-bezier(x1, y1, x2, y2)`)

const NEWTON_ITERATIONS: usize = 4;
const NEWTON_MIN_SLOPE: f64 = 0.001;
const SUBDIVISION_PRECISION: f64 = 1e-7;
const SUBDIVISION_MAX_ITERATIONS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// CSS `ease-in-out`
    pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for linear progress `x`; input is clamped to `[0, 1]`.
    pub fn get(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if self.x1 == self.y1 && self.x2 == self.y2 {
            return x;
        }
        if x == 0.0 || x == 1.0 {
            return x;
        }
        sample(self.y1, self.y2, self.t_for_x(x))
    }

    fn t_for_x(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let slope = slope(self.x1, self.x2, t);
            if slope.abs() < NEWTON_MIN_SLOPE {
                return self.bisect(x);
            }
            let current = sample(self.x1, self.x2, t) - x;
            t -= current / slope;
        }
        if (sample(self.x1, self.x2, t) - x).abs() > SUBDIVISION_PRECISION {
            return self.bisect(x);
        }
        t.clamp(0.0, 1.0)
    }

    fn bisect(&self, x: f64) -> f64 {
        let (mut lo, mut hi) = (0.0, 1.0);
        let mut t = x;
        for _ in 0..SUBDIVISION_MAX_ITERATIONS * 4 {
            t = lo + (hi - lo) / 2.0;
            let current = sample(self.x1, self.x2, t) - x;
            if current.abs() <= SUBDIVISION_PRECISION {
                break;
            }
            if current > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
        }
        t
    }
}

// Bezier polynomial with endpoints fixed at 0 and 1.
#[inline]
fn sample(a1: f64, a2: f64, t: f64) -> f64 {
    let a = 1.0 - 3.0 * a2 + 3.0 * a1;
    let b = 3.0 * a2 - 6.0 * a1;
    let c = 3.0 * a1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn slope(a1: f64, a2: f64, t: f64) -> f64 {
    let a = 1.0 - 3.0 * a2 + 3.0 * a1;
    let b = 3.0 * a2 - 6.0 * a1;
    let c = 3.0 * a1;
    3.0 * a * t * t + 2.0 * b * t + c
}
