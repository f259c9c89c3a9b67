//! Lap stopwatch splitting a frame into its update and draw halves
//!
//! Browser builds read `Date.now()`; native builds read `Instant`.

#[cfg(target_arch = "wasm32")]
type Mark = f64;
#[cfg(not(target_arch = "wasm32"))]
type Mark = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn mark() -> Mark {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn mark() -> Mark {
    std::time::Instant::now()
}

// Date.now() can step backwards when the system clock is adjusted.
#[cfg(target_arch = "wasm32")]
fn millis_between(from: Mark, to: Mark) -> f64 {
    (to - from).max(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
fn millis_between(from: Mark, to: Mark) -> f64 {
    to.saturating_duration_since(from).as_secs_f64() * 1000.0
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    last: Mark,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { last: mark() }
    }

    /// Milliseconds since start or the previous lap
    pub(crate) fn lap(&mut self) -> f64 {
        let now = mark();
        let millis = millis_between(self.last, now);
        self.last = now;
        millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laps_split_the_elapsed_time() {
        let mut outer = PerfTimer::start();
        let mut timer = PerfTimer::start();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let first = timer.lap();
        let second = timer.lap();
        let total = outer.lap();

        assert!(first >= 2.0);
        assert!(second >= 0.0);
        assert!(first + second <= total + 1e-6);
    }
}
