use crate::core::utils::console::{self, Level};

use super::context::FrameContext;

/// Minimum time between two reports
const REPORT_INTERVAL_MS: f64 = 500.0;
const ERROR_BELOW: u32 = 20;
const WARN_BELOW: u32 = 25;
/// At or above this rate nothing is worth reporting
const QUIET_FROM: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FpsReading {
    pub fps: u32,
    pub level: Level,
}

/// Console level for a frame rate; `None` when it is fast enough to stay
/// quiet
pub fn classify(fps: u32) -> Option<Level> {
    match fps {
        f if f < ERROR_BELOW => Some(Level::Error),
        f if f < WARN_BELOW => Some(Level::Warn),
        f if f < QUIET_FROM => Some(Level::Log),
        _ => None,
    }
}

/// Rate-limited frame-rate reporter, one per effect
#[derive(Clone, Debug, Default)]
pub struct FpsMonitor {
    last_report: Option<f64>,
}

impl FpsMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log the current frame rate if due. Returns what was logged.
    pub fn observe(&mut self, name: &str, frame: &FrameContext, enabled: bool) -> Option<FpsReading> {
        if !enabled || frame.dt <= 0.0 {
            return None;
        }
        if let Some(last) = self.last_report {
            if last + REPORT_INTERVAL_MS >= frame.millis {
                return None;
            }
        }
        self.last_report = Some(frame.millis);

        let fps = (1000.0 / frame.dt).floor() as u32;
        let level = classify(fps)?;
        console::write(level, &format!("{} {}", fps, name));
        Some(FpsReading { fps, level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(millis: f64, dt: f64) -> FrameContext {
        FrameContext { width: 10.0, height: 10.0, millis, dt }
    }

    #[test]
    fn levels_by_rate() {
        assert_eq!(classify(12), Some(Level::Error));
        assert_eq!(classify(20), Some(Level::Warn));
        assert_eq!(classify(60), Some(Level::Log));
        assert_eq!(classify(100), None);
    }

    #[test]
    fn reports_at_most_every_half_second() {
        let mut monitor = FpsMonitor::new();
        let first = monitor.observe("river", &frame(0.0, 40.0), true);
        assert_eq!(first, Some(FpsReading { fps: 25, level: Level::Log }));
        assert_eq!(monitor.observe("river", &frame(400.0, 40.0), true), None);
        assert_eq!(monitor.observe("river", &frame(500.0, 40.0), true), None);
        let later = monitor.observe("river", &frame(501.0, 60.0), true);
        assert_eq!(later.map(|r| r.level), Some(Level::Error));
    }

    #[test]
    fn silent_when_disabled_or_without_a_frame_time() {
        let mut monitor = FpsMonitor::new();
        assert_eq!(monitor.observe("stripes", &frame(0.0, 40.0), false), None);
        assert_eq!(monitor.observe("stripes", &frame(0.0, 0.0), true), None);
    }
}
