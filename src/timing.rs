use std::time::Instant;

/// Frame timing snapshot
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame
    pub delta: f32,
    /// Seconds since the clock started
    pub elapsed: f64,
}

#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let delta = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        FrameTime {
            delta,
            elapsed: now.saturating_duration_since(self.start).as_secs_f64(),
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Produces a frame rate line at most once per `interval` seconds
#[derive(Debug)]
pub struct FpsCounter {
    interval: f64,
    last_report: f64,
}

impl FpsCounter {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            last_report: 0.0,
        }
    }

    pub fn update(&mut self, time: FrameTime) -> Option<String> {
        if time.elapsed - self.last_report < self.interval || time.delta <= 0.0 {
            return None;
        }
        self.last_report = time.elapsed;
        Some(format!(
            "FPS: {:.1} Frame time: {:.3}ms",
            1.0 / time.delta,
            time.delta * 1000.0
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(elapsed: f64, delta: f32) -> FrameTime {
        FrameTime { delta, elapsed }
    }

    #[test]
    fn reports_once_per_interval() {
        let mut counter = FpsCounter::new(1.0);
        assert_eq!(counter.update(at(0.5, 0.01)), None);
        assert_eq!(
            counter.update(at(1.0, 0.01)).as_deref(),
            Some("FPS: 100.0 Frame time: 10.000ms")
        );
        assert_eq!(counter.update(at(1.5, 0.01)), None);
        assert!(counter.update(at(2.0, 0.02)).is_some());
    }

    #[test]
    fn zero_delta_is_skipped() {
        let mut counter = FpsCounter::new(1.0);
        assert_eq!(counter.update(at(3.0, 0.0)), None);
    }

    #[test]
    fn clock_is_monotonic() {
        let mut clock = FrameClock::new();
        let first = clock.tick();
        let second = clock.tick();
        assert!(first.delta >= 0.0);
        assert!(second.elapsed >= first.elapsed);
    }
}
