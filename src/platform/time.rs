//! Frame clock

/// Tracks the previous frame timestamp and hands out deltas in milliseconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clock {
    last: f64,
}

impl Clock {
    /// Start counting from `start_ms` (usually `performance.now()`)
    pub fn new(start_ms: f64) -> Self {
        Self { last: start_ms }
    }

    /// Advance to `now_ms` and return the elapsed time.
    ///
    /// A timestamp older than the previous one yields 0, never a negative delta.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let delta = (now_ms - self.last).max(0.0);
        self.last = now_ms;
        delta
    }

    /// Timestamp of the last frame
    pub fn last(&self) -> f64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_reports_elapsed() {
        let mut clock = Clock::new(100.0);
        assert_eq!(clock.tick(116.5), 16.5);
        assert_eq!(clock.tick(150.0), 33.5);
        assert_eq!(clock.last(), 150.0);
    }

    #[test]
    fn test_tick_clamps_backwards_time() {
        // rAF can report a time before the startup performance.now()
        let mut clock = Clock::new(100.0);
        assert_eq!(clock.tick(95.0), 0.0);
        assert_eq!(clock.last(), 95.0);
        assert_eq!(clock.tick(105.0), 10.0);
    }
}
