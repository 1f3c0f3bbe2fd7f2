/// Self-imposed rate limit for the particle loop.
///
/// The host calls in once per display frame; the throttle only lets a tick
/// through once `interval` seconds have elapsed since the last one, so the
/// update rate stays fixed regardless of the display refresh rate.
#[derive(Debug, Clone)]
pub struct FrameThrottle {
    /// Minimum time between ticks, in seconds.
    interval: f32,
    /// Time since the last tick fired.
    since_last: f32,
}

impl FrameThrottle {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            // First poll fires immediately.
            since_last: interval,
        }
    }

    /// Add frame time. Returns true when a tick is due.
    ///
    /// At most one tick fires per call; leftover time is dropped rather than
    /// queued, so a long stall never produces a burst of catch-up ticks.
    pub fn poll(&mut self, frame_dt: f32) -> bool {
        self.since_last += frame_dt.max(0.0);
        if self.since_last < self.interval {
            return false;
        }
        self.since_last = 0.0;
        true
    }

    /// Forget accumulated time; the next poll fires immediately.
    pub fn reset(&mut self) {
        self.since_last = self.interval;
    }

    /// Target interval between ticks.
    pub fn interval(&self) -> f32 {
        self.interval
    }
}

/// Trailing-edge debouncer: holds the most recent value and releases it once
/// no new value has arrived for `wait` seconds.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    wait: f32,
    quiet: f32,
    pending: Option<T>,
}

impl<T> Debounce<T> {
    pub fn new(wait: f32) -> Self {
        Self {
            wait,
            quiet: 0.0,
            pending: None,
        }
    }

    /// Record a new value, restarting the quiet period.
    pub fn push(&mut self, value: T) {
        self.pending = Some(value);
        self.quiet = 0.0;
    }

    /// Advance time. Returns the pending value once the quiet period has passed.
    pub fn poll(&mut self, frame_dt: f32) -> Option<T> {
        self.pending.as_ref()?;
        self.quiet += frame_dt.max(0.0);
        if self.quiet < self.wait {
            return None;
        }
        self.quiet = 0.0;
        self.pending.take()
    }

    /// Whether a value is waiting to be released.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Release the pending value now, without waiting out the quiet period.
    pub fn flush(&mut self) -> Option<T> {
        self.quiet = 0.0;
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_poll_fires() {
        let mut t = FrameThrottle::new(0.1);
        assert!(t.poll(0.0));
    }

    #[test]
    fn throttles_to_interval() {
        let mut t = FrameThrottle::new(0.1);
        assert!(t.poll(0.016));
        let mut fired = 0;
        // 60 frames at ~60 Hz is one second: expect ~10 ticks.
        for _ in 0..60 {
            if t.poll(1.0 / 60.0) {
                fired += 1;
            }
        }
        assert!((9..=10).contains(&fired), "fired {} times", fired);
    }

    #[test]
    fn long_stall_fires_once() {
        let mut t = FrameThrottle::new(0.1);
        t.poll(0.0);
        assert!(t.poll(5.0));
        assert!(!t.poll(0.01));
    }

    #[test]
    fn reset_rearms() {
        let mut t = FrameThrottle::new(0.1);
        t.poll(0.0);
        assert!(!t.poll(0.01));
        t.reset();
        assert!(t.poll(0.0));
    }

    #[test]
    fn debounce_releases_last_value_after_quiet() {
        let mut d = Debounce::new(0.25);
        d.push(1);
        assert_eq!(d.poll(0.1), None);
        d.push(2);
        assert_eq!(d.poll(0.2), None);
        assert_eq!(d.poll(0.1), Some(2));
        assert!(!d.is_pending());
        assert_eq!(d.poll(1.0), None);
    }

    #[test]
    fn debounce_flush_releases_early() {
        let mut d = Debounce::new(0.25);
        assert_eq!(d.flush(), None::<&str>);
        d.push("resize");
        assert_eq!(d.poll(0.1), None);
        assert_eq!(d.flush(), Some("resize"));
        assert_eq!(d.poll(1.0), None);
    }
}
