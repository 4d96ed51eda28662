use std::time::{Duration, Instant};

/// Derives the per-frame time delta from successive timestamps.
///
/// Frames that stall (or that arrive after a long suspension) are passed through as-is; the game
/// simply moves a little further that frame.
#[derive(Debug)]
pub struct Clock {
    last: Instant,
}

impl Clock {
    /// Start the clock at `now`.
    pub fn new(now: Instant) -> Clock {
        Clock { last: now }
    }

    /// Compute the time elapsed since the previous tick and remember `now` for the next one.
    ///
    /// A timestamp earlier than the previous tick yields a zero delta.
    pub fn tick(&mut self, now: Instant) -> Duration {
        let dt = now.saturating_duration_since(self.last);
        self.last = now;

        dt
    }
}
