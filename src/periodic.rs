use embassy_time::{Duration, Instant};

/// "Every N milliseconds" gate for work that should not run every frame
///
/// Fires at most once per interval; missed ticks are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Periodic {
    interval: Duration,
    next: Option<Instant>,
}

impl Periodic {
    /// First tick fires one interval after the first `ready` call
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: None,
        }
    }

    /// First tick fires on the first `ready` call
    pub const fn immediate(interval: Duration) -> Self {
        Self {
            interval,
            next: Some(Instant::from_millis(0)),
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub fn ready(&mut self, now: Instant) -> bool {
        match self.next {
            Some(next) if now >= next => {
                self.next = Some(now + self.interval);
                true
            }
            Some(_) => false,
            None => {
                self.next = Some(now + self.interval);
                false
            }
        }
    }
}
