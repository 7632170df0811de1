use embassy_time::{Duration, Instant};

use crate::math8::{blend8, progress8};

/// Time-based linear fade of a `u8` level
#[derive(Debug, Clone)]
pub struct Fade {
    /// Level reported right now
    current: u8,
    /// Level at the moment the fade started
    source: u8,
    /// Level being faded to, `None` when idle
    target: Option<u8>,
    duration: Duration,
    start_time: Instant,
}

impl Fade {
    /// Create an idle fade resting at `initial`
    pub const fn new(initial: u8) -> Self {
        Self {
            current: initial,
            source: initial,
            target: None,
            duration: Duration::from_millis(0),
            start_time: Instant::from_millis(0),
        }
    }

    pub const fn current(&self) -> u8 {
        self.current
    }

    /// Level the fade ends at (the current level when idle)
    pub const fn target(&self) -> u8 {
        match self.target {
            Some(target) => target,
            None => self.current,
        }
    }

    pub const fn is_fading(&self) -> bool {
        self.target.is_some()
    }

    /// Start fading from the current level to `level`
    ///
    /// A zero duration jumps straight to `level`.
    pub fn set(&mut self, level: u8, duration: Duration, now: Instant) {
        self.start_time = now;
        if duration.as_millis() == 0 {
            self.current = level;
            self.source = level;
            self.target = None;
            self.duration = Duration::from_millis(0);
        } else {
            self.source = self.current;
            self.target = Some(level);
            self.duration = duration;
        }
    }

    /// Recompute the current level for `now`
    pub fn tick(&mut self, now: Instant) {
        let Some(target) = self.target else {
            return;
        };

        let elapsed = now.saturating_duration_since(self.start_time);
        if elapsed >= self.duration {
            self.current = target;
            self.source = target;
            self.target = None;
            return;
        }

        let progress = progress8(elapsed, self.duration);
        self.current = blend8(self.source, target, progress);
    }
}
