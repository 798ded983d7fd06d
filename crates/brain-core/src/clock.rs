//! Pausable frame clock.
//!
//! Mirrors a three.js `Clock`: `tick` returns the seconds since the previous
//! tick and accumulates elapsed time. While stopped every tick returns 0 and
//! the stopped interval never shows up in elapsed time.

use instant::Instant;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Clock {
    last: Option<Instant>,
    elapsed: f32,
    running: bool,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    /// A running clock whose first tick returns 0.
    pub fn new() -> Self {
        Self {
            last: None,
            elapsed: 0.0,
            running: true,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed running time in seconds.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        if !self.running {
            return 0.0;
        }
        let delta = match self.last {
            Some(last) => since(last, now).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        self.elapsed += delta;
        delta
    }

    /// Stop the clock, counting time up to `now`.
    pub fn stop_at(&mut self, now: Instant) {
        if self.running {
            self.tick_at(now);
            self.running = false;
        }
    }

    /// Restart the clock. The next delta is measured from `now`.
    pub fn start_at(&mut self, now: Instant) {
        if !self.running {
            self.running = true;
            self.last = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.stop_at(Instant::now());
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }
}

// Instants are monotonic, but guard against equal or reordered readings.
#[inline]
fn since(last: Instant, now: Instant) -> Duration {
    if now > last {
        now - last
    } else {
        Duration::ZERO
    }
}
