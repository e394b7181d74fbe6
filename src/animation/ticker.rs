// src/animation/ticker.rs
//
// Fixed-interval tick source driven by the host's frame clock.
// The host reports elapsed time each frame; the ticker hands back how many
// ticks fell due since the last poll.

use std::time::Duration;

/// Upper bound on ticks replayed by a single poll after a stalled frame.
const MAX_TICKS_PER_POLL: u32 = 8;

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: f32,
    accumulator: f32,
    running: bool,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f32(),
            accumulator: 0.0,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begins the repeating loop. Returns false if it was already running,
    /// in which case nothing changes.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.accumulator = 0.0;
        tracing::trace!("ticker started ({}s interval)", self.interval);
        true
    }

    /// Cancels future ticks. Returns false if it was not running.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.accumulator = 0.0;
        tracing::trace!("ticker stopped");
        true
    }

    /// Feeds `dt` seconds of wall-clock time and returns the number of ticks
    /// now due. Always 0 while stopped.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !self.running || dt <= 0.0 {
            return 0;
        }
        self.accumulator += dt;

        let mut due = 0;
        while self.accumulator >= self.interval && due < MAX_TICKS_PER_POLL {
            self.accumulator -= self.interval;
            due += 1;
        }
        if due == MAX_TICKS_PER_POLL {
            // drop the backlog rather than fast-forwarding through it
            self.accumulator = self.accumulator.min(self.interval);
        }
        due
    }
}
