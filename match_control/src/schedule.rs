//! Deferred actions for the match flow.
//!
//! Match-flow delays (goal re-serve, tie-to-sudden-death transition,
//! speed-up expiry, the power-up spawn loop) are expressed as countdown slots
//! driven by whichever clock the owner ticks them with: the controller
//! feeds real frame time to the delays that must survive a pause, and
//! simulation time to the ones that must freeze with it.

/// A single-slot cancelable countdown. Starting a new delay replaces any
/// outstanding one; invalidating the slot before it fires is the only
/// form of cancellation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelaySlot {
    remaining: Option<f32>,
}

impl DelaySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, delay: f32) {
        self.remaining = Some(delay.max(0.0));
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance by `dt`. Returns true exactly once, on the tick the delay
    /// elapses.
    pub fn tick(&mut self, dt: f32) -> bool {
        match self.remaining {
            Some(left) => {
                let left = left - dt;
                if left <= 0.0 {
                    self.remaining = None;
                    true
                } else {
                    self.remaining = Some(left);
                    false
                }
            }
            None => false,
        }
    }
}

/// Repeating countdown for the power-up spawn loop: first fire after
/// `interval / 2`, every `interval` after that.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnTimer {
    interval: f32,
    next_in: Option<f32>,
}

impl SpawnTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, interval: f32) {
        self.interval = interval;
        self.next_in = Some(interval / 2.0);
    }

    pub fn stop(&mut self) {
        self.next_in = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_in.is_some()
    }

    /// Advance by `dt`. Returns true on each fire and re-arms for the
    /// full interval.
    pub fn tick(&mut self, dt: f32) -> bool {
        match self.next_in {
            Some(left) => {
                let left = left - dt;
                if left <= 0.0 {
                    self.next_in = Some(self.interval);
                    true
                } else {
                    self.next_in = Some(left);
                    false
                }
            }
            None => false,
        }
    }
}
