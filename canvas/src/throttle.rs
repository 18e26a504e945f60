//! Minimum-interval gate for classification requests.
//!
//! Fast continuous pointer movement fires far more move events than the
//! model can usefully answer. The gate admits a request only when at least
//! `interval_ms` has elapsed since the previously admitted one. Time is
//! passed in by the caller (`Date.now()` in the browser) so the gate is
//! deterministic under test.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throttle {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(interval_ms: f64) -> Self {
        Self { interval_ms, last_ms: None }
    }

    /// Admit a request at `now_ms` if the interval has elapsed, recording it.
    ///
    /// The first request is always admitted. A clock that jumps backwards
    /// never admits until it catches up again.
    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_ms {
            if now_ms - last < self.interval_ms {
                return false;
            }
        }
        self.last_ms = Some(now_ms);
        true
    }

    /// Timestamp of the last admitted request.
    #[must_use]
    pub fn last_ms(&self) -> Option<f64> {
        self.last_ms
    }

    #[must_use]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}
