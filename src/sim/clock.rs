//! Simulated time
//!
//! Spawn and difficulty pacing run off accumulated Playing time, never off
//! frame counts, so a variable display refresh rate cannot change them.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_MS, REFERENCE_FRAME_MS};

/// Monotonic simulated time in milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Clock {
    now_ms: f64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt_ms`; negative or non-finite deltas are ignored
    pub fn advance(&mut self, dt_ms: f64) {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.now_ms += dt_ms;
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

/// Periodic timer that fires once per whole interval of elapsed time.
///
/// The due time advances by exact multiples of the interval, so leftover time
/// from a long frame carries into the next period instead of being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalTimer {
    pub interval_ms: f64,
    next_due_ms: f64,
}

impl IntervalTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            next_due_ms: interval_ms,
        }
    }

    /// Number of intervals that completed up to `now_ms`
    pub fn poll(&mut self, now_ms: f64) -> u32 {
        if self.interval_ms.is_nan() || self.interval_ms <= 0.0 {
            return 0;
        }
        let mut fired = 0;
        while now_ms >= self.next_due_ms {
            self.next_due_ms += self.interval_ms;
            fired += 1;
        }
        fired
    }

    /// Start counting again from time zero
    pub fn reset(&mut self) {
        self.next_due_ms = self.interval_ms;
    }
}

/// Converts host timestamps (e.g. `requestAnimationFrame` time) into frame deltas
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous call, clamped to `[0, MAX_FRAME_MS]`.
    /// The first call has nothing to measure against and yields one reference frame.
    pub fn delta(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_ms {
            Some(prev) if now_ms.is_finite() => (now_ms - prev).clamp(0.0, MAX_FRAME_MS),
            Some(_) => 0.0,
            None => REFERENCE_FRAME_MS,
        };
        if now_ms.is_finite() {
            self.last_ms = Some(now_ms);
        }
        dt
    }
}
