// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable time handling

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A clock that provides the current wall-clock time
pub trait Clock: Clone + Send + Sync {
    /// Microseconds since the Unix epoch.
    fn epoch_us(&self) -> u64;

    /// Epoch seconds with a six-digit fractional part, e.g. `1718000000.123456`.
    fn timestamp(&self) -> String {
        let us = self.epoch_us();
        format!("{}.{:06}", us / 1_000_000, us % 1_000_000)
    }
}

/// Real system clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn epoch_us(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_micros() as u64
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone, Debug)]
pub struct FakeClock {
    epoch_us: Arc<Mutex<u64>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            epoch_us: Arc::new(Mutex::new(1_700_000_000_000_000)),
        }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        *self.epoch_us.lock() += duration.as_micros() as u64;
    }

    /// Set the epoch microseconds value
    pub fn set_epoch_us(&self, us: u64) {
        *self.epoch_us.lock() = us;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn epoch_us(&self) -> u64 {
        *self.epoch_us.lock()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
