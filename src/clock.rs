//! Isolates the wall-clock

use std::time::{SystemTime, UNIX_EPOCH};

#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Whole seconds since the Unix epoch
    fn unix_seconds(&self) -> u64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> u64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs(),
            Err(error) => {
                log::warn!("System clock is set before the Unix epoch ({error}), using 0");
                0
            }
        }
    }
}
