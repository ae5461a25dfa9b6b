//! Wall-clock access
//!
//! Theme resolution depends on the local hour of day. The [`Clock`] trait
//! lets tests pin that hour instead of reading the system time.

use chrono::{Local, Timelike};
use std::sync::atomic::{AtomicU32, Ordering};

/// Source of the local hour of day (0-23)
pub trait Clock: Send + Sync {
    /// Current local hour, in `0..24`
    fn current_hour(&self) -> u32;
}

/// Clock backed by the system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Clock that always reports a configurable hour
#[derive(Debug, Default)]
pub struct FixedClock {
    hour: AtomicU32,
}

impl FixedClock {
    /// Create a clock pinned to `hour` (taken modulo 24)
    pub fn new(hour: u32) -> Self {
        Self { hour: AtomicU32::new(hour % 24) }
    }

    /// Move the clock to another hour (taken modulo 24)
    pub fn set_hour(&self, hour: u32) {
        self.hour.store(hour % 24, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn current_hour(&self) -> u32 {
        self.hour.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_in_range() {
        assert!(SystemClock.current_hour() < 24);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(7);
        assert_eq!(clock.current_hour(), 7);

        clock.set_hour(22);
        assert_eq!(clock.current_hour(), 22);

        clock.set_hour(25);
        assert_eq!(clock.current_hour(), 1);
    }
}
