//! System clock adapter.
//!
//! Implements [`Clock`] over the host's local wall time.  The AM/PM rule
//! deliberately follows whatever timezone the Pi is configured with —
//! there is no timezone knob in this process.

use chrono::{Local, Timelike};

use crate::app::ports::Clock;

/// Host-local wall clock.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn local_hour(&self) -> u8 {
        Local::now().hour() as u8
    }
}
