//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger.  Anything else that wants a feed of dispatch activity
//! would implement the same trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | dispatch loop serving");
            }
            AppEvent::Pressed { line, timestamp_ms } => {
                info!("PRESS | button {} at t+{}ms", line, timestamp_ms);
            }
            AppEvent::RestartLaunched => {
                info!("ACTION | service restart launched");
            }
            AppEvent::CalendarRequested { period, hour } => {
                info!("ACTION | {:?} calendar requested (hour {:02})", period, hour);
            }
            AppEvent::NoActionBound { line } => {
                info!("ACTION | button {} pressed, no action bound", line);
            }
            AppEvent::LaunchFailed { line, reason } => {
                warn!("ACTION | button {} launch failed: {}", line, reason);
            }
        }
    }
}
