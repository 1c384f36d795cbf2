//! Outbound application events.
//!
//! The [`Dispatcher`](super::service::Dispatcher) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  The adapter on the other
//! side decides what to do with them — today that is
//! [`LogEventSink`](crate::adapters::log_sink::LogEventSink) writing log
//! lines; tests record them instead.

use crate::events::Line;

/// Which half of the day the calendar rule picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    Am,
    Pm,
}

/// Structured events emitted by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The dispatch loop is up and serving.
    Started,

    /// A debounced press arrived from the watcher.
    Pressed { line: Line, timestamp_ms: u64 },

    /// The service restart was launched.
    RestartLaunched,

    /// A calendar render request was launched.
    CalendarRequested { period: DayPeriod, hour: u8 },

    /// The pressed line has no action bound.
    NoActionBound { line: Line },

    /// An outbound call could not be launched.  The dispatcher carries
    /// on; `reason` is for the log only.
    LaunchFailed { line: Line, reason: String },
}
