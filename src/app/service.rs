//! The action dispatcher — the hexagonal core.
//!
//! [`Dispatcher`] owns the line→action binding table and the two
//! calendar instances.  All I/O flows through port traits injected at
//! the call site, making the whole thing testable with mock adapters.
//!
//! ```text
//!  PressEvent ──▶ ┌────────────────────────┐ ──▶ ServiceControl
//!                 │       Dispatcher        │ ──▶ DisplayClient
//!      Clock ───▶ │  bindings · AM/PM rule  │ ──▶ EventSink
//!                 └────────────────────────┘
//! ```
//!
//! Dispatch is synchronous and strictly one press at a time: the caller
//! is the single channel consumer, so a handler always runs to
//! completion before the next press is looked at.  The *launched* calls
//! are detached, though — a second press on the same line while the
//! previous call is still in flight simply launches another independent
//! call.  No deduplication, by design.

use log::{info, warn};

use crate::config::{Action, DispatcherConfig, PluginTarget};
use crate::events::PressEvent;

use super::events::{AppEvent, DayPeriod};
use super::ports::{Clock, DisplayClient, EventSink, ServiceControl};

/// Maps debounced presses to their bound actions.
pub struct Dispatcher {
    bindings: [Action; 4],
    am_calendar: PluginTarget,
    pm_calendar: PluginTarget,
    press_count: u64,
}

impl Dispatcher {
    /// Build from configuration.  The binding table is fixed from here
    /// on — exactly one action per line.
    pub fn new(config: &DispatcherConfig) -> Self {
        Self {
            bindings: config.bindings,
            am_calendar: config.am_calendar.clone(),
            pm_calendar: config.pm_calendar.clone(),
            press_count: 0,
        }
    }

    /// Handle one debounced press: look up the bound action and launch
    /// it.  Never fails — a launch error degrades to a log line and the
    /// loop moves on to the next press.
    pub fn handle_press(
        &mut self,
        event: PressEvent,
        svc: &mut impl ServiceControl,
        display: &mut impl DisplayClient,
        clock: &impl Clock,
        sink: &mut impl EventSink,
    ) {
        self.press_count += 1;
        sink.emit(&AppEvent::Pressed {
            line: event.line,
            timestamp_ms: event.timestamp_ms,
        });

        match self.bindings[event.line.index()] {
            Action::RestartService => match svc.restart() {
                Ok(()) => sink.emit(&AppEvent::RestartLaunched),
                Err(e) => {
                    warn!("button {}: restart launch failed: {}", event.line, e);
                    sink.emit(&AppEvent::LaunchFailed {
                        line: event.line,
                        reason: e.to_string(),
                    });
                }
            },

            Action::ShowCalendar => {
                let hour = clock.local_hour();
                let (period, target) = self.select_target(hour);
                info!(
                    "button {}: hour {:02} → {:?} calendar '{}'",
                    event.line, hour, period, target.plugin_instance
                );
                match display.show(target) {
                    Ok(()) => sink.emit(&AppEvent::CalendarRequested { period, hour }),
                    Err(e) => {
                        warn!("button {}: calendar launch failed: {}", event.line, e);
                        sink.emit(&AppEvent::LaunchFailed {
                            line: event.line,
                            reason: e.to_string(),
                        });
                    }
                }
            }

            Action::Reserved => {
                info!("button {}: no action bound", event.line);
                sink.emit(&AppEvent::NoActionBound { line: event.line });
            }
        }
    }

    /// The time-of-day rule: hour < 12 picks the AM instance, everything
    /// else the PM instance.
    pub fn select_target(&self, hour: u8) -> (DayPeriod, &PluginTarget) {
        if hour < 12 {
            (DayPeriod::Am, &self.am_calendar)
        } else {
            (DayPeriod::Pm, &self.pm_calendar)
        }
    }

    /// Total presses dispatched since startup.
    pub fn press_count(&self) -> u64 {
        self.press_count
    }
}
