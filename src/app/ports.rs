//! Port traits — the hexagonal boundary between dispatch logic and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Dispatcher (domain)
//! ```
//!
//! Driven adapters (systemd, the InkyPi HTTP endpoint, the system clock,
//! the log sink) implement these traits.  The
//! [`Dispatcher`](super::service::Dispatcher) consumes them via generics,
//! so the domain core never spawns a process or opens a socket directly.
//!
//! Every outbound call here is fire-and-forget: `Ok(())` means the call
//! was *launched*, not that it succeeded downstream.  Whatever the
//! downstream service does afterwards is invisible to this process.

use std::fmt;
use std::io;

use crate::config::PluginTarget;

// ───────────────────────────────────────────────────────────────
// Service control port (domain → service manager)
// ───────────────────────────────────────────────────────────────

/// Restart the display-rendering service.
pub trait ServiceControl {
    /// Launch the restart, detached.  Exit status is never inspected.
    fn restart(&mut self) -> Result<(), LaunchError>;
}

// ───────────────────────────────────────────────────────────────
// Display client port (domain → InkyPi web server)
// ───────────────────────────────────────────────────────────────

/// Ask the InkyPi server to render a plugin instance.
pub trait DisplayClient {
    /// Launch the render request, detached.  The HTTP response is never
    /// inspected.
    fn show(&mut self, target: &PluginTarget) -> Result<(), LaunchError>;
}

// ───────────────────────────────────────────────────────────────
// Clock port (domain → wall clock)
// ───────────────────────────────────────────────────────────────

/// Local wall-clock queries.  Host timezone as configured on the Pi.
pub trait Clock {
    /// Hour of day, 0–23.
    fn local_hour(&self) -> u8;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging)
// ───────────────────────────────────────────────────────────────

/// The dispatcher emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go — the serial
/// console today, anything else tomorrow.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// A fire-and-forget call could not even be launched.
///
/// This is the only failure the dispatcher ever sees: once a call is in
/// flight, its outcome belongs to the downstream service.
#[derive(Debug)]
pub enum LaunchError {
    /// Spawning the child process (or launcher thread) failed.
    Spawn(io::Error),
    /// The HTTP request could not be serialised or handed off.
    Http(String),
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(e) => write!(f, "spawn failed: {}", e),
            Self::Http(msg) => write!(f, "http launch failed: {}", msg),
        }
    }
}

impl std::error::Error for LaunchError {}

impl From<io::Error> for LaunchError {
    fn from(e: io::Error) -> Self {
        Self::Spawn(e)
    }
}
