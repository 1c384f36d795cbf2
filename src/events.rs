//! Press events and the watcher → dispatcher channel.
//!
//! The GPIO poll thread is the single producer; the dispatch loop in
//! `main` is the single consumer.  Events carry which line fired and a
//! monotonic timestamp, nothing else — they are consumed immediately and
//! never persisted.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ GPIO poll    │────▶│ mpsc channel │────▶│ Dispatch loop│
//! │ thread       │     │ (PressEvent) │     │ (consumer)   │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```

use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

/// One of the four physical input lines, top to bottom on the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    A,
    B,
    C,
    D,
}

impl Line {
    /// All lines in frame order.  Index positions match
    /// [`DispatcherConfig`](crate::config::DispatcherConfig) arrays.
    pub const ALL: [Line; 4] = [Line::A, Line::B, Line::C, Line::D];

    /// Stable index into per-line configuration arrays.
    pub fn index(self) -> usize {
        match self {
            Line::A => 0,
            Line::B => 1,
            Line::C => 2,
            Line::D => 3,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::A => write!(f, "A"),
            Line::B => write!(f, "B"),
            Line::C => write!(f, "C"),
            Line::D => write!(f, "D"),
        }
    }
}

/// A debounced button press.
///
/// `timestamp_ms` is milliseconds since the watcher started (monotonic,
/// not wall clock) — enough to order presses in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressEvent {
    pub line: Line,
    pub timestamp_ms: u64,
}

/// Create the watcher → dispatcher channel pair.
pub fn channel() -> (Sender<PressEvent>, Receiver<PressEvent>) {
    mpsc::channel()
}
