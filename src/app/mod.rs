//! Application core — pure dispatch logic, zero I/O.
//!
//! This module contains the press-to-action rules: which line triggers
//! which action, and how the AM/PM calendar instance is chosen.  All
//! interaction with the outside world (systemd, the InkyPi web server,
//! the wall clock) happens through **port traits** defined in [`ports`],
//! keeping this layer fully testable without a Raspberry Pi.

pub mod events;
pub mod ports;
pub mod service;
