//! InkyPi button dispatcher library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection.  The Raspberry-Pi-specific GPIO adapter is behind the
//! `gpio` cargo feature; everything else runs on any host.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod events;

mod pins;

pub mod adapters;
pub mod drivers;
