//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements     | Connects to                    |
//! |------------|----------------|--------------------------------|
//! | `gpio`     | (event source) | rppal input pins, poll thread  |
//! | `systemd`  | ServiceControl | `systemctl restart`            |
//! | `http`     | DisplayClient  | InkyPi web server (POST)       |
//! | `clock`    | Clock          | host-local wall clock          |
//! | `log_sink` | EventSink      | log output                     |

pub mod clock;
#[cfg(feature = "gpio")]
pub mod gpio;
pub mod http;
pub mod log_sink;
pub mod systemd;
