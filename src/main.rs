//! InkyPi button daemon — main entry point.
//!
//! Hexagonal wiring for the press-to-action dispatcher:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                   │
//! │                                                            │
//! │  GpioWatcher      SystemdControl   HttpDisplayClient       │
//! │  (rppal inputs)   (ServiceControl) (DisplayClient)         │
//! │  SystemClock      LogEventSink                             │
//! │  (Clock)          (EventSink)                              │
//! │                                                            │
//! │  ──────────────── Port Trait Boundary ─────────────────    │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │            Dispatcher (pure logic)                   │  │
//! │  │  line→action bindings · AM/PM calendar rule          │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The watcher thread produces debounced presses into an mpsc channel;
//! this thread consumes them one at a time.  Shutdown is by external
//! SIGINT/SIGTERM with the default disposition — nothing is ever
//! awaited, so there is no drain step.

#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use inkypi_buttons::adapters::clock::SystemClock;
use inkypi_buttons::adapters::gpio::GpioWatcher;
use inkypi_buttons::adapters::http::HttpDisplayClient;
use inkypi_buttons::adapters::log_sink::LogEventSink;
use inkypi_buttons::adapters::systemd::SystemdControl;
use inkypi_buttons::app::events::AppEvent;
use inkypi_buttons::app::ports::EventSink;
use inkypi_buttons::app::service::Dispatcher;
use inkypi_buttons::config::DispatcherConfig;
use inkypi_buttons::events;

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("╔══════════════════════════════════════╗");
    info!("║  inkypi-buttons v{}               ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration (file or compiled-in defaults) ──────
    let config = DispatcherConfig::load()?;
    info!(
        "pins A–D = {:?}, debounce {}ms, unit '{}', endpoint {}",
        config.button_pins, config.debounce_ms, config.restart_unit, config.endpoint_url
    );

    // ── 3. Claim GPIO — fatal before serving ──────────────────
    let watcher = GpioWatcher::claim(&config)?;

    // ── 4. Construct adapters ─────────────────────────────────
    let mut svc = SystemdControl::new(config.restart_unit.clone());
    let mut display = HttpDisplayClient::new(config.endpoint_url.clone());
    let clock = SystemClock::new();
    let mut sink = LogEventSink::new();

    // ── 5. Dispatcher core ────────────────────────────────────
    let mut dispatcher = Dispatcher::new(&config);

    // ── 6. Watcher thread ─────────────────────────────────────
    let (tx, rx) = events::channel();
    let _watcher_thread = watcher.spawn(tx);

    // ── 7. Dispatch loop ──────────────────────────────────────
    sink.emit(&AppEvent::Started);
    info!(
        "bindings: A={:?} B={:?} C={:?} D={:?}",
        config.bindings[0], config.bindings[1], config.bindings[2], config.bindings[3]
    );

    for event in rx {
        dispatcher.handle_press(event, &mut svc, &mut display, &clock, &mut sink);
    }

    // The receiver only runs dry if the watcher thread died.
    anyhow::bail!("GPIO watcher stopped unexpectedly")
}
