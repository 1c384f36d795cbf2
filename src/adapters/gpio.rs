//! GPIO watcher — binds the four button lines and produces press events.
//!
//! Claims each configured BCM pin as a pull-up input via rppal, then runs
//! a polling thread: every sample interval it reads all four levels,
//! feeds them through one [`ButtonDebouncer`] per line, and sends each
//! qualifying press into the watcher → dispatcher channel.
//!
//! Failure to claim any line is fatal — the caller propagates the error
//! and the process exits before the dispatch loop ever starts.  Once
//! running, the thread lives for the lifetime of the process; it only
//! returns if the dispatcher side of the channel goes away.

use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{debug, info};
use rppal::gpio::{Gpio, InputPin};

use crate::config::DispatcherConfig;
use crate::drivers::button::ButtonDebouncer;
use crate::events::{Line, PressEvent};

/// Owns the claimed input pins and the per-line debouncers.
pub struct GpioWatcher {
    pins: [InputPin; 4],
    debouncers: [ButtonDebouncer; 4],
    sample_interval: Duration,
}

impl GpioWatcher {
    /// Claim all four lines as pull-up inputs.
    pub fn claim(config: &DispatcherConfig) -> Result<Self> {
        let gpio = Gpio::new().context("opening GPIO controller")?;

        let mut claimed = Vec::with_capacity(4);
        for (line, &bcm) in Line::ALL.iter().zip(&config.button_pins) {
            let pin = gpio
                .get(bcm)
                .with_context(|| format!("claiming GPIO {} for button {}", bcm, line))?
                .into_input_pullup();
            debug!("button {} on GPIO {} (pull-up, active-low)", line, bcm);
            claimed.push(pin);
        }
        let pins: [InputPin; 4] = claimed
            .try_into()
            .map_err(|_| anyhow::anyhow!("expected exactly four button pins"))?;

        Ok(Self {
            pins,
            debouncers: std::array::from_fn(|_| ButtonDebouncer::new(config.debounce_ms)),
            sample_interval: Duration::from_millis(config.sample_interval_ms),
        })
    }

    /// Start the polling thread.  Consumes the watcher; the thread owns
    /// the pins from here on.
    pub fn spawn(mut self, tx: Sender<PressEvent>) -> JoinHandle<()> {
        thread::spawn(move || {
            info!("GPIO watcher running ({:?} sample interval)", self.sample_interval);
            let start = Instant::now();
            loop {
                let now_ms = start.elapsed().as_millis() as u64;
                for (i, line) in Line::ALL.iter().enumerate() {
                    // Active-low: a low level means the button is down.
                    let pressed = self.pins[i].is_low();
                    if let Some(timestamp_ms) = self.debouncers[i].sample(pressed, now_ms) {
                        let event = PressEvent {
                            line: *line,
                            timestamp_ms,
                        };
                        if tx.send(event).is_err() {
                            // Dispatcher is gone; nothing left to serve.
                            info!("GPIO watcher stopping: event channel closed");
                            return;
                        }
                    }
                }
                thread::sleep(self.sample_interval);
            }
        })
    }
}
