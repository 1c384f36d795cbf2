//! Dispatcher configuration.
//!
//! Everything tunable lives here: pin assignments, the debounce window,
//! the InkyPi endpoint, the systemd unit to restart, the AM/PM calendar
//! instances, and which action each button is bound to.  The struct is
//! built once at startup and passed by reference from then on — there is
//! no runtime reconfiguration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::pins;

/// Default on-disk location.  Missing file means compiled-in defaults.
const CONFIG_FILE: &str = "/etc/inkypi/buttons.json";

/// A (playlist, plugin, instance) triple identifying one plugin instance
/// on the InkyPi server.  Serialises to exactly the three-field JSON body
/// the `/display_plugin_instance` endpoint expects — field order matters
/// to nobody but the humans reading packet captures, and matches the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginTarget {
    pub playlist_name: String,
    pub plugin_id: String,
    pub plugin_instance: String,
}

/// What a button press does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Restart the main InkyPi systemd unit.
    RestartService,
    /// Ask the InkyPi server to render the AM or PM calendar instance,
    /// chosen by local hour.
    ShowCalendar,
    /// No action bound (spare button).
    Reserved,
}

/// Core dispatcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    // --- Input lines ---
    /// BCM pin numbers for buttons A–D, in frame order.
    pub button_pins: [u8; 4],
    /// Debounce window in milliseconds.
    pub debounce_ms: u64,
    /// GPIO poll interval in milliseconds.
    pub sample_interval_ms: u64,

    // --- Actions ---
    /// Action bound to each line, same order as `button_pins`.
    /// Exactly one action per line, fixed for the process lifetime.
    pub bindings: [Action; 4],

    // --- Downstream collaborators ---
    /// InkyPi web server endpoint for plugin-instance rendering.
    pub endpoint_url: String,
    /// systemd unit restarted by [`Action::RestartService`].
    pub restart_unit: String,

    // --- Calendar instances ---
    /// Shown when the local hour is before 12.
    pub am_calendar: PluginTarget,
    /// Shown from 12:00 onwards.
    pub pm_calendar: PluginTarget,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            button_pins: [
                pins::BUTTON_A_GPIO,
                pins::BUTTON_B_GPIO,
                pins::BUTTON_C_GPIO,
                pins::BUTTON_D_GPIO,
            ],
            debounce_ms: pins::DEBOUNCE_MS,
            sample_interval_ms: pins::SAMPLE_INTERVAL_MS,
            bindings: [
                Action::RestartService,
                Action::ShowCalendar,
                Action::Reserved,
                Action::Reserved,
            ],
            endpoint_url: "http://localhost/display_plugin_instance".to_string(),
            restart_unit: "inkypi.service".to_string(),
            am_calendar: PluginTarget {
                playlist_name: "AM".to_string(),
                plugin_id: "calendar".to_string(),
                plugin_instance: "am Meetings".to_string(),
            },
            pm_calendar: PluginTarget {
                playlist_name: "pm".to_string(),
                plugin_id: "calendar".to_string(),
                // Instance names must match the InkyPi UI exactly,
                // misspelling included.
                plugin_instance: "PM Calander".to_string(),
            },
        }
    }
}

impl DispatcherConfig {
    /// Load from the default config file, or defaults if it is absent.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load from a specific path, or defaults if it is absent.
    /// An unreadable or invalid file is an error — startup should fail
    /// loudly rather than run with half-applied settings.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Sanity-check the table before anything binds to hardware.
    pub fn validate(&self) -> Result<()> {
        if self.debounce_ms == 0 {
            bail!("debounce_ms must be non-zero");
        }
        if self.sample_interval_ms == 0 || self.sample_interval_ms >= self.debounce_ms {
            bail!(
                "sample_interval_ms ({}) must be non-zero and shorter than debounce_ms ({})",
                self.sample_interval_ms,
                self.debounce_ms
            );
        }
        for (i, a) in self.button_pins.iter().enumerate() {
            if self.button_pins[i + 1..].contains(a) {
                bail!("pin {} assigned to more than one button", a);
            }
        }
        if self.endpoint_url.is_empty() {
            bail!("endpoint_url must not be empty");
        }
        if self.restart_unit.is_empty() {
            bail!("restart_unit must not be empty");
        }
        Ok(())
    }
}
