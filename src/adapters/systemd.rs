//! systemd restart adapter.
//!
//! Implements [`ServiceControl`] by spawning `systemctl restart <unit>`
//! detached: stdio nulled, exit status never inspected.  A throwaway
//! thread reaps the child so a long-lived daemon does not collect
//! zombies; the status it returns is dropped unread.

use std::process::{Command, Stdio};
use std::thread;

use log::{debug, info};

use crate::app::ports::{LaunchError, ServiceControl};

/// Restarts a fixed systemd unit, fire-and-forget.
pub struct SystemdControl {
    unit: String,
}

impl SystemdControl {
    pub fn new(unit: impl Into<String>) -> Self {
        Self { unit: unit.into() }
    }

    /// Unit this adapter restarts.
    pub fn unit(&self) -> &str {
        &self.unit
    }
}

impl ServiceControl for SystemdControl {
    fn restart(&mut self) -> Result<(), LaunchError> {
        let mut child = Command::new("systemctl")
            .args(["restart", &self.unit])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        info!("restart launched for {} (fire-and-forget)", self.unit);

        // Reap only — whether the restart worked is systemd's business.
        thread::spawn(move || {
            let _ = child.wait();
            debug!("restart child reaped");
        });

        Ok(())
    }
}
