//! InkyPi display client adapter.
//!
//! Implements [`DisplayClient`] with a detached launcher thread: the
//! thread performs a blocking `POST <endpoint>` with the three-field
//! JSON body and `Content-Type: application/json`, then exits.  The
//! dispatcher gets `Ok(())` as soon as the thread is launched.
//!
//! A connection that cannot even be established is logged by the
//! launcher thread; whatever the server answers (2xx, 4xx, 5xx) is
//! dropped unread.  Overlapping presses launch overlapping requests —
//! no deduplication, no cancellation, matching the dispatch contract.

use std::thread;
use std::time::Duration;

use log::{debug, warn};

use crate::app::ports::{DisplayClient, LaunchError};
use crate::config::PluginTarget;

/// Outbound request timeout.  Purely protective for the launcher
/// thread — the dispatcher never waits on it either way.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Posts plugin-instance render requests to the InkyPi web server.
pub struct HttpDisplayClient {
    endpoint: String,
}

impl HttpDisplayClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint this adapter posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl DisplayClient for HttpDisplayClient {
    fn show(&mut self, target: &PluginTarget) -> Result<(), LaunchError> {
        let endpoint = self.endpoint.clone();
        let target = target.clone();

        thread::Builder::new()
            .name("display-post".into())
            .spawn(move || {
                let client = match reqwest::blocking::Client::builder()
                    .timeout(REQUEST_TIMEOUT)
                    .build()
                {
                    Ok(c) => c,
                    Err(e) => {
                        warn!("display request failed: building client: {}", e);
                        return;
                    }
                };
                // `json()` serialises the three fields and sets
                // Content-Type: application/json.
                match client.post(&endpoint).json(&target).send() {
                    Ok(_) => debug!("display request sent to {}", endpoint),
                    Err(e) => warn!("display request failed: {}", e),
                }
            })
            .map_err(LaunchError::Spawn)?;

        Ok(())
    }
}
