//! De-duplicated diagnostic sink.
//!
//! Degraded capabilities and normalization timeouts are reported once per event
//! key instead of once per call. The sink is passed explicitly to the pipeline
//! and is safe to share between threads.

use log::warn;
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct Diagnostics {
    seen: Mutex<HashSet<String>>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs `message` at warn level the first time `event` is reported.
    /// Returns true when this call was the first.
    pub fn warn_once(&self, event: &str, message: &str) -> bool {
        // A poisoned set only ever lost an insert; keep using it.
        let mut seen = self.seen.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if seen.insert(event.to_string()) {
            warn!("[{}] {}", event, message);
            true
        } else {
            false
        }
    }

    pub fn has_seen(&self, event: &str) -> bool {
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(event)
    }
}
