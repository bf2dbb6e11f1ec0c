//! Hectares-done guard parameters

use serde::{Deserialize, Serialize};

/// Parameters for the hectares-done guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HectaresGuardParameters {
    /// Whether an exceeded surface is reported through the notifier.
    ///
    /// The check itself always runs; disabling only silences the
    /// advisory notification.
    ///
    /// default: true
    pub notify: bool,
}

impl Default for HectaresGuardParameters {
    fn default() -> Self {
        Self { notify: true }
    }
}
