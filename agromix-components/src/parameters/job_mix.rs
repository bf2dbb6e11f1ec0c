//! Job mix parameters

use agromix_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the job mix calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobMixParameters {
    /// Total spray mixture (caldo) applied per hectare when the caller
    /// leaves it unset.
    ///
    /// unit: L/ha
    /// default: 10.0
    pub default_dose_caldo: FloatValue,
}

impl Default for JobMixParameters {
    fn default() -> Self {
        Self {
            default_dose_caldo: 10.0,
        }
    }
}
