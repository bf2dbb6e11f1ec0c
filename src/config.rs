//! Calculator configuration.
//!
//! Defaults for every calculator live in one TOML document. Missing tables
//! and keys fall back to the parameter defaults, so an empty file is valid.
//!
//! ```toml
//! [job]
//! default_dose_caldo = 10.0
//!
//! [hectares_guard]
//! notify = true
//! ```

use agromix_components::components::{HectaresGuard, JobCalculator};
use agromix_components::parameters::{HectaresGuardParameters, JobMixParameters};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Could not serialise configuration: {0}")]
    Serialise(#[from] toml::ser::Error),
}

/// Convenience type for `Result<T, ConfigError>`.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgroMixConfig {
    pub job: JobMixParameters,
    pub hectares_guard: HectaresGuardParameters,
}

impl AgroMixConfig {
    pub fn from_toml_str(input: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded calculator configuration");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn job_calculator(&self) -> JobCalculator {
        JobCalculator::from_parameters(self.job.clone())
    }

    pub fn hectares_guard(&self) -> HectaresGuard {
        HectaresGuard::from_parameters(self.hectares_guard.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AgroMixConfig::from_toml_str("").unwrap();
        assert_eq!(config, AgroMixConfig::default());
        assert!((config.job.default_dose_caldo - 10.0).abs() < 1e-10);
        assert!(config.hectares_guard.notify);
    }

    #[test]
    fn test_partial_document() {
        let config = AgroMixConfig::from_toml_str("[hectares_guard]\nnotify = false\n").unwrap();
        assert!(!config.hectares_guard.notify);
        assert!((config.job.default_dose_caldo - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_round_trip() {
        let mut config = AgroMixConfig::default();
        config.job.default_dose_caldo = 12.5;

        let serialised = config.to_toml_string().unwrap();
        let deserialised = AgroMixConfig::from_toml_str(&serialised).unwrap();
        assert_eq!(config, deserialised);
    }

    #[test]
    fn test_invalid_document() {
        let result = AgroMixConfig::from_toml_str("[job]\ndefault_dose_caldo = \"many\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = AgroMixConfig::from_file("/nonexistent/agromix.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
