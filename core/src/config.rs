//! Validator configuration.
//!
//! The library never reads files or environment variables. A calling application
//! that keeps its settings in TOML can hand the relevant table to
//! [`ValidatorConfig::from_toml_str`]:
//!
//! ```toml
//! algorithm = "running-sum"
//! cross_check = true
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use toml::de::Error as TomlError;

use crate::validator::Algorithm;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid CPF validator config: {0}")]
    Parse(#[from] TomlError),
}

/// Settings for a [`Validator`](crate::Validator). Missing keys fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    pub algorithm: Algorithm,
    /// Run both algorithms and fail if they ever disagree.
    pub cross_check: bool,
}

impl ValidatorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        tracing::debug!(
            algorithm = config.algorithm.as_str(),
            cross_check = config.cross_check,
            "Loaded CPF validator config"
        );
        Ok(config)
    }
}
