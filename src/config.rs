//! Filter configuration.
//!
//! Settings are stored as TOML:
//!
//! ```toml
//! gate_percent = 65
//! seed = "optional text seed"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AolerError;

/// Default share of chat lines that get rewritten.
pub const DEFAULT_GATE_PERCENT: u8 = 65;

/// Configuration for the chat filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AolerConfig {
    /// Percentage (0-100) of lines the filter rewrites.
    pub gate_percent: u8,

    /// Text seed for reproducible output. Entropy is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
}

impl Default for AolerConfig {
    fn default() -> Self {
        Self {
            gate_percent: DEFAULT_GATE_PERCENT,
            seed: None,
        }
    }
}

impl AolerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, AolerError> {
        let config: AolerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a config file.
    pub fn load(path: &Path) -> Result<Self, AolerError> {
        let content = fs::read_to_string(path).map_err(|source| AolerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Serializes to TOML.
    pub fn to_toml(&self) -> Result<String, AolerError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Rejects a gate percentage above 100.
    pub fn validate(&self) -> Result<(), AolerError> {
        if self.gate_percent > 100 {
            return Err(AolerError::InvalidGatePercent(self.gate_percent));
        }
        Ok(())
    }
}
