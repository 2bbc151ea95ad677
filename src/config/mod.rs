//! Accumulator configuration
//!
//! Configuration can be built in code, deserialized with serde, or loaded from
//! a TOML file:
//!
//! ```toml
//! max_action_len = 64
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default maximum length of an action name, in characters
pub const MAX_ACTION_LEN: usize = 255;

/// Settings applied by an [`crate::stats::Accumulator`] when validating events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccumulatorConfig {
    /// Maximum permitted length of the `action` field, in characters
    pub max_action_len: usize,
}

impl Default for AccumulatorConfig {
    fn default() -> Self {
        Self {
            max_action_len: MAX_ACTION_LEN,
        }
    }
}

impl AccumulatorConfig {
    pub fn with_max_action_len(mut self, max_action_len: usize) -> Self {
        self.max_action_len = max_action_len;
        self
    }

    /// Check that every setting is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_action_len == 0 {
            return Err(ConfigError::Invalid {
                field: "max_action_len",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
