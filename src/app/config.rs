//! Application configuration
//!
//! This module resolves application-wide settings from the command line and
//! an optional TOML file.

use crate::config::AccumulatorConfig;
use crate::error::ConfigError;
use std::path::Path;

/// Application configuration structure
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Settings for the accumulator built by each command
    pub accumulator: AccumulatorConfig,
}

impl AppConfig {
    /// Create a new application configuration with default accumulator settings
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            accumulator: AccumulatorConfig::default(),
        }
    }

    /// Load accumulator settings from `config_path` when given, then apply
    /// the command-line override
    pub fn resolve(
        verbose: u8,
        config_path: Option<&Path>,
        max_action_len: Option<usize>,
    ) -> Result<Self, ConfigError> {
        let mut accumulator = match config_path {
            Some(path) => AccumulatorConfig::load(path)?,
            None => AccumulatorConfig::default(),
        };

        if let Some(max_action_len) = max_action_len {
            accumulator = accumulator.with_max_action_len(max_action_len);
            accumulator.validate()?;
        }

        Ok(Self {
            verbose,
            accumulator,
        })
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
