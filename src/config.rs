//! Configuration management for fraud model evaluation

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

use crate::scoring::{validate, EvalOptions, PredictionMode};
use crate::types::criteria::AcceptanceCriteria;

/// Main evaluation configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Default per-call evaluation settings
    pub scoring: EvalOptions,
    /// Acceptance thresholds for the verdict
    pub criteria: AcceptanceCriteria,
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty)
    pub format: String,
    /// Render every report through the diagnostics summary
    pub diagnostics: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            diagnostics: false,
        }
    }
}

impl EvalConfig {
    /// Load configuration from the default file
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/eval.toml")
    }

    /// Load configuration from a specific path, with `FRAUD_EVAL__*`
    /// environment overrides
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FRAUD_EVAL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        Self::finish(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .context("Failed to build configuration")?;

        Self::finish(config)
    }

    fn finish(config: Config) -> Result<Self> {
        let loaded: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Check criteria and threshold values are usable
    pub fn validate(&self) -> Result<()> {
        self.criteria
            .validate()
            .context("Invalid acceptance criteria")?;
        if self.scoring.mode == PredictionMode::Probability {
            validate::check_threshold(self.scoring.threshold)
                .context("Invalid scoring threshold")?;
        }
        Ok(())
    }
}
