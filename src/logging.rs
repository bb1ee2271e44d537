//! Tracing subscriber setup for applications embedding the evaluator

use anyhow::{Context, Result};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` directives plus a default for this crate
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let directive = format!("fraud_model_eval={}", config.level)
        .parse::<Directive>()
        .with_context(|| format!("Invalid log level: {}", config.level))?;

    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Install a global fmt subscriber.
///
/// Returns `Ok(false)` when a subscriber was already installed.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match config.format.as_str() {
        "json" => builder.json().try_init().is_ok(),
        "pretty" => builder.pretty().try_init().is_ok(),
        other => anyhow::bail!("Unknown log format: {} (expected json or pretty)", other),
    };

    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_accepts_levels() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            let config = LoggingConfig {
                level: level.to_string(),
                ..LoggingConfig::default()
            };
            assert!(env_filter(&config).is_ok());
        }
    }

    #[test]
    fn test_env_filter_rejects_garbage() {
        let config = LoggingConfig {
            level: "not a level!".to_string(),
            ..LoggingConfig::default()
        };
        assert!(env_filter(&config).is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let config = LoggingConfig {
            format: "xml".to_string(),
            ..LoggingConfig::default()
        };
        assert!(init(&config).is_err());
    }

    #[test]
    fn test_repeated_init_is_harmless() {
        let config = LoggingConfig::default();
        assert!(init(&config).is_ok());
        assert!(!init(&config).unwrap());
    }
}
