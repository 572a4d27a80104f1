//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    resolve_config(Some(path), None)
}

/// Build the startup configuration: the file if given, else defaults, then an
/// optional bind address override. The result is validated on every path.
pub fn resolve_config(
    path: Option<&Path>,
    bind_override: Option<String>,
) -> Result<ServiceConfig, ConfigError> {
    let mut config: ServiceConfig = match path {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = bind_override {
        config.listener.bind_address = bind;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ServiceConfig, ConfigError> {
    let config: ServiceConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
