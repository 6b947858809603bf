//! Startup orchestration.
//!
//! # Design Decisions
//! - Fail fast: any configuration error is fatal
//! - Command-line overrides are applied before validation

use std::path::Path;

use crate::config::loader::{load_config, ConfigError};
use crate::config::schema::ServiceConfig;
use crate::config::validation::validate_config;

/// Load the configuration file (or defaults) and apply a bind override.
pub fn resolve_config(
    path: Option<&Path>,
    bind_override: Option<&str>,
) -> Result<ServiceConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(bind) = bind_override {
        config.listener.bind_address = bind.to_string();
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    Ok(config)
}
