use crate::config::types::{ApiConfig, Config, FetcherConfig, StoreConfig, WorkersConfig};
use crate::ConfigError;
use std::net::SocketAddr;

const MAX_TIMEOUT_SECS: u64 = 120;
const MAX_WORKERS: usize = 256;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    validate_workers_config(&config.workers)?;
    validate_store_config(&config.store)?;
    validate_api_config(&config.api)?;
    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, config.timeout_secs
        )));
    }

    if config.user_agents.is_empty() {
        return Err(ConfigError::Validation(
            "user_agents cannot be empty".to_string(),
        ));
    }

    if let Some(blank) = config.user_agents.iter().find(|ua| ua.trim().is_empty()) {
        return Err(ConfigError::Validation(format!(
            "user_agents cannot contain blank entries, got '{}'",
            blank
        )));
    }

    Ok(())
}

/// Validates worker pool configuration
fn validate_workers_config(config: &WorkersConfig) -> Result<(), ConfigError> {
    if config.count < 1 || config.count > MAX_WORKERS {
        return Err(ConfigError::Validation(format!(
            "workers.count must be between 1 and {}, got {}",
            MAX_WORKERS, config.count
        )));
    }

    Ok(())
}

/// Validates store configuration
fn validate_store_config(config: &StoreConfig) -> Result<(), ConfigError> {
    if config.database_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "database_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates API configuration
fn validate_api_config(config: &ApiConfig) -> Result<(), ConfigError> {
    config.bind_address.parse::<SocketAddr>().map_err(|e| {
        ConfigError::Validation(format!(
            "Invalid bind_address '{}': {}",
            config.bind_address, e
        ))
    })?;

    Ok(())
}
