use crate::config::defaults::MAX_DELETE_CONCURRENCY;
use crate::config::types::PruneConfig;
use crate::errors::ConfigError;

/// Validate the merged configuration.
pub fn validate_config(config: &PruneConfig) -> Result<(), ConfigError> {
    validate_delete_concurrency(config.retention.delete_concurrency())
}

/// Check a delete concurrency value against the accepted range.
pub fn validate_delete_concurrency(concurrency: usize) -> Result<(), ConfigError> {
    if !(1..=MAX_DELETE_CONCURRENCY).contains(&concurrency) {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "delete_concurrency must be between 1 and {}, got {}",
                MAX_DELETE_CONCURRENCY, concurrency
            ),
        });
    }
    Ok(())
}
