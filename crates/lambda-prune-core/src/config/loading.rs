//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.lambda-prune/config.toml`
//! 3. **Project config** - `./.lambda-prune/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::{PruneConfig, RetentionConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

const CONFIG_DIR_NAME: &str = ".lambda-prune";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a file exists but cannot be parsed, or if validation
/// fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<PruneConfig, ConfigError> {
    let mut paths = Vec::new();
    if let Some(home_dir) = dirs::home_dir() {
        paths.push(home_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    }
    paths.push(std::env::current_dir()?.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));

    load_from_paths(&paths)
}

/// Load and merge config files in order, skipping missing ones.
pub fn load_from_paths(paths: &[PathBuf]) -> Result<PruneConfig, ConfigError> {
    let mut config = PruneConfig::default();

    for path in paths {
        if let Some(file_config) = load_config_file(path)? {
            debug!(
                event = "core.config.file_loaded",
                path = %path.display()
            );
            config = merge_configs(config, file_config);
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a single configuration file, returning `None` when it does not exist.
fn load_config_file(path: &Path) -> Result<Option<PruneConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    toml::from_str(&content)
        .map(Some)
        .map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: PruneConfig, override_config: PruneConfig) -> PruneConfig {
    PruneConfig {
        retention: RetentionConfig {
            keep_recent: override_config
                .retention
                .keep_recent
                .or(base.retention.keep_recent),
            delete_concurrency: override_config
                .retention
                .delete_concurrency
                .or(base.retention.delete_concurrency),
        },
    }
}
