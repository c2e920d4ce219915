//! # Configuration System
//!
//! Two kinds of configuration feed a prune run:
//!
//! - **AWS settings** (credentials and region) resolved once from the
//!   environment into an [`AwsSettings`] value and handed to the API client.
//! - **Retention settings** loaded from optional TOML files
//!   (`~/.lambda-prune/config.toml`, then `./.lambda-prune/config.toml`),
//!   overridden by CLI flags.
//!
//! ```toml
//! # ~/.lambda-prune/config.toml
//! [retention]
//! keep_recent = 5
//! delete_concurrency = 2
//! ```

pub mod defaults;
pub mod environment;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use environment::resolve_from_env;
pub use types::{AwsCredentials, AwsSettings, PruneConfig, RetentionConfig};
pub use validation::{validate_config, validate_delete_concurrency};

impl PruneConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }
}

impl AwsSettings {
    /// Resolve credentials and region from the process environment.
    ///
    /// See [`environment::resolve_from_env`] for the variables consulted.
    pub fn from_env() -> Result<Self, crate::errors::ConfigError> {
        environment::resolve_from_env()
    }
}
