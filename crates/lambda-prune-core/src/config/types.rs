//! Configuration type definitions.
//!
//! # Example Configuration
//!
//! ```toml
//! [retention]
//! keep_recent = 5
//! delete_concurrency = 2
//! ```

use serde::{Deserialize, Serialize};

/// Static credentials for the management API.
#[derive(Clone, PartialEq, Eq)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl std::fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "** redacted **"),
            )
            .finish()
    }
}

/// Runtime settings resolved once from the environment at startup.
///
/// Passed explicitly to the API client; nothing else reads credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsSettings {
    pub credentials: AwsCredentials,
    pub region: String,
}

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.lambda-prune/config.toml`
/// 2. Project config: `./.lambda-prune/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PruneConfig {
    #[serde(default)]
    pub retention: RetentionConfig,
}

/// Retention window and delete fan-out settings.
///
/// Fields are optional so that merging can tell "unset" from "set to the
/// default value"; use the accessor methods for effective values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RetentionConfig {
    /// Number of most recent unaliased versions to keep per function.
    #[serde(default)]
    pub keep_recent: Option<usize>,

    /// Maximum number of delete calls in flight for one function.
    #[serde(default)]
    pub delete_concurrency: Option<usize>,
}
