//! Credential and region resolution from environment variables.
//!
//! Each credential has a primary variable and a legacy fallback name.
//! Empty values are treated as unset.

use tracing::{debug, warn};

use crate::config::defaults::DEFAULT_REGION;
use crate::config::types::{AwsCredentials, AwsSettings};
use crate::errors::ConfigError;

pub const ACCESS_KEY_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const LEGACY_ACCESS_KEY_VAR: &str = "AWS_ACCESS_KEY";
pub const SECRET_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";
pub const LEGACY_SECRET_KEY_VAR: &str = "AWS_SECRET_KEY";
pub const SESSION_TOKEN_VAR: &str = "AWS_SESSION_TOKEN";
pub const REGION_VAR: &str = "AWS_REGION";
pub const LEGACY_REGION_VAR: &str = "AWS_DEFAULT_REGION";

/// Resolve settings from the process environment.
pub fn resolve_from_env() -> Result<AwsSettings, ConfigError> {
    resolve_with(|name| std::env::var(name).ok())
}

/// Resolve settings using `lookup` to read variables.
pub fn resolve_with<F>(lookup: F) -> Result<AwsSettings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    let access_key_id = required(&read, ACCESS_KEY_VAR, LEGACY_ACCESS_KEY_VAR)?;
    let secret_access_key = required(&read, SECRET_KEY_VAR, LEGACY_SECRET_KEY_VAR)?;
    let session_token = read(SESSION_TOKEN_VAR);

    let region = match read(REGION_VAR).or_else(|| read(LEGACY_REGION_VAR)) {
        Some(region) => region,
        None => {
            warn!(
                event = "core.config.region_defaulted",
                region = DEFAULT_REGION
            );
            DEFAULT_REGION.to_string()
        }
    };

    debug!(
        event = "core.config.environment_resolved",
        region = %region,
        session_token = session_token.is_some()
    );

    Ok(AwsSettings {
        credentials: AwsCredentials {
            access_key_id,
            secret_access_key,
            session_token,
        },
        region,
    })
}

fn required<R>(
    read: &R,
    primary: &'static str,
    fallback: &'static str,
) -> Result<String, ConfigError>
where
    R: Fn(&str) -> Option<String>,
{
    if let Some(value) = read(primary) {
        return Ok(value);
    }

    match read(fallback) {
        Some(value) => {
            debug!(
                event = "core.config.legacy_variable_used",
                variable = fallback
            );
            Ok(value)
        }
        None => Err(ConfigError::MissingEnvironment { primary, fallback }),
    }
}
