//! Data model for functions, versions and aliases as returned by the
//! management API.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Version identifier of the unpublished, mutable function code.
pub const LATEST_VERSION: &str = "$LATEST";

/// Timestamp layout used by the Lambda API (`2024-01-15T10:30:00.000+0000`).
const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSummary {
    pub function_name: String,
}

impl FunctionSummary {
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
        }
    }
}

/// Why a version survives a prune run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeepReason {
    /// The `$LATEST` pseudo-version.
    Latest,
    /// Referenced by at least one alias.
    Aliased,
    /// Inside the retention window of most recent versions.
    Recent,
}

impl std::fmt::Display for KeepReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeepReason::Latest => write!(f, "latest"),
            KeepReason::Aliased => write!(f, "aliased"),
            KeepReason::Recent => write!(f, "recent"),
        }
    }
}

/// One published version of a function.
///
/// `keep_reason` is filled in by the retention selector; `None` means the
/// version is scheduled for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionVersion {
    pub function_name: String,
    pub version: String,
    pub last_modified: String,
    #[serde(default)]
    pub keep_reason: Option<KeepReason>,
}

impl FunctionVersion {
    pub fn new(
        function_name: impl Into<String>,
        version: impl Into<String>,
        last_modified: impl Into<String>,
    ) -> Self {
        Self {
            function_name: function_name.into(),
            version: version.into(),
            last_modified: last_modified.into(),
            keep_reason: None,
        }
    }

    pub fn keep(&self) -> bool {
        self.keep_reason.is_some()
    }

    pub fn is_latest(&self) -> bool {
        self.version == LATEST_VERSION
    }

    /// Parsed modification time, or `None` if the API returned something
    /// that is neither RFC 3339 nor the Lambda timestamp layout.
    pub fn modified_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.last_modified)
            .or_else(|_| DateTime::parse_from_str(&self.last_modified, API_TIMESTAMP_FORMAT))
            .ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    pub name: String,
    pub function_version: String,
}

impl Alias {
    pub fn new(name: impl Into<String>, function_version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            function_version: function_version.into(),
        }
    }
}
