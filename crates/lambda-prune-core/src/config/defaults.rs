//! Default values for configuration.

use crate::config::types::RetentionConfig;

/// Most recent unaliased versions kept per function.
pub const DEFAULT_KEEP_RECENT: usize = 3;

/// Delete calls in flight per function.
pub const DEFAULT_DELETE_CONCURRENCY: usize = 2;

/// Upper bound accepted for `delete_concurrency`.
pub const MAX_DELETE_CONCURRENCY: usize = 10;

/// Region used when neither region variable is set.
pub const DEFAULT_REGION: &str = "us-east-1";

impl RetentionConfig {
    /// Returns the retention window, defaulting to 3.
    pub fn keep_recent(&self) -> usize {
        self.keep_recent.unwrap_or(DEFAULT_KEEP_RECENT)
    }

    /// Returns the delete concurrency, defaulting to 2.
    pub fn delete_concurrency(&self) -> usize {
        self.delete_concurrency.unwrap_or(DEFAULT_DELETE_CONCURRENCY)
    }
}
