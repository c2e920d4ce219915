//! Retention selection: which versions of a function survive a prune.
//!
//! A version is kept when it is `$LATEST`, when an alias points at it, or
//! when it is among the `keep_recent` most recently modified remaining
//! versions. Everything else is marked for deletion.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::config::RetentionConfig;
use crate::config::defaults::DEFAULT_KEEP_RECENT;
use crate::functions::{FunctionVersion, KeepReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    pub keep_recent: usize,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            keep_recent: DEFAULT_KEEP_RECENT,
        }
    }
}

impl From<&RetentionConfig> for RetentionPolicy {
    fn from(config: &RetentionConfig) -> Self {
        Self {
            keep_recent: config.keep_recent(),
        }
    }
}

/// Annotate every version with its keep decision.
///
/// Returns the versions sorted most recent first (see [`compare_recency`]),
/// each with `keep_reason` set for survivors and cleared otherwise. Any
/// existing annotation on the input is ignored, so the result depends only
/// on versions, aliases and policy.
pub fn select_retention(
    mut versions: Vec<FunctionVersion>,
    aliased: &HashSet<String>,
    policy: RetentionPolicy,
) -> Vec<FunctionVersion> {
    versions.sort_by(compare_recency);

    for version in versions.iter_mut() {
        version.keep_reason = if version.is_latest() {
            Some(KeepReason::Latest)
        } else if aliased.contains(&version.version) {
            Some(KeepReason::Aliased)
        } else {
            None
        };
    }

    let mut kept_recent = 0usize;
    for version in versions.iter_mut() {
        if version.keep() {
            continue;
        }
        if kept_recent < policy.keep_recent {
            version.keep_reason = Some(KeepReason::Recent);
            kept_recent += 1;
        }
    }

    debug!(
        event = "core.retention.selected",
        total = versions.len(),
        kept = versions.iter().filter(|v| v.keep()).count(),
        kept_recent = kept_recent
    );

    versions
}

/// Most recently modified first.
///
/// Parsed timestamps compare as instants and sort before unparseable ones,
/// which compare by raw string. Equal timestamps fall back to
/// [`compare_version_ids`].
pub fn compare_recency(a: &FunctionVersion, b: &FunctionVersion) -> Ordering {
    let by_time = match (a.modified_at(), b.modified_at()) {
        (Some(a_time), Some(b_time)) => b_time.cmp(&a_time),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.last_modified.cmp(&a.last_modified),
    };

    by_time.then_with(|| compare_version_ids(&a.version, &b.version))
}

/// Descending version order: `$LATEST`, then numeric versions from highest
/// to lowest, then any other identifier in reverse lexicographic order.
pub fn compare_version_ids(a: &str, b: &str) -> Ordering {
    version_rank(b).cmp(&version_rank(a)).then_with(|| b.cmp(a))
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum VersionRank {
    Other,
    Numeric(u64),
    Latest,
}

fn version_rank(version: &str) -> VersionRank {
    if version == crate::functions::LATEST_VERSION {
        VersionRank::Latest
    } else if let Ok(number) = version.parse::<u64>() {
        VersionRank::Numeric(number)
    } else {
        VersionRank::Other
    }
}
