use serde::Serialize;

use crate::config::RetentionConfig;
use crate::functions::KeepReason;
use crate::retention::RetentionPolicy;

/// Parameters for one prune run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneRequest {
    /// Case-sensitive prefix a function name must start with.
    pub prefix: String,
    pub policy: RetentionPolicy,
    pub options: DeletionOptions,
}

impl PruneRequest {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            policy: RetentionPolicy::default(),
            options: DeletionOptions::default(),
        }
    }

    /// Build a request from the effective retention configuration.
    pub fn from_config(prefix: impl Into<String>, config: &RetentionConfig, dry_run: bool) -> Self {
        Self {
            prefix: prefix.into(),
            policy: RetentionPolicy::from(config),
            options: DeletionOptions {
                concurrency: config.delete_concurrency(),
                dry_run,
            },
        }
    }

    pub fn matches(&self, function_name: &str) -> bool {
        function_name.starts_with(&self.prefix)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionOptions {
    /// Maximum delete calls in flight at once.
    pub concurrency: usize,
    /// Report what would be deleted without calling the API.
    pub dry_run: bool,
}

impl Default for DeletionOptions {
    fn default() -> Self {
        Self {
            concurrency: crate::config::defaults::DEFAULT_DELETE_CONCURRENCY,
            dry_run: false,
        }
    }
}

/// Progress notifications emitted while a prune runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PruneEvent {
    FunctionStarted {
        function_name: String,
    },
    Keeping {
        function_name: String,
        version: String,
        reason: KeepReason,
    },
    Deleting {
        function_name: String,
        version: String,
        dry_run: bool,
    },
}

/// Kept versions with their reasons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeptVersion {
    pub version: String,
    pub reason: KeepReason,
}

/// Outcome of the deletion phase for one function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeletionOutcome {
    pub kept: Vec<KeptVersion>,
    /// Versions deleted, or that would be deleted in dry-run mode.
    pub deleted: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionReport {
    pub function_name: String,
    pub kept: Vec<KeptVersion>,
    pub deleted: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PruneSummary {
    pub prefix: String,
    pub dry_run: bool,
    pub functions: Vec<FunctionReport>,
    pub total_kept: usize,
    pub total_deleted: usize,
}

impl PruneSummary {
    pub fn new(prefix: impl Into<String>, dry_run: bool) -> Self {
        Self {
            prefix: prefix.into(),
            dry_run,
            functions: Vec::new(),
            total_kept: 0,
            total_deleted: 0,
        }
    }

    pub fn add_function(&mut self, report: FunctionReport) {
        self.total_kept += report.kept.len();
        self.total_deleted += report.deleted.len();
        self.functions.push(report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_match_is_anchored_and_case_sensitive() {
        let request = PruneRequest::new("foo-");
        assert!(request.matches("foo-a"));
        assert!(request.matches("foo-"));
        assert!(!request.matches("bar-foo-a"));
        assert!(!request.matches("FOO-a"));
        assert!(!request.matches("foo"));
    }

    #[test]
    fn test_request_from_config() {
        let config = RetentionConfig {
            keep_recent: Some(5),
            delete_concurrency: Some(1),
        };
        let request = PruneRequest::from_config("svc", &config, true);

        assert_eq!(request.policy.keep_recent, 5);
        assert_eq!(request.options.concurrency, 1);
        assert!(request.options.dry_run);
    }

    #[test]
    fn test_summary_totals() {
        let mut summary = PruneSummary::new("svc", false);
        summary.add_function(FunctionReport {
            function_name: "svc-a".to_string(),
            kept: vec![KeptVersion {
                version: "$LATEST".to_string(),
                reason: KeepReason::Latest,
            }],
            deleted: vec!["1".to_string(), "2".to_string()],
        });

        assert_eq!(summary.total_kept, 1);
        assert_eq!(summary.total_deleted, 2);
        assert_eq!(summary.functions.len(), 1);
    }

    #[test]
    fn test_event_serialization() {
        let event = PruneEvent::Deleting {
            function_name: "svc".to_string(),
            version: "1".to_string(),
            dry_run: false,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "deleting");
        assert_eq!(json["version"], "1");
    }
}
