use crate::api::ApiError;
use crate::errors::PruneToolError;

#[derive(Debug, thiserror::Error)]
pub enum PruneError {
    #[error("Function name prefix must not be empty")]
    EmptyPrefix,

    #[error("Failed to list functions: {source}")]
    ListFunctionsFailed {
        #[source]
        source: ApiError,
    },

    #[error("Failed to list versions of '{function_name}': {source}")]
    ListVersionsFailed {
        function_name: String,
        #[source]
        source: ApiError,
    },

    #[error("Failed to list aliases of '{function_name}': {source}")]
    ListAliasesFailed {
        function_name: String,
        #[source]
        source: ApiError,
    },

    #[error("Failed to delete '{function_name}' version {version}: {source}")]
    DeleteFailed {
        function_name: String,
        version: String,
        #[source]
        source: ApiError,
    },
}

impl PruneToolError for PruneError {
    fn error_code(&self) -> &'static str {
        match self {
            PruneError::EmptyPrefix => "PRUNE_EMPTY_PREFIX",
            PruneError::ListFunctionsFailed { .. } => "PRUNE_LIST_FUNCTIONS_FAILED",
            PruneError::ListVersionsFailed { .. } => "PRUNE_LIST_VERSIONS_FAILED",
            PruneError::ListAliasesFailed { .. } => "PRUNE_LIST_ALIASES_FAILED",
            PruneError::DeleteFailed { .. } => "PRUNE_DELETE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, PruneError::EmptyPrefix)
    }
}
