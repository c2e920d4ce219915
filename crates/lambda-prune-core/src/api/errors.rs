use crate::errors::PruneToolError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{operation} request failed: {message}")]
    RequestFailed {
        operation: &'static str,
        message: String,
    },

    #[error("{operation} response is missing '{field}'")]
    MissingField {
        operation: &'static str,
        field: &'static str,
    },
}

impl ApiError {
    pub fn request_failed(operation: &'static str, message: impl Into<String>) -> Self {
        ApiError::RequestFailed {
            operation,
            message: message.into(),
        }
    }
}

impl PruneToolError for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::RequestFailed { .. } => "API_REQUEST_FAILED",
            ApiError::MissingField { .. } => "API_MISSING_FIELD",
        }
    }
}
