//! Remote function-management API trait definition.

use async_trait::async_trait;

use crate::api::errors::ApiError;
use crate::functions::{Alias, FunctionSummary, FunctionVersion};

/// One page of a listing call.
///
/// `next_marker` is the continuation marker for the following page; `None`
/// means the listing is exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_marker: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_marker: Option<String>) -> Self {
        Self { items, next_marker }
    }
}

/// Trait defining the remote operations the pruner consumes.
///
/// The AWS SDK client implements this for real runs; tests use an in-memory
/// implementation. Every listing method returns a single page and accepts the
/// marker returned by the previous page.
#[async_trait]
pub trait LambdaApi: Send + Sync {
    async fn list_functions(
        &self,
        marker: Option<String>,
    ) -> Result<Page<FunctionSummary>, ApiError>;

    async fn list_versions_by_function(
        &self,
        function_name: &str,
        marker: Option<String>,
    ) -> Result<Page<FunctionVersion>, ApiError>;

    async fn list_aliases(
        &self,
        function_name: &str,
        marker: Option<String>,
    ) -> Result<Page<Alias>, ApiError>;

    /// Delete one version of a function, using the version as qualifier.
    async fn delete_function(&self, function_name: &str, qualifier: &str)
    -> Result<(), ApiError>;
}
