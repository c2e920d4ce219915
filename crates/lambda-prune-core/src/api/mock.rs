//! In-memory management API used by unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::api::errors::ApiError;
use crate::api::traits::{LambdaApi, Page};
use crate::functions::{Alias, FunctionSummary, FunctionVersion};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    ListFunctions {
        marker: Option<String>,
    },
    ListVersions {
        function_name: String,
        marker: Option<String>,
    },
    ListAliases {
        function_name: String,
        marker: Option<String>,
    },
    Delete {
        function_name: String,
        qualifier: String,
    },
}

impl ApiCall {
    pub fn function_name(&self) -> Option<&str> {
        match self {
            ApiCall::ListFunctions { .. } => None,
            ApiCall::ListVersions { function_name, .. }
            | ApiCall::ListAliases { function_name, .. }
            | ApiCall::Delete { function_name, .. } => Some(function_name),
        }
    }
}

pub struct MockLambdaApi {
    functions: Vec<String>,
    versions: HashMap<String, Vec<FunctionVersion>>,
    aliases: HashMap<String, Vec<Alias>>,
    page_size: usize,
    failing_deletes: HashSet<(String, String)>,
    failing_version_listings: HashSet<String>,
    failing_function_page: Option<usize>,
    delete_delay: Duration,
    calls: Mutex<Vec<ApiCall>>,
    deleted: Mutex<Vec<(String, String)>>,
    function_pages_served: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl MockLambdaApi {
    pub fn new() -> Self {
        Self {
            functions: Vec::new(),
            versions: HashMap::new(),
            aliases: HashMap::new(),
            page_size: 50,
            failing_deletes: HashSet::new(),
            failing_version_listings: HashSet::new(),
            failing_function_page: None,
            delete_delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            function_pages_served: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Register a function with `(version, last_modified)` pairs.
    pub fn with_function(mut self, name: &str, versions: &[(&str, &str)]) -> Self {
        self.functions.push(name.to_string());
        self.versions.insert(
            name.to_string(),
            versions
                .iter()
                .map(|(version, modified)| FunctionVersion::new(name, *version, *modified))
                .collect(),
        );
        self
    }

    pub fn with_alias(mut self, function_name: &str, alias: &str, version: &str) -> Self {
        self.aliases
            .entry(function_name.to_string())
            .or_default()
            .push(Alias::new(alias, version));
        self
    }

    pub fn with_failing_delete(mut self, function_name: &str, version: &str) -> Self {
        self.failing_deletes
            .insert((function_name.to_string(), version.to_string()));
        self
    }

    pub fn with_failing_version_listing(mut self, function_name: &str) -> Self {
        self.failing_version_listings
            .insert(function_name.to_string());
        self
    }

    /// Fail the n-th (zero-based) ListFunctions page request.
    pub fn with_failing_function_page(mut self, page: usize) -> Self {
        self.failing_function_page = Some(page);
        self
    }

    pub fn with_delete_delay(mut self, delay: Duration) -> Self {
        self.delete_delay = delay;
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, function_name: &str) -> Vec<ApiCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.function_name() == Some(function_name))
            .collect()
    }

    pub fn deleted(&self) -> Vec<(String, String)> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn deleted_versions(&self, function_name: &str) -> Vec<String> {
        let mut versions: Vec<String> = self
            .deleted()
            .into_iter()
            .filter(|(name, _)| name == function_name)
            .map(|(_, version)| version)
            .collect();
        versions.sort();
        versions
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn paginate<T: Clone>(&self, items: &[T], marker: Option<String>) -> Page<T> {
        let start: usize = marker.map(|m| m.parse().unwrap()).unwrap_or(0);
        let end = (start + self.page_size).min(items.len());
        let next_marker = (end < items.len()).then(|| end.to_string());
        Page::new(items[start..end].to_vec(), next_marker)
    }
}

#[async_trait]
impl LambdaApi for MockLambdaApi {
    async fn list_functions(
        &self,
        marker: Option<String>,
    ) -> Result<Page<FunctionSummary>, ApiError> {
        self.record(ApiCall::ListFunctions {
            marker: marker.clone(),
        });

        let page = self.function_pages_served.fetch_add(1, Ordering::SeqCst);
        if self.failing_function_page == Some(page) {
            return Err(ApiError::request_failed(
                "ListFunctions",
                "ServiceException: injected failure",
            ));
        }

        let summaries: Vec<FunctionSummary> = self
            .functions
            .iter()
            .map(|name| FunctionSummary::new(name.as_str()))
            .collect();
        Ok(self.paginate(&summaries, marker))
    }

    async fn list_versions_by_function(
        &self,
        function_name: &str,
        marker: Option<String>,
    ) -> Result<Page<FunctionVersion>, ApiError> {
        self.record(ApiCall::ListVersions {
            function_name: function_name.to_string(),
            marker: marker.clone(),
        });

        if self.failing_version_listings.contains(function_name) {
            return Err(ApiError::request_failed(
                "ListVersionsByFunction",
                "ResourceNotFoundException: injected failure",
            ));
        }

        let versions = self.versions.get(function_name).cloned().unwrap_or_default();
        Ok(self.paginate(&versions, marker))
    }

    async fn list_aliases(
        &self,
        function_name: &str,
        marker: Option<String>,
    ) -> Result<Page<Alias>, ApiError> {
        self.record(ApiCall::ListAliases {
            function_name: function_name.to_string(),
            marker: marker.clone(),
        });

        let aliases = self.aliases.get(function_name).cloned().unwrap_or_default();
        Ok(self.paginate(&aliases, marker))
    }

    async fn delete_function(
        &self,
        function_name: &str,
        qualifier: &str,
    ) -> Result<(), ApiError> {
        self.record(ApiCall::Delete {
            function_name: function_name.to_string(),
            qualifier: qualifier.to_string(),
        });

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(current, Ordering::SeqCst);
        if !self.delete_delay.is_zero() {
            tokio::time::sleep(self.delete_delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self
            .failing_deletes
            .contains(&(function_name.to_string(), qualifier.to_string()))
        {
            return Err(ApiError::request_failed(
                "DeleteFunction",
                "TooManyRequestsException: injected failure",
            ));
        }

        self.deleted
            .lock()
            .unwrap()
            .push((function_name.to_string(), qualifier.to_string()));
        Ok(())
    }
}
