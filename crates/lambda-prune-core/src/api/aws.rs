use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_lambda::Client;
use aws_sdk_lambda::config::{Credentials, Region};
use aws_sdk_lambda::error::DisplayErrorContext;
use tracing::{debug, info};

use crate::api::errors::ApiError;
use crate::api::traits::{LambdaApi, Page};
use crate::config::AwsSettings;
use crate::functions::{Alias, FunctionSummary, FunctionVersion};

const CREDENTIALS_PROVIDER_NAME: &str = "lambda-prune-environment";

/// Lambda implementation of the management API, backed by the AWS SDK.
#[derive(Debug, Clone)]
pub struct AwsLambdaClient {
    client: Client,
}

impl AwsLambdaClient {
    /// Build a client from explicitly resolved settings.
    ///
    /// Credentials and region come only from `settings`; nothing is read
    /// from the ambient provider chain.
    pub async fn new(settings: &AwsSettings) -> Self {
        let credentials = Credentials::new(
            settings.credentials.access_key_id.clone(),
            settings.credentials.secret_access_key.clone(),
            settings.credentials.session_token.clone(),
            None,
            CREDENTIALS_PROVIDER_NAME,
        );

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        info!(
            event = "core.api.client_created",
            region = %settings.region
        );

        Self::from_client(Client::new(&sdk_config))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

fn request_failed(operation: &'static str, err: impl std::error::Error) -> ApiError {
    ApiError::request_failed(operation, DisplayErrorContext(err).to_string())
}

#[async_trait]
impl LambdaApi for AwsLambdaClient {
    async fn list_functions(
        &self,
        marker: Option<String>,
    ) -> Result<Page<FunctionSummary>, ApiError> {
        let output = self
            .client
            .list_functions()
            .set_marker(marker)
            .send()
            .await
            .map_err(|e| request_failed("ListFunctions", e))?;

        let items = output
            .functions()
            .iter()
            .map(|function| {
                function
                    .function_name()
                    .map(FunctionSummary::new)
                    .ok_or(ApiError::MissingField {
                        operation: "ListFunctions",
                        field: "FunctionName",
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            event = "core.api.list_functions_page",
            count = items.len()
        );

        Ok(Page::new(items, output.next_marker().map(str::to_string)))
    }

    async fn list_versions_by_function(
        &self,
        function_name: &str,
        marker: Option<String>,
    ) -> Result<Page<FunctionVersion>, ApiError> {
        let output = self
            .client
            .list_versions_by_function()
            .function_name(function_name)
            .set_marker(marker)
            .send()
            .await
            .map_err(|e| request_failed("ListVersionsByFunction", e))?;

        let items = output
            .versions()
            .iter()
            .map(|configuration| {
                let version = configuration.version().ok_or(ApiError::MissingField {
                    operation: "ListVersionsByFunction",
                    field: "Version",
                })?;
                let last_modified = configuration.last_modified().ok_or(ApiError::MissingField {
                    operation: "ListVersionsByFunction",
                    field: "LastModified",
                })?;
                Ok(FunctionVersion::new(function_name, version, last_modified))
            })
            .collect::<Result<Vec<_>, ApiError>>()?;

        debug!(
            event = "core.api.list_versions_page",
            function = function_name,
            count = items.len()
        );

        Ok(Page::new(items, output.next_marker().map(str::to_string)))
    }

    async fn list_aliases(
        &self,
        function_name: &str,
        marker: Option<String>,
    ) -> Result<Page<Alias>, ApiError> {
        let output = self
            .client
            .list_aliases()
            .function_name(function_name)
            .set_marker(marker)
            .send()
            .await
            .map_err(|e| request_failed("ListAliases", e))?;

        let items = output
            .aliases()
            .iter()
            .map(|alias| {
                let version = alias.function_version().ok_or(ApiError::MissingField {
                    operation: "ListAliases",
                    field: "FunctionVersion",
                })?;
                Ok(Alias::new(alias.name().unwrap_or_default(), version))
            })
            .collect::<Result<Vec<_>, ApiError>>()?;

        Ok(Page::new(items, output.next_marker().map(str::to_string)))
    }

    async fn delete_function(
        &self,
        function_name: &str,
        qualifier: &str,
    ) -> Result<(), ApiError> {
        self.client
            .delete_function()
            .function_name(function_name)
            .qualifier(qualifier)
            .send()
            .await
            .map_err(|e| request_failed("DeleteFunction", e))?;

        Ok(())
    }
}
