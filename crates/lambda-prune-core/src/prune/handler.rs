use std::collections::HashSet;

use tracing::{error, info};

use crate::api::LambdaApi;
use crate::deletion::execute_deletions;
use crate::listing::{list_all_aliases, list_all_functions, list_all_versions};
use crate::prune::errors::PruneError;
use crate::prune::types::{FunctionReport, PruneEvent, PruneRequest, PruneSummary};
use crate::retention::select_retention;

/// Prune every function whose name starts with `request.prefix`.
///
/// Functions are processed strictly one after another. The first failure
/// aborts the remaining queue and is returned; functions already pruned
/// stay pruned.
///
/// # Arguments
/// * `api` - Management API to list and delete through
/// * `request` - Prefix, retention policy and deletion options
/// * `reporter` - Receives progress events as they happen
///
/// # Returns
/// * `Ok(PruneSummary)` - Per-function kept/deleted versions and totals
/// * `Err(PruneError)` - Empty prefix, or the first listing/delete failure
pub async fn prune_functions<A, R>(
    api: &A,
    request: &PruneRequest,
    reporter: &R,
) -> Result<PruneSummary, PruneError>
where
    A: LambdaApi + ?Sized,
    R: Fn(&PruneEvent) + ?Sized,
{
    if request.prefix.is_empty() {
        return Err(PruneError::EmptyPrefix);
    }

    info!(
        event = "core.prune.started",
        prefix = %request.prefix,
        keep_recent = request.policy.keep_recent,
        concurrency = request.options.concurrency,
        dry_run = request.options.dry_run
    );

    let functions = list_all_functions(api).await.map_err(|source| {
        error!(
            event = "core.prune.list_functions_failed",
            error = %source
        );
        PruneError::ListFunctionsFailed { source }
    })?;

    let matching: Vec<String> = functions
        .into_iter()
        .map(|function| function.function_name)
        .filter(|name| request.matches(name))
        .collect();

    info!(
        event = "core.prune.functions_matched",
        prefix = %request.prefix,
        count = matching.len()
    );

    let mut summary = PruneSummary::new(&request.prefix, request.options.dry_run);

    for function_name in &matching {
        info!(
            event = "core.prune.function_started",
            function = %function_name,
            "{}",
            function_name
        );
        reporter(&PruneEvent::FunctionStarted {
            function_name: function_name.clone(),
        });

        match prune_function(api, function_name, request, reporter).await {
            Ok(report) => summary.add_function(report),
            Err(e) => {
                error!(
                    event = "core.prune.function_failed",
                    function = %function_name,
                    error = %e
                );
                return Err(e);
            }
        }
    }

    info!(
        event = "core.prune.completed",
        functions = summary.functions.len(),
        kept = summary.total_kept,
        deleted = summary.total_deleted,
        dry_run = summary.dry_run
    );

    Ok(summary)
}

/// List, select and delete for a single function.
pub async fn prune_function<A, R>(
    api: &A,
    function_name: &str,
    request: &PruneRequest,
    reporter: &R,
) -> Result<FunctionReport, PruneError>
where
    A: LambdaApi + ?Sized,
    R: Fn(&PruneEvent) + ?Sized,
{
    let versions = list_all_versions(api, function_name)
        .await
        .map_err(|source| PruneError::ListVersionsFailed {
            function_name: function_name.to_string(),
            source,
        })?;

    let aliased: HashSet<String> = list_all_aliases(api, function_name)
        .await
        .map_err(|source| PruneError::ListAliasesFailed {
            function_name: function_name.to_string(),
            source,
        })?
        .into_iter()
        .map(|alias| alias.function_version)
        .collect();

    info!(
        event = "core.prune.versions_listed",
        function = function_name,
        versions = versions.len(),
        aliased = aliased.len()
    );

    let annotated = select_retention(versions, &aliased, request.policy);
    let outcome =
        execute_deletions(api, function_name, &annotated, request.options, reporter).await?;

    Ok(FunctionReport {
        function_name: function_name.to_string(),
        kept: outcome.kept,
        deleted: outcome.deleted,
    })
}
