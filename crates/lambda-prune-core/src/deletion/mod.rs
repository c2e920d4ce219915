//! Bounded-concurrency deletion of versions outside the retention window.

use futures::stream::{self, TryStreamExt};
use tracing::{error, info};

use crate::api::LambdaApi;
use crate::functions::FunctionVersion;
use crate::prune::errors::PruneError;
use crate::prune::types::{DeletionOptions, DeletionOutcome, KeptVersion, PruneEvent};

/// Delete every version not marked for keeping.
///
/// Kept versions are only reported. At most `options.concurrency` delete
/// calls are in flight at once. The first failed delete fails the whole
/// call; deletes already in flight are not cancelled and nothing is
/// retried. In dry-run mode no delete calls are made.
pub async fn execute_deletions<A, R>(
    api: &A,
    function_name: &str,
    versions: &[FunctionVersion],
    options: DeletionOptions,
    reporter: &R,
) -> Result<DeletionOutcome, PruneError>
where
    A: LambdaApi + ?Sized,
    R: Fn(&PruneEvent) + ?Sized,
{
    let mut outcome = DeletionOutcome::default();
    let mut doomed = Vec::new();

    for version in versions {
        match version.keep_reason {
            Some(reason) => {
                info!(
                    event = "core.deletion.version_kept",
                    function = function_name,
                    version = %version.version,
                    reason = %reason,
                    "Keeping {}:{}",
                    function_name,
                    version.version
                );
                reporter(&PruneEvent::Keeping {
                    function_name: function_name.to_string(),
                    version: version.version.clone(),
                    reason,
                });
                outcome.kept.push(KeptVersion {
                    version: version.version.clone(),
                    reason,
                });
            }
            None => doomed.push(version.version.as_str()),
        }
    }

    let concurrency = options.concurrency.max(1);

    stream::iter(doomed.iter().copied().map(Ok::<_, PruneError>))
        .try_for_each_concurrent(concurrency, |qualifier| async move {
            info!(
                event = "core.deletion.version_deleting",
                function = function_name,
                version = qualifier,
                dry_run = options.dry_run,
                "Deleting {}:{}",
                function_name,
                qualifier
            );
            reporter(&PruneEvent::Deleting {
                function_name: function_name.to_string(),
                version: qualifier.to_string(),
                dry_run: options.dry_run,
            });

            if options.dry_run {
                return Ok(());
            }

            api.delete_function(function_name, qualifier)
                .await
                .map_err(|source| {
                    error!(
                        event = "core.deletion.version_delete_failed",
                        function = function_name,
                        version = qualifier,
                        error = %source
                    );
                    PruneError::DeleteFailed {
                        function_name: function_name.to_string(),
                        version: qualifier.to_string(),
                        source,
                    }
                })
        })
        .await?;

    outcome.deleted = doomed.into_iter().map(str::to_string).collect();

    info!(
        event = "core.deletion.completed",
        function = function_name,
        kept = outcome.kept.len(),
        deleted = outcome.deleted.len(),
        dry_run = options.dry_run
    );

    Ok(outcome)
}
