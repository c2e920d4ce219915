//! Marker-following listing over the management API.
//!
//! [`collect_pages`] is the single pagination loop; the `list_all_*`
//! helpers bind it to a specific API operation.

use std::future::Future;

use tracing::debug;

use crate::api::{ApiError, LambdaApi, Page};
use crate::functions::{Alias, FunctionSummary, FunctionVersion};

/// Request pages until the API stops returning a continuation marker.
///
/// Items are returned in server order. The first failing page aborts the
/// listing and its error is returned; no further pages are requested.
/// An empty marker string is treated as the end of the listing.
pub async fn collect_pages<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, ApiError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, ApiError>>,
{
    let mut items = Vec::new();
    let mut marker: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = fetch_page(marker.take()).await?;
        pages += 1;
        items.extend(page.items);

        match page.next_marker {
            Some(next) if !next.is_empty() => marker = Some(next),
            _ => break,
        }
    }

    debug!(
        event = "core.listing.pages_collected",
        pages = pages,
        items = items.len()
    );

    Ok(items)
}

pub async fn list_all_functions<A>(api: &A) -> Result<Vec<FunctionSummary>, ApiError>
where
    A: LambdaApi + ?Sized,
{
    collect_pages(|marker| api.list_functions(marker)).await
}

pub async fn list_all_versions<A>(
    api: &A,
    function_name: &str,
) -> Result<Vec<FunctionVersion>, ApiError>
where
    A: LambdaApi + ?Sized,
{
    collect_pages(|marker| api.list_versions_by_function(function_name, marker)).await
}

pub async fn list_all_aliases<A>(api: &A, function_name: &str) -> Result<Vec<Alias>, ApiError>
where
    A: LambdaApi + ?Sized,
{
    collect_pages(|marker| api.list_aliases(function_name, marker)).await
}
