//! Generic pagination driver ("trampoline").
//!
//! Walks an offset/limit paginated collection by calling a page-fetch
//! function repeatedly and handing every item to a callback together with
//! its position in the whole collection. The same driver serves products,
//! categories and orders; only the page-fetch function differs.

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::api::client::EcwidClient;
use crate::api::error::{ApiError, ApiResult};
use crate::api::search::{Filter, SearchResponse, OFFSET_PARAM};

/// Drive `search` until the collection is exhausted.
///
/// * `filter` is copied once; the caller's map is never modified.
/// * `on_item` receives a gapless, 0-based index across all pages. Returning
///   an error from it aborts the iteration and that error is returned as is;
///   this is the only way to stop early.
/// * Errors from `search` abort immediately. Nothing is retried.
/// * A page with `count == 0` that does not reach `total` fails with
///   [`ApiError::StalledPagination`] instead of requesting the same offset
///   again.
pub async fn trampoline<T, S, SFut, C, CFut>(
    filter: &Filter,
    mut search: S,
    mut on_item: C,
) -> ApiResult<()>
where
    S: FnMut(Filter) -> SFut,
    SFut: Future<Output = ApiResult<SearchResponse<T>>>,
    C: FnMut(u64, T) -> CFut,
    CFut: Future<Output = ApiResult<()>>,
{
    let mut local = filter.clone();
    let mut index: u64 = 0;

    loop {
        let SearchResponse {
            total,
            count,
            offset,
            items,
            ..
        } = search(local.clone()).await?;

        tracing::trace!(total, count, offset, index, "Fetched search page");

        for item in items {
            on_item(index, item).await?;
            index += 1;
        }

        let next = offset.saturating_add(count);
        if next >= total {
            return Ok(());
        }
        if count == 0 {
            return Err(ApiError::StalledPagination { offset, total });
        }

        local.insert(OFFSET_PARAM.to_string(), next.to_string());
    }
}

impl EcwidClient {
    /// Run the trampoline over the collection endpoint at `path`.
    pub async fn trampoline<T, C, CFut>(
        &self,
        path: &str,
        filter: &Filter,
        on_item: C,
    ) -> ApiResult<()>
    where
        T: DeserializeOwned,
        C: FnMut(u64, T) -> CFut,
        CFut: Future<Output = ApiResult<()>>,
    {
        trampoline(
            filter,
            |page_filter| async move { self.search_page::<T>(path, &page_filter).await },
            on_item,
        )
        .await
    }
}
