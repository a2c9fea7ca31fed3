//! Paginated search primitive shared by every collection endpoint.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::client::EcwidClient;
use crate::api::error::ApiResult;
use crate::api::response::decode;

/// Query parameters of a search (`keyword`, `offset`, `limit`, ...).
pub type Filter = HashMap<String, String>;

/// Query parameter holding the page offset.
pub const OFFSET_PARAM: &str = "offset";
/// Query parameter holding the page size.
pub const LIMIT_PARAM: &str = "limit";

/// One page of a collection search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse<T> {
    /// Total number of matching entities
    pub total: u64,
    /// Number of entities in this page
    pub count: u64,
    /// Offset of this page
    pub offset: u64,
    /// Requested page size
    pub limit: u64,
    /// Entities of this page, in server order
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> SearchResponse<T> {
    /// Whether this page reaches the end of the collection.
    pub fn is_last(&self) -> bool {
        self.offset.saturating_add(self.count) >= self.total
    }

    /// Offset of the page after this one.
    pub fn next_offset(&self) -> u64 {
        self.offset.saturating_add(self.count)
    }
}

/// Build a filter from key/value pairs.
///
/// ```rust,ignore
/// let filter = ecwid::api::filter([("keyword", "shoes"), ("limit", "50")]);
/// ```
pub fn filter<K, V, I>(pairs: I) -> Filter
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

impl EcwidClient {
    /// Fetch one page of a collection endpoint.
    ///
    /// A single GET with `filter` as query parameters; no pagination or retry
    /// happens here.
    pub async fn search_page<T: DeserializeOwned>(
        &self,
        path: &str,
        filter: &Filter,
    ) -> ApiResult<SearchResponse<T>> {
        let response = self.get(path).queries(filter).send().await?;
        decode(&response)
    }
}
