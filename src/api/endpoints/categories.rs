//! Category endpoints.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::api::client::EcwidClient;
use crate::api::error::ApiResult;
use crate::api::response::{decode, interpret_create, interpret_delete_one, interpret_update};
use crate::api::search::{Filter, SearchResponse};
use crate::api::stream::ItemStream;
use crate::api::types::{Category, Id, NewCategory};

const CATEGORIES_PATH: &str = "/categories";
const CATEGORY_PATH: &str = "/categories/{categoryId}";

impl EcwidClient {
    // =========================================================================
    // Category search
    // =========================================================================

    /// Search categories.
    ///
    /// Useful filter keys: `parent`, `hidden_categories`, `productIds`,
    /// `offset`, `limit`.
    pub async fn categories_search(&self, filter: &Filter) -> ApiResult<SearchResponse<Category>> {
        self.search_page(CATEGORIES_PATH, filter).await
    }

    /// Call `on_item` for every category matching `filter`.
    pub async fn categories_trampoline<C, CFut>(
        &self,
        filter: &Filter,
        on_item: C,
    ) -> ApiResult<()>
    where
        C: FnMut(u64, Category) -> CFut,
        CFut: Future<Output = ApiResult<()>>,
    {
        self.trampoline(CATEGORIES_PATH, filter, on_item).await
    }

    /// Stream every category matching `filter` until exhausted or cancelled.
    pub fn categories(&self, cancel: &CancellationToken, filter: &Filter) -> ItemStream<Category> {
        self.stream(CATEGORIES_PATH, cancel, filter)
    }

    // =========================================================================
    // Category CRUD
    // =========================================================================

    /// Get all details of a category.
    pub async fn category_get(&self, category_id: impl Into<Id>) -> ApiResult<Category> {
        let response = self
            .get(CATEGORY_PATH)
            .path_id("categoryId", category_id)
            .send()
            .await?;
        decode(&response)
    }

    /// Create a category and return its id.
    pub async fn category_add(&self, category: &NewCategory) -> ApiResult<u64> {
        let response = self.post(CATEGORIES_PATH).json(category).send().await?;
        interpret_create(&response)
    }

    /// Update an existing category.
    pub async fn category_update(
        &self,
        category_id: impl Into<Id>,
        category: &NewCategory,
    ) -> ApiResult<()> {
        let response = self
            .put(CATEGORY_PATH)
            .path_id("categoryId", category_id)
            .json(category)
            .send()
            .await?;
        interpret_update(&response)
    }

    /// Delete a category.
    pub async fn category_delete(&self, category_id: impl Into<Id>) -> ApiResult<()> {
        let response = self
            .delete(CATEGORY_PATH)
            .path_id("categoryId", category_id)
            .send()
            .await?;
        interpret_delete_one(&response)
    }
}
