//! Product endpoints.

use std::future::Future;

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::api::client::EcwidClient;
use crate::api::error::ApiResult;
use crate::api::response::{
    decode, interpret_create, interpret_delete_one, interpret_update, interpret_update_count,
};
use crate::api::search::{Filter, SearchResponse};
use crate::api::stream::ItemStream;
use crate::api::types::{Id, NewProduct, Product};

const PRODUCTS_PATH: &str = "/products";
const PRODUCT_PATH: &str = "/products/{productId}";
const INVENTORY_PATH: &str = "/products/{productId}/inventory";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InventoryAdjust {
    quantity_delta: i64,
}

impl EcwidClient {
    // =========================================================================
    // Product search
    // =========================================================================

    /// Search or filter products in the store catalog.
    ///
    /// Useful filter keys: `keyword`, `priceFrom`, `priceTo`, `category`,
    /// `withSubcategories`, `sortBy`, `createdFrom`, `updatedFrom`,
    /// `enabled`, `inStock`, `sku`, `offset`, `limit`.
    pub async fn products_search(&self, filter: &Filter) -> ApiResult<SearchResponse<Product>> {
        self.search_page(PRODUCTS_PATH, filter).await
    }

    /// Call `on_item` for every product matching `filter`.
    pub async fn products_trampoline<C, CFut>(&self, filter: &Filter, on_item: C) -> ApiResult<()>
    where
        C: FnMut(u64, Product) -> CFut,
        CFut: Future<Output = ApiResult<()>>,
    {
        self.trampoline(PRODUCTS_PATH, filter, on_item).await
    }

    /// Stream every product matching `filter` until exhausted or cancelled.
    pub fn products(&self, cancel: &CancellationToken, filter: &Filter) -> ItemStream<Product> {
        self.stream(PRODUCTS_PATH, cancel, filter)
    }

    // =========================================================================
    // Product CRUD
    // =========================================================================

    /// Get all details of a product.
    pub async fn product_get(&self, product_id: impl Into<Id>) -> ApiResult<Product> {
        let response = self
            .get(PRODUCT_PATH)
            .path_id("productId", product_id)
            .send()
            .await?;
        decode(&response)
    }

    /// Create a product and return its id.
    pub async fn product_add(&self, product: &NewProduct) -> ApiResult<u64> {
        let response = self.post(PRODUCTS_PATH).json(product).send().await?;
        interpret_create(&response)
    }

    /// Update an existing product. Fields left `None` are not changed.
    pub async fn product_update(
        &self,
        product_id: impl Into<Id>,
        product: &NewProduct,
    ) -> ApiResult<()> {
        let response = self
            .put(PRODUCT_PATH)
            .path_id("productId", product_id)
            .json(product)
            .send()
            .await?;
        interpret_update(&response)
    }

    /// Delete a product.
    pub async fn product_delete(&self, product_id: impl Into<Id>) -> ApiResult<()> {
        let response = self
            .delete(PRODUCT_PATH)
            .path_id("productId", product_id)
            .send()
            .await?;
        interpret_delete_one(&response)
    }

    /// Increase or decrease the stock quantity by `quantity_delta`.
    ///
    /// Returns the raw `updateCount` reported by the server.
    pub async fn product_inventory_adjust(
        &self,
        product_id: impl Into<Id>,
        quantity_delta: i64,
    ) -> ApiResult<i64> {
        let response = self
            .put(INVENTORY_PATH)
            .path_id("productId", product_id)
            .json(&InventoryAdjust { quantity_delta })
            .send()
            .await?;
        interpret_update_count(&response)
    }
}
