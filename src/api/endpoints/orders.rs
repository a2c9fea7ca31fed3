//! Order endpoints.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::api::client::EcwidClient;
use crate::api::error::ApiResult;
use crate::api::response::{decode, interpret_update};
use crate::api::search::{Filter, SearchResponse};
use crate::api::stream::ItemStream;
use crate::api::types::{Id, NewOrder, Order};

const ORDERS_PATH: &str = "/orders";
const ORDER_PATH: &str = "/orders/{orderId}";

impl EcwidClient {
    // =========================================================================
    // Order search
    // =========================================================================

    /// Search orders.
    ///
    /// Useful filter keys: `keywords`, `totalFrom`, `totalTo`, `createdFrom`,
    /// `createdTo`, `email`, `customerId`, `paymentStatus`,
    /// `fulfillmentStatus`, `productId`, `offset`, `limit`.
    pub async fn orders_search(&self, filter: &Filter) -> ApiResult<SearchResponse<Order>> {
        self.search_page(ORDERS_PATH, filter).await
    }

    /// Call `on_item` for every order matching `filter`.
    pub async fn orders_trampoline<C, CFut>(&self, filter: &Filter, on_item: C) -> ApiResult<()>
    where
        C: FnMut(u64, Order) -> CFut,
        CFut: Future<Output = ApiResult<()>>,
    {
        self.trampoline(ORDERS_PATH, filter, on_item).await
    }

    /// Stream every order matching `filter` until exhausted or cancelled.
    pub fn orders(&self, cancel: &CancellationToken, filter: &Filter) -> ItemStream<Order> {
        self.stream(ORDERS_PATH, cancel, filter)
    }

    // =========================================================================
    // Single order
    // =========================================================================

    /// Get all details of an order.
    pub async fn order_get(&self, order_id: impl Into<Id>) -> ApiResult<Order> {
        let response = self
            .get(ORDER_PATH)
            .path_id("orderId", order_id)
            .send()
            .await?;
        decode(&response)
    }

    /// Update an existing order.
    pub async fn order_update(&self, order_id: impl Into<Id>, order: &NewOrder) -> ApiResult<()> {
        let response = self
            .put(ORDER_PATH)
            .path_id("orderId", order_id)
            .json(order)
            .send()
            .await?;
        interpret_update(&response)
    }
}
