//! REST API client module for Ecwid.
//!
//! This module provides a typed async client for the Ecwid REST API v3:
//! products, categories, orders, product types, variations, images and the
//! store profile.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ecwid::api::{filter, EcwidClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EcwidClient::new(1003, "secret_token")?;
//!
//!     // One page of search results
//!     let page = client.products_search(&filter([("keyword", "shoes")])).await?;
//!     println!("Found {} products", page.total);
//!
//!     // Create and update
//!     let id = client.product_add(&NewProduct::new("Boots", "BT-1", 42.0)).await?;
//!     client.product_inventory_adjust(id, 10).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Pagination
//!
//! Collections are paginated with `offset`/`limit`. Three levels are
//! available for products, categories and orders:
//!
//! * `*_search` fetches a single page;
//! * `*_trampoline` walks every page and calls an async callback per item;
//! * `products`/`categories`/`orders` return an [`ItemStream`] that yields
//!   items lazily and stops on cancellation.
//!
//! ```rust,ignore
//! use futures_util::StreamExt;
//! use tokio_util::sync::CancellationToken;
//!
//! let token = CancellationToken::new();
//! let mut orders = client.orders(&token, &filter([("paymentStatus", "PAID")]));
//! while let Some(order) = orders.next().await {
//!     println!("#{} {:?}", order.order_id, order.total);
//! }
//! // The stream ends silently on errors; ask for the outcome explicitly.
//! orders.finish().await?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>` which is an alias for `Result<T, ApiError>`:
//!
//! ```rust,ignore
//! use ecwid::api::ApiError;
//!
//! match client.product_get(42u64).await {
//!     Ok(product) => println!("Found {:?}", product.name),
//!     Err(ApiError::Api { status: 404, .. }) => println!("No such product"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod response;
pub mod search;
pub mod stream;
pub mod trampoline;
pub mod types;

// Re-export main types for convenience
pub use client::{ApiRequest, EcwidClient, EcwidClientBuilder, RawResponse};
pub use endpoints::IMAGE_CONTENT_TYPE;
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use response::{
    decode, interpret_create, interpret_delete, interpret_delete_one, interpret_update,
    interpret_update_count,
};
pub use search::{filter, Filter, SearchResponse, LIMIT_PARAM, OFFSET_PARAM};
pub use stream::{ItemSink, ItemStream};
pub use trampoline::trampoline;
pub use types::*;
