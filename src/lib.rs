//! # Ecwid Rust SDK
//!
//! An async client for the Ecwid e-commerce REST API v3.
//!
//! ## Modules
//!
//! - [`api`]: REST API client: typed endpoints, pagination and item streams
//! - [`webhook`]: Inbound webhook dispatcher with signature verification
//! - [`network`]: API host and URL constants
//!
//! ## Quick Start - REST API
//!
//! ```rust,ignore
//! use ecwid::prelude::*;
//! use futures_util::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads ECWID_STORE_ID, ECWID_TOKEN and optionally ECWID_API_HOST
//!     let client = EcwidClientBuilder::from_env()?.build()?;
//!
//!     // Walk every enabled product, one page at a time
//!     let token = CancellationToken::new();
//!     let mut products = client.products(&token, &filter([("enabled", "true")]));
//!     while let Some(product) = products.next().await {
//!         println!("{} {:?}", product.id, product.name);
//!     }
//!     products.finish().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Quick Start - Webhooks
//!
//! ```rust,ignore
//! use ecwid::webhook::{Event, Webhook};
//!
//! let router = Webhook::new("client_secret")
//!     .require_signature(true)
//!     .on(Event::OrderCreated, |body| {
//!         println!("new order {}", body.entity_id);
//!         Ok(())
//!     })
//!     .into_router("/ecwid/webhook"); // requires the `axum` feature
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Network URL constants.
pub mod network;

/// REST API client module for products, categories, orders and more.
pub mod api;

/// Webhook dispatcher for Ecwid event notifications.
pub mod webhook;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use ecwid::prelude::*;
/// ```
pub mod prelude {
    // API module exports
    pub use crate::api::{
        filter, ApiError, ApiResult, EcwidClient, EcwidClientBuilder, Filter, ItemStream,
        SearchResponse,
        // Resource types
        Attribute, Attributes, Category, Id, NewCategory, NewOrder, NewProduct,
        NewProductVariation, Order, Product, ProductType, ProductVariation, StoreProfile,
    };

    // Network constants
    pub use crate::network::DEFAULT_API_HOST;

    // Webhook exports
    pub use crate::webhook::{Event, Webhook, WebhookBody, WebhookError};

    // Cancellation for item streams
    pub use tokio_util::sync::CancellationToken;
}
