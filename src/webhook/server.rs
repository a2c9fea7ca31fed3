//! axum integration for the webhook dispatcher.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::any;
use axum::Router;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};

use super::Webhook;

impl Webhook {
    /// Mount the dispatcher at `path`.
    ///
    /// Every method is routed to the dispatcher so that non-POST requests
    /// get its 405 rather than the router's.
    pub fn into_router(self, path: &str) -> Router {
        Router::new()
            .route(path, any(dispatch))
            .with_state(Arc::new(self))
    }
}

async fn dispatch(
    State(webhook): State<Arc<Webhook>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    webhook.handle(&method, &headers, &body)
}
