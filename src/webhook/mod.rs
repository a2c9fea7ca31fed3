//! Inbound webhook dispatcher.
//!
//! [`Webhook`] routes Ecwid webhook requests to per-event handlers and maps
//! the outcome to the HTTP status Ecwid expects. It is framework-agnostic:
//! feed it the method, headers and raw body with [`Webhook::handle`], or
//! enable the `axum` feature and mount it with `Webhook::into_router`.
//!
//! ```rust,ignore
//! use ecwid::webhook::{Event, Webhook};
//!
//! let webhook = Webhook::new("client_secret")
//!     .require_signature(true)
//!     .on(Event::OrderCreated, |body| {
//!         println!("order {} created", body.entity_id);
//!         Ok(())
//!     });
//! ```

pub mod signature;

#[cfg(feature = "axum")]
pub mod server;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use http::{HeaderMap, Method, StatusCode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::api::types::Id;

pub use signature::{sign, verify, SIGNATURE_HEADER};

/// Errors raised by webhook handlers and signature checks.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The handler failed to process the event
    #[error("Handler error: {0}")]
    Handler(String),

    /// Signature verification is required but no signature was sent
    #[error("Missing webhook signature")]
    MissingSignature,

    /// The signature does not match the payload
    #[error("Invalid webhook signature")]
    InvalidSignature,

    /// The client secret cannot be used as an HMAC key
    #[error("Invalid client secret: {0}")]
    InvalidSecret(String),
}

impl WebhookError {
    pub fn handler(message: impl Into<String>) -> Self {
        WebhookError::Handler(message.into())
    }
}

/// Webhook event types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Event {
    UnfinishedOrderCreated,
    UnfinishedOrderUpdated,
    UnfinishedOrderDeleted,
    OrderCreated,
    OrderUpdated,
    OrderDeleted,
    ProductCreated,
    ProductUpdated,
    ProductDeleted,
    CategoryCreated,
    CategoryUpdated,
    CategoryDeleted,
    ApplicationInstalled,
    ApplicationUninstalled,
    ApplicationSubscriptionStatusChanged,
    ProfileUpdated,
    ProfileSubscriptionStatusChanged,
    CustomerCreated,
    CustomerUpdated,
    CustomerDeleted,
    /// An event type this crate does not know about
    Other(String),
}

impl Event {
    /// Wire name, e.g. `order.created`.
    pub fn as_str(&self) -> &str {
        match self {
            Event::UnfinishedOrderCreated => "unfinished_order.created",
            Event::UnfinishedOrderUpdated => "unfinished_order.updated",
            Event::UnfinishedOrderDeleted => "unfinished_order.deleted",
            Event::OrderCreated => "order.created",
            Event::OrderUpdated => "order.updated",
            Event::OrderDeleted => "order.deleted",
            Event::ProductCreated => "product.created",
            Event::ProductUpdated => "product.updated",
            Event::ProductDeleted => "product.deleted",
            Event::CategoryCreated => "category.created",
            Event::CategoryUpdated => "category.updated",
            Event::CategoryDeleted => "category.deleted",
            Event::ApplicationInstalled => "application.installed",
            Event::ApplicationUninstalled => "application.uninstalled",
            Event::ApplicationSubscriptionStatusChanged => "application.subscriptionStatusChanged",
            Event::ProfileUpdated => "profile.updated",
            Event::ProfileSubscriptionStatusChanged => "profile.subscriptionStatusChanged",
            Event::CustomerCreated => "customer.created",
            Event::CustomerUpdated => "customer.updated",
            Event::CustomerDeleted => "customer.deleted",
            Event::Other(name) => name,
        }
    }

    /// Parse a wire name; unknown names become [`Event::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "unfinished_order.created" => Event::UnfinishedOrderCreated,
            "unfinished_order.updated" => Event::UnfinishedOrderUpdated,
            "unfinished_order.deleted" => Event::UnfinishedOrderDeleted,
            "order.created" => Event::OrderCreated,
            "order.updated" => Event::OrderUpdated,
            "order.deleted" => Event::OrderDeleted,
            "product.created" => Event::ProductCreated,
            "product.updated" => Event::ProductUpdated,
            "product.deleted" => Event::ProductDeleted,
            "category.created" => Event::CategoryCreated,
            "category.updated" => Event::CategoryUpdated,
            "category.deleted" => Event::CategoryDeleted,
            "application.installed" => Event::ApplicationInstalled,
            "application.uninstalled" => Event::ApplicationUninstalled,
            "application.subscriptionStatusChanged" => Event::ApplicationSubscriptionStatusChanged,
            "profile.updated" => Event::ProfileUpdated,
            "profile.subscriptionStatusChanged" => Event::ProfileSubscriptionStatusChanged,
            "customer.created" => Event::CustomerCreated,
            "customer.updated" => Event::CustomerUpdated,
            "customer.deleted" => Event::CustomerDeleted,
            other => Event::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Event {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Event::from_name(&name))
    }
}

/// Change details, sent for `order.*` and subscription events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_payment_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_payment_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_fulfillment_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_fulfillment_status: Option<String>,
    /// Previous store premium plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_subscription_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_subscription_name: Option<String>,
    /// Previous application subscription status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_subscription_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_subscription_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
}

/// Body of a webhook request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookBody {
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "eventType")]
    pub event_type: Event,
    /// Unix timestamp of the event
    #[serde(rename = "eventCreated")]
    pub event_created: i64,
    #[serde(rename = "storeId")]
    pub store_id: Id,
    /// productId, categoryId, orderNumber or storeId depending on the event
    #[serde(rename = "entityId")]
    pub entity_id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<WebhookData>,
}

impl WebhookBody {
    /// When the event occurred.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.event_created, 0)
    }
}

type Handler = Arc<dyn Fn(&WebhookBody) -> Result<(), WebhookError> + Send + Sync>;

/// Event dispatcher for Ecwid webhooks.
///
/// Cheap to clone; clones share handlers.
#[derive(Clone)]
pub struct Webhook {
    secret: String,
    require_signature: bool,
    handlers: HashMap<Event, Handler>,
}

impl fmt::Debug for Webhook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Webhook")
            .field("require_signature", &self.require_signature)
            .field("events", &self.handlers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Webhook {
    /// Create a dispatcher for an application's client secret.
    pub fn new(client_secret: impl Into<String>) -> Self {
        Self {
            secret: client_secret.into(),
            require_signature: false,
            handlers: HashMap::new(),
        }
    }

    /// Reject requests without a valid `X-Ecwid-Webhook-Signature` (401).
    ///
    /// Off by default. Has no effect with an empty secret.
    pub fn require_signature(mut self, required: bool) -> Self {
        self.require_signature = required;
        self
    }

    /// Register the handler for `event`, replacing any previous one.
    pub fn on<F>(mut self, event: Event, handler: F) -> Self
    where
        F: Fn(&WebhookBody) -> Result<(), WebhookError> + Send + Sync + 'static,
    {
        if self.handlers.contains_key(&event) {
            tracing::warn!(event = %event, "Replacing webhook handler");
        }
        self.handlers.insert(event, Arc::new(handler));
        self
    }

    /// Whether a handler is registered for `event`.
    pub fn handles(&self, event: &Event) -> bool {
        self.handlers.contains_key(event)
    }

    fn check_signature(&self, headers: &HeaderMap, body: &WebhookBody) -> Result<(), WebhookError> {
        if !self.require_signature || self.secret.is_empty() {
            return Ok(());
        }
        let provided = headers
            .get(SIGNATURE_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(WebhookError::MissingSignature)?;
        verify(&self.secret, body.event_created, &body.event_id, provided)
    }

    /// Process one webhook request and return the response status.
    ///
    /// * 405 for anything but POST
    /// * 406 when the body is not a webhook JSON document
    /// * 401 when signatures are required and missing or wrong
    /// * 404 when no handler is registered for the event
    /// * 500 when the handler fails
    /// * 200 otherwise
    pub fn handle(&self, method: &Method, headers: &HeaderMap, body: &[u8]) -> StatusCode {
        if *method != Method::POST {
            return StatusCode::METHOD_NOT_ALLOWED;
        }

        let body: WebhookBody = match serde_json::from_slice(body) {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(error = %e, "Rejecting malformed webhook body");
                return StatusCode::NOT_ACCEPTABLE;
            }
        };

        if let Err(e) = self.check_signature(headers, &body) {
            tracing::warn!(event_id = %body.event_id, error = %e, "Rejecting webhook");
            return StatusCode::UNAUTHORIZED;
        }

        let Some(handler) = self.handlers.get(&body.event_type) else {
            tracing::debug!(event = %body.event_type, "No webhook handler registered");
            return StatusCode::NOT_FOUND;
        };

        tracing::debug!(
            event = %body.event_type,
            event_id = %body.event_id,
            entity_id = %body.entity_id,
            "Dispatching webhook"
        );
        match handler(&body) {
            Ok(()) => StatusCode::OK,
            Err(e) => {
                tracing::warn!(event = %body.event_type, error = %e, "Webhook handler failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
