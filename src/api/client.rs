//! Ecwid REST API client implementation.
//!
//! The [`EcwidClient`] owns the HTTP connection pool, the per-store base URL
//! and the access token. Every request is built through [`ApiRequest`], which
//! attaches the `token` query parameter and returns the raw status and body
//! for the response decoder.
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid::api::EcwidClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EcwidClient::new(1003, "secret_token")?;
//!
//!     let product = client.product_get(42).await?;
//!     println!("{}", product.name.unwrap_or_default());
//!
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::Id;
use crate::network::{store_base_url, DEFAULT_API_HOST};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the store id for [`EcwidClientBuilder::from_env`].
pub const ENV_STORE_ID: &str = "ECWID_STORE_ID";
/// Environment variable holding the access token.
pub const ENV_TOKEN: &str = "ECWID_TOKEN";
/// Optional environment variable overriding the API host.
pub const ENV_API_HOST: &str = "ECWID_API_HOST";

/// Builder for configuring [`EcwidClient`].
#[derive(Clone)]
pub struct EcwidClientBuilder {
    store_id: u64,
    token: String,
    host: String,
    base_url: Option<String>,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
}

impl fmt::Debug for EcwidClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcwidClientBuilder")
            .field("store_id", &self.store_id)
            .field("host", &self.host)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl EcwidClientBuilder {
    /// Create a new builder for the given store and access token.
    pub fn new(store_id: u64, token: impl Into<String>) -> Self {
        Self {
            store_id,
            token: token.into(),
            host: DEFAULT_API_HOST.to_string(),
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: Vec::new(),
        }
    }

    /// Create a builder from `ECWID_STORE_ID`, `ECWID_TOKEN` and the
    /// optional `ECWID_API_HOST` environment variables.
    pub fn from_env() -> ApiResult<Self> {
        let store_id = std::env::var(ENV_STORE_ID)
            .map_err(|_| ApiError::InvalidParameter(format!("{} is not set", ENV_STORE_ID)))?;
        let store_id = store_id.trim().parse::<u64>().map_err(|e| {
            ApiError::InvalidParameter(format!("{} is not a valid store id: {}", ENV_STORE_ID, e))
        })?;
        let token = std::env::var(ENV_TOKEN)
            .map_err(|_| ApiError::InvalidParameter(format!("{} is not set", ENV_TOKEN)))?;

        let mut builder = Self::new(store_id, token);
        if let Ok(host) = std::env::var(ENV_API_HOST) {
            if !host.is_empty() {
                builder = builder.host(host);
            }
        }
        Ok(builder)
    }

    /// Set the API host (default `app.ecwid.com`).
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Override the full base URL, ignoring host and store id.
    ///
    /// Mostly useful for pointing the client at a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<EcwidClient> {
        if self.token.is_empty() {
            return Err(ApiError::InvalidParameter("token cannot be empty".to_string()));
        }

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        for (name, value) in self.default_headers {
            let header_name = reqwest::header::HeaderName::try_from(name.as_str()).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = reqwest::header::HeaderValue::from_str(&value).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let http_client = Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10)
            .default_headers(headers)
            .build()?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| store_base_url(&self.host, self.store_id));

        Ok(EcwidClient {
            http_client,
            base_url,
            store_id: self.store_id,
            token: Arc::from(self.token),
        })
    }
}

/// Ecwid REST API client.
///
/// Cheap to clone; clones share the connection pool. Each instance carries
/// its own token, so clients for different stores never interfere.
#[derive(Clone)]
pub struct EcwidClient {
    pub(crate) http_client: Client,
    pub(crate) base_url: String,
    store_id: u64,
    token: Arc<str>,
}

impl fmt::Debug for EcwidClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcwidClient")
            .field("base_url", &self.base_url)
            .field("store_id", &self.store_id)
            .finish_non_exhaustive()
    }
}

impl EcwidClient {
    /// Create a new client for a store with default settings (30s timeout).
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or the HTTP client cannot be
    /// initialized.
    pub fn new(store_id: u64, token: impl Into<String>) -> ApiResult<Self> {
        EcwidClientBuilder::new(store_id, token).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(store_id: u64, token: impl Into<String>) -> EcwidClientBuilder {
        EcwidClientBuilder::new(store_id, token)
    }

    /// Get the base URL (`https://<host>/api/v3/{storeId}` unless overridden).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the store id.
    pub fn store_id(&self) -> u64 {
        self.store_id
    }

    /// Start a request against a path relative to the store base URL.
    pub fn request(&self, method: Method, path: impl Into<String>) -> ApiRequest<'_> {
        ApiRequest {
            client: self,
            method,
            path: path.into(),
            path_params: Vec::new(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            error: None,
        }
    }

    /// Shorthand for a GET request.
    pub fn get(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::GET, path)
    }

    /// Shorthand for a POST request.
    pub fn post(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::POST, path)
    }

    /// Shorthand for a PUT request.
    pub fn put(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::PUT, path)
    }

    /// Shorthand for a DELETE request.
    pub fn delete(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::DELETE, path)
    }
}

/// Status code and raw body of a received response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

enum RequestBody {
    Json(Vec<u8>),
    Raw { data: Vec<u8>, content_type: String },
}

/// A single request under construction.
///
/// Path parameters are written as `{name}` placeholders in the path and
/// substituted (URL-encoded) when the request is sent.
#[must_use = "requests do nothing until `send` is awaited"]
pub struct ApiRequest<'a> {
    client: &'a EcwidClient,
    method: Method,
    path: String,
    path_params: Vec<(String, String)>,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<RequestBody>,
    error: Option<ApiError>,
}

impl<'a> ApiRequest<'a> {
    /// Add a single query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Add every entry of a filter map as a query parameter.
    pub fn queries(mut self, params: &HashMap<String, String>) -> Self {
        self.query
            .extend(params.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Bind a `{name}` placeholder in the path.
    pub fn path_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.path_params.push((name.into(), value.to_string()));
        self
    }

    /// Bind a `{name}` placeholder to an entity id.
    pub fn path_id(self, name: impl Into<String>, id: impl Into<Id>) -> Self {
        let id: Id = id.into();
        self.path_param(name, id)
    }

    /// Add a request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Send a JSON body (`Content-Type: application/json`).
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        match serde_json::to_vec(body) {
            Ok(bytes) => self.body = Some(RequestBody::Json(bytes)),
            Err(e) => {
                self.error = Some(ApiError::InvalidParameter(format!(
                    "Failed to serialize request body: {}",
                    e
                )))
            }
        }
        self
    }

    /// Send a raw body with the given content type.
    pub fn bytes(mut self, data: impl Into<Vec<u8>>, content_type: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Raw {
            data: data.into(),
            content_type: content_type.into(),
        });
        self
    }

    fn resolved_path(&self) -> String {
        let mut path = self.path.clone();
        for (name, value) in &self.path_params {
            path = path.replace(&format!("{{{}}}", name), &urlencoding::encode(value));
        }
        path
    }

    /// Send the request and collect the status and body.
    ///
    /// Only transport failures are errors here; status handling is the
    /// decoder's job.
    pub async fn send(self) -> ApiResult<RawResponse> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let path = self.resolved_path();
        let url = format!("{}{}", self.client.base_url, path);
        tracing::debug!(method = %self.method, path = %path, "Sending Ecwid API request");

        let mut req = self
            .client
            .http_client
            .request(self.method, &url)
            .query(&[("token", &*self.client.token)]);
        if !self.query.is_empty() {
            req = req.query(&self.query);
        }
        for (name, value) in &self.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        req = match self.body {
            Some(RequestBody::Json(bytes)) => req
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(bytes),
            Some(RequestBody::Raw { data, content_type }) => req
                .header(reqwest::header::CONTENT_TYPE, content_type)
                .body(data),
            None => req,
        };

        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(status = %status, bytes = body.len(), "Received Ecwid API response");

        Ok(RawResponse::new(status, body.to_vec()))
    }
}
