//! Network URL constants for the Ecwid REST API.

/// Default Ecwid API host.
pub const DEFAULT_API_HOST: &str = "app.ecwid.com";

/// Path prefix of the v3 REST API. The store id follows it.
pub const API_PATH_PREFIX: &str = "/api/v3";

/// Build the per-store base URL: `https://<host>/api/v3/{storeId}`.
pub fn store_base_url(host: &str, store_id: u64) -> String {
    format!(
        "https://{}{}/{}",
        host.trim_end_matches('/'),
        API_PATH_PREFIX,
        store_id
    )
}
