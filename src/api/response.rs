//! Response envelope decoding and mutation result interpretation.
//!
//! Every endpoint funnels its [`RawResponse`] through [`decode`], which turns
//! a non-200 status into [`ApiError::Api`] and a malformed 200 body into
//! [`ApiError::Decode`]. The `interpret_*` helpers layer the business checks
//! of create/update/delete calls on top of it.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::api::client::RawResponse;
use crate::api::error::{ApiError, ApiResult, ErrorResponse};

/// Decode a raw response into `T`, classifying failures.
pub fn decode<T: DeserializeOwned>(response: &RawResponse) -> ApiResult<T> {
    if response.status != StatusCode::OK {
        return Err(error_from_response(response));
    }

    serde_json::from_slice(&response.body).map_err(|e| {
        ApiError::Decode(format!("Failed to deserialize response: {}", e))
    })
}

/// Build the error for a non-200 response.
///
/// Uses `errorMessage` from the body when present and non-empty, otherwise
/// the status line (e.g. `400 Bad Request`). The reason phrase is the
/// canonical one for the code, not the one the server sent; codes without a
/// canonical reason give just the number.
fn error_from_response(response: &RawResponse) -> ApiError {
    let parsed = match serde_json::from_slice::<ErrorResponse>(&response.body) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!(status = %response.status, error = %e, "Unreadable error response body");
            None
        }
    };
    let message = parsed
        .as_ref()
        .and_then(ErrorResponse::message)
        .map(str::to_string)
        .unwrap_or_else(|| status_line(response.status));

    ApiError::Api {
        status: response.status.as_u16(),
        message,
    }
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

#[derive(Deserialize)]
struct CreateResult {
    id: u64,
}

#[derive(Deserialize)]
struct UpdateResult {
    #[serde(rename = "updateCount")]
    update_count: i64,
}

#[derive(Deserialize)]
struct DeleteResult {
    #[serde(rename = "deleteCount")]
    delete_count: u64,
}

/// Extract the id of a newly created entity.
///
/// The id is returned verbatim; a server-sent `0` is not treated as an error.
pub fn interpret_create(response: &RawResponse) -> ApiResult<u64> {
    decode::<CreateResult>(response).map(|r| r.id)
}

/// Extract the raw `updateCount`.
pub fn interpret_update_count(response: &RawResponse) -> ApiResult<i64> {
    decode::<UpdateResult>(response).map(|r| r.update_count)
}

/// Succeed only when exactly one entity was updated.
pub fn interpret_update(response: &RawResponse) -> ApiResult<()> {
    let count = interpret_update_count(response)?;
    if count != 1 {
        return Err(ApiError::NoRowsAffected {
            operation: "update",
            count,
        });
    }
    Ok(())
}

/// Succeed when at least one entity was deleted, returning the count.
///
/// This is the bulk variant; see [`interpret_delete_one`] for single-entity
/// deletes.
pub fn interpret_delete(response: &RawResponse) -> ApiResult<u64> {
    let count = decode::<DeleteResult>(response)?.delete_count;
    if count == 0 {
        return Err(ApiError::NoRowsAffected {
            operation: "delete",
            count: 0,
        });
    }
    Ok(count)
}

/// Succeed when the single targeted entity was deleted.
pub fn interpret_delete_one(response: &RawResponse) -> ApiResult<()> {
    interpret_delete(response).map(|_| ())
}
