//! Shared request execution — send, classify the HTTP status, decode JSON.
//!
//! Every adapter funnels its request through [`send_json`], so the status
//! mapping and the credential scrubbing of error bodies live in one place.

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use umc_core::utils::sanitize_body;
use umc_core::{Credential, Error, Result, Service};

/// Send a prepared request and decode a successful JSON body into `T`.
///
/// Non-success statuses are mapped with [`classify_status`]. The body of
/// an error response is scrubbed of `credential` before it is kept.
pub async fn send_json<T: DeserializeOwned>(
    service: Service,
    request: RequestBuilder,
    credential: &Credential,
) -> Result<T> {
    let response = request.send().await.map_err(|e| {
        let err = if e.is_builder() {
            Error::invalid_request(service, e)
        } else {
            Error::transport(service, e)
        };
        error!(provider = %service, error = %err, "HTTP request failed");
        err
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = sanitize_body(&body, credential.expose());
        error!(provider = %service, status = %status, body = %message, "API error");
        return Err(classify_status(service, status, message));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::transport(service, e))?;

    debug!(provider = %service, bytes = bytes.len(), "Response received");

    serde_json::from_slice::<T>(&bytes).map_err(|e| {
        error!(provider = %service, error = %e, "Failed to parse response");
        Error::response(service, format!("malformed response body: {e}"))
    })
}

/// Map a non-success HTTP status onto the shared taxonomy.
pub fn classify_status(service: Service, status: StatusCode, message: String) -> Error {
    let code = status.as_u16();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Authentication {
            service,
            status: code,
            message,
        },
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimited { service, message },
        s if s.is_server_error() => Error::Unavailable {
            service,
            status: code,
            message,
        },
        _ => Error::Request {
            service,
            status: code,
            message,
        },
    }
}

/// Join a base URL and a path, tolerating a trailing slash on the base.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
