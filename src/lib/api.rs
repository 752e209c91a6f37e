//! HTTP helpers for the EduReg JSON API. Every call carries the session
//! cookie and an abort-based timeout so a stalled backend never leaves the UI
//! hanging. Non-2xx responses are mapped to [`AppError::Http`] with the
//! backend's `detail` message extracted from the body.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::{AbortController, RequestCredentials};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Fetches JSON with the session cookie attached.
pub async fn get_json_with_credentials<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        Request::get(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON and parses a JSON response.
pub async fn post_json_with_credentials<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON where success carries no meaningful body.
pub async fn post_json_empty_with_credentials<B: Serialize>(
    path: &str,
    body: &B,
) -> Result<(), AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Posts an empty body with the session cookie, used to end a session.
pub async fn post_empty_with_credentials(path: &str) -> Result<(), AppError> {
    let url = build_url(path);
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .body("")
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Issues a DELETE and parses a JSON response.
pub async fn delete_json_with_credentials<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        Request::delete(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Issues a DELETE where success carries no meaningful body.
pub async fn delete_empty_with_credentials(path: &str) -> Result<(), AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        Request::delete(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    let base = config.api_base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Network("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with the backend detail.
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

/// Handles empty responses and surfaces HTTP errors with the backend detail.
async fn handle_empty_response(response: gloo_net::http::Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: gloo_net::http::Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        detail: error_detail(&body),
    }
}

/// Extracts the `detail` message from an error body, falling back to the
/// trimmed and truncated body text.
fn error_detail(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: String,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        let trimmed = parsed.detail.trim();
        return if trimmed.is_empty() {
            "Request failed.".to_string()
        } else {
            trimmed.chars().take(MAX_ERROR_CHARS).collect()
        };
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::error_detail;

    #[test]
    fn error_detail_reads_json_detail_field() {
        assert_eq!(
            error_detail(r#"{"detail": "Username already taken"}"#),
            "Username already taken"
        );
    }

    #[test]
    fn error_detail_falls_back_to_raw_body() {
        assert_eq!(error_detail("  gateway exploded  "), "gateway exploded");
    }

    #[test]
    fn error_detail_handles_empty_body() {
        assert_eq!(error_detail(""), "Request failed.");
        assert_eq!(error_detail(r#"{"detail": "   "}"#), "Request failed.");
    }

    #[test]
    fn error_detail_truncates_long_bodies() {
        let body = "x".repeat(1000);
        assert_eq!(error_detail(&body).len(), 200);
    }
}
