//! HTTP helpers for JSON APIs with consistent timeouts and error handling.
//! Feature clients use these helpers to avoid duplicating request setup and to
//! enforce a predictable timeout policy.
//!
//! Two backends are reachable: the identity API (cookie-authenticated; the
//! `*_with_credentials` helpers) and the course persistence API (no auth
//! header by contract; the bare `get_json`/`post_json`/`delete_json`
//! helpers). The helpers do not store secrets; cookies stay `HttpOnly` and
//! are attached by the browser.

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

/// Fetches JSON from the course API.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let url = build_course_url(path);
    let response = send_with_timeout(|signal| {
        Request::get(&url)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON to the course API and expects an empty response body.
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let url = build_course_url(path);
    let payload = encode_body(body)?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Sends a DELETE with a JSON body to the course API.
pub async fn delete_json<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let url = build_course_url(path);
    let payload = encode_body(body)?;
    let response = send_with_timeout(move |signal| {
        Request::delete(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Fetches JSON from the identity API with cookies; 204, 401, and 404 map to `None`.
pub async fn get_optional_json_with_credentials<T: DeserializeOwned>(
    path: &str,
) -> Result<Option<T>, AppError> {
    let url = build_identity_url(path);
    let response = send_with_timeout(|signal| {
        Request::get(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_optional_json_response(response).await
}

/// Posts JSON to the identity API with cookies and parses a JSON response.
/// Use this for calls where the server also sets or refreshes the session cookie.
pub async fn post_json_with_credentials_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = build_identity_url(path);
    let payload = encode_body(body)?;
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

/// Posts an empty body with cookies, used to clear a session.
pub async fn post_empty_with_credentials(path: &str) -> Result<(), AppError> {
    let url = build_identity_url(path);
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

/// Puts JSON to the identity API with cookies and expects an empty response body.
pub async fn put_json_with_credentials<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let url = build_identity_url(path);
    let payload = encode_body(body)?;
    let response = send_with_timeout(move |signal| {
        Request::put(&url)
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, AppError> {
    to_string(body).map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
}

/// Builds a URL from the configured identity API base and the provided path.
fn build_identity_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from the configured course API base and the provided path.
fn build_course_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.course_api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
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
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
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

/// Handles empty responses and returns sanitized HTTP errors when needed.
async fn handle_empty_response(response: gloo_net::http::Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

/// Parses optional JSON responses; 204, 401, and 404 mean "nothing there".
async fn handle_optional_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<Option<T>, AppError> {
    if response.status() == 204 {
        return Ok(None);
    }
    if response.ok() {
        response
            .json::<T>()
            .await
            .map(Some)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        if status == 401 || status == 404 {
            return Ok(None);
        }
        Err(http_error(response).await)
    }
}

async fn http_error(response: gloo_net::http::Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        message: sanitize_body(body),
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{build_url_with_base, sanitize_body};

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url_with_base("https://api.neevcode.com", "/v1/auth/session"),
            "https://api.neevcode.com/v1/auth/session"
        );
        assert_eq!(
            build_url_with_base("https://api.neevcode.com/", "v1/auth/session"),
            "https://api.neevcode.com/v1/auth/session"
        );
    }

    #[test]
    fn build_url_with_empty_base_keeps_relative_path() {
        assert_eq!(build_url_with_base("", "/api/course"), "/api/course");
        assert_eq!(build_url_with_base("  ", "/api/course"), "/api/course");
    }

    #[test]
    fn sanitize_body_truncates_and_defaults() {
        assert_eq!(sanitize_body(String::new()), "Request failed.");
        assert_eq!(sanitize_body("  oops  ".to_string()), "oops");
        let long = "x".repeat(500);
        assert_eq!(sanitize_body(long).chars().count(), 200);
    }
}
