//! Client wrappers for the identity API and the per-user profile document
//! store. These keep endpoint paths in one place; session state wiring lives
//! in [`super::state`], which feeds results through the event hub.

use crate::{
    app_lib::{
        AppError, get_optional_json_with_credentials, post_empty_with_credentials,
        post_json_with_credentials_response, put_json_with_credentials,
    },
    features::session::types::{IdentityClaims, ProfileRecord, SignInRequest},
};

/// Authenticates with email and password. On success the server sets the
/// `HttpOnly` session cookie and returns the identity claims.
pub async fn sign_in(request: &SignInRequest) -> Result<IdentityClaims, AppError> {
    post_json_with_credentials_response("/v1/auth/login", request).await
}

/// Clears the server-side session. Local state handling is the caller's
/// concern; see the lenient sign-out contract in `state::sign_out`.
pub async fn sign_out() -> Result<(), AppError> {
    post_empty_with_credentials("/v1/auth/logout").await
}

/// Fetches the current session using cookie-based auth.
/// Returns `None` when the session is missing or expired.
pub async fn fetch_session() -> Result<Option<IdentityClaims>, AppError> {
    get_optional_json_with_credentials("/v1/auth/session").await
}

/// Fetches the profile document for a user id.
/// Returns `None` when no document exists.
pub async fn fetch_profile(id: String) -> Result<Option<ProfileRecord>, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("User id is required.".to_string()));
    }

    get_optional_json_with_credentials(&format!("/v1/users/{trimmed}/profile")).await
}

/// Writes profile fields for a user id. The server merges the supplied
/// fields into the existing document.
pub async fn update_profile(id: &str, record: &ProfileRecord) -> Result<(), AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("User id is required.".to_string()));
    }

    put_json_with_credentials(&format!("/v1/users/{trimmed}/profile"), record).await
}
