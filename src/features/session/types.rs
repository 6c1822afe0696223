//! Session and identity types shared by the event hub, the store, and the
//! login flow. These carry no credential material; passwords only ever pass
//! through the login request payload.

use crate::app_lib::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown when neither the backend nor the profile document
/// supplies a display name.
pub const FALLBACK_DISPLAY_NAME: &str = "User";

/// The authenticated user as the application sees it after enrichment.
///
/// `id` is opaque and stable for the lifetime of a session; `display_name`
/// may be refreshed (e.g. after a profile update) without the id changing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub display_name: String,
    pub email: String,
}

/// Identity as reported by the backend, before profile enrichment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityClaims {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// Secondary profile document keyed by user id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub display_name: Option<String>,
    pub email: Option<String>,
}

/// Login request payload.
#[derive(Clone, Debug, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// A session transition pushed through the event hub, in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn(IdentityClaims),
    SignedOut,
}

/// Process-wide session record: present identity or none.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub identity: Option<Identity>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

/// Coarse classification of sign-in failures, for user-facing messaging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignInError {
    InvalidCredential,
    UserNotFound,
    WrongPassword,
    RateLimited,
    Unknown(String),
}

impl SignInError {
    /// Maps a transport-level error onto the backend's failure taxonomy.
    /// The backend reports a machine-readable code in the error body; the
    /// status code alone disambiguates the rest.
    pub fn classify(error: &AppError) -> Self {
        match error {
            AppError::Http { status, message } => {
                let code = message.to_lowercase();
                match *status {
                    400 | 401 => {
                        if code.contains("wrong_password") {
                            SignInError::WrongPassword
                        } else if code.contains("user_not_found") {
                            SignInError::UserNotFound
                        } else {
                            SignInError::InvalidCredential
                        }
                    }
                    404 => SignInError::UserNotFound,
                    429 => SignInError::RateLimited,
                    _ => SignInError::Unknown(error.to_string()),
                }
            }
            other => SignInError::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for SignInError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignInError::InvalidCredential => {
                write!(formatter, "Invalid email or password.")
            }
            SignInError::UserNotFound => {
                write!(formatter, "No account found for that email.")
            }
            SignInError::WrongPassword => write!(formatter, "Incorrect password."),
            SignInError::RateLimited => {
                write!(formatter, "Too many attempts. Please try again shortly.")
            }
            SignInError::Unknown(message) => {
                write!(formatter, "Sign-in failed: {message}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, message: &str) -> AppError {
        AppError::Http {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn default_session_is_unauthenticated() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(session.identity.is_none());
    }

    #[test]
    fn session_with_identity_is_authenticated() {
        let session = Session {
            identity: Some(Identity {
                id: "u1".to_string(),
                display_name: "Alice".to_string(),
                email: "a@x.com".to_string(),
            }),
        };
        assert!(session.is_authenticated());
    }

    #[test]
    fn classify_maps_status_codes() {
        assert_eq!(
            SignInError::classify(&http(401, "invalid_credential")),
            SignInError::InvalidCredential
        );
        assert_eq!(
            SignInError::classify(&http(401, "wrong_password")),
            SignInError::WrongPassword
        );
        assert_eq!(
            SignInError::classify(&http(401, "user_not_found")),
            SignInError::UserNotFound
        );
        assert_eq!(
            SignInError::classify(&http(404, "")),
            SignInError::UserNotFound
        );
        assert_eq!(
            SignInError::classify(&http(429, "rate_limited")),
            SignInError::RateLimited
        );
    }

    #[test]
    fn classify_falls_back_to_unknown() {
        let error = AppError::Network("connection refused".to_string());
        match SignInError::classify(&error) {
            SignInError::Unknown(message) => assert!(message.contains("connection refused")),
            other => panic!("expected Unknown, got {other:?}"),
        }
    }
}
