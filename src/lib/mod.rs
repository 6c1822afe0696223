//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! All HTTP traffic goes through the helpers in [`api`] so every request gets
//! the same timeout policy and error shaping. Configuration is resolved at
//! build time with a runtime `window.NEEVCODE_CONFIG` override so static
//! deployments can repoint endpoints without rebuilding. None of these
//! utilities store secrets; session auth rides on `HttpOnly` cookies managed
//! by the browser.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;

pub use api::{
    delete_json, get_json, get_optional_json_with_credentials, post_empty_with_credentials,
    post_json, post_json_with_credentials_response, put_json_with_credentials,
};
pub use errors::AppError;
