//! Session authentication.
//!
//! Token storage plus the login/refresh exchanges against the backend.
//! Session phase is implicit: a stored token pair means "authenticated"
//! until the backend says otherwise with a 401.

pub mod session;
pub mod store;

use reqwest::StatusCode;
use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Login rejected: HTTP {status}: {body}")]
    LoginRejected { status: StatusCode, body: String },

    #[error("No refresh token stored")]
    MissingRefreshToken,

    #[error("Refresh rejected: HTTP {status}: {body}")]
    RefreshRejected { status: StatusCode, body: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response parse error: {0}")]
    Parse(String),
}
