//! Typed client for the raffle backend.

pub mod client;
mod wire;

use reqwest::StatusCode;
use thiserror::Error;

use crate::auth::AuthError;

/// Raffle API errors.
#[derive(Debug, Error)]
pub enum RaffleError {
    #[error("Not authenticated: no access token stored")]
    NotAuthenticated,

    #[error("Status fetch HTTP {status}: {body}")]
    FetchRejected { status: StatusCode, body: String },

    #[error("Participation HTTP {status}: {body}")]
    JoinRejected { status: StatusCode, body: String },

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response parse error: {0}")]
    Parse(String),
}
