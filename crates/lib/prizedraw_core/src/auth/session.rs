//! Login and token refresh against the backend.

use std::sync::Arc;

use reqwest::Client;
use tracing::{debug, warn};

use super::AuthError;
use super::store::TokenStore;
use crate::models::auth::TokenPair;

/// Login endpoint path.
const LOGIN_PATH: &str = "/prize-draws/webapp/login";
/// Refresh endpoint path.
const REFRESH_PATH: &str = "/prize-draws/webapp/refresh";

/// Exchanges host init payloads and refresh tokens for token pairs.
///
/// Successful exchanges store the new pair; the store is the single source
/// of truth for the current session.
#[derive(Clone)]
pub struct SessionManager {
    http: Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
}

impl SessionManager {
    pub fn new(http: Client, base_url: String, store: Arc<dyn TokenStore>) -> Self {
        Self {
            http,
            base_url,
            store,
        }
    }

    /// Whether a token pair is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    /// Authenticate with the opaque host init payload.
    ///
    /// The payload is sent as a JSON-encoded string body, exactly as the
    /// host handed it over. Never retries.
    pub async fn login(&self, init_data: &str) -> Result<TokenPair, AuthError> {
        let url = format!("{}{}", self.base_url, LOGIN_PATH);
        let resp = self.http.post(&url).json(&init_data).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::LoginRejected { status, body });
        }

        let tokens = resp
            .json::<TokenPair>()
            .await
            .map_err(|e| AuthError::Parse(format!("login response: {e}")))?;
        self.store.save(&tokens);
        debug!("login succeeded, token pair stored");
        Ok(tokens)
    }

    /// Trade the stored refresh token for a fresh pair.
    ///
    /// A backend rejection clears the stored pair before the error is
    /// returned; stale tokens must not survive a rejected refresh. A
    /// transport failure leaves the pair in place (the backend never ruled
    /// on it).
    pub async fn refresh(&self) -> Result<TokenPair, AuthError> {
        let Some(refresh_token) = self.store.refresh_token() else {
            return Err(AuthError::MissingRefreshToken);
        };

        let url = format!("{}{}", self.base_url, REFRESH_PATH);
        let resp = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {refresh_token}"))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            self.store.clear();
            warn!(status = %status, "refresh rejected, stored tokens cleared");
            return Err(AuthError::RefreshRejected { status, body });
        }

        let tokens = resp
            .json::<TokenPair>()
            .await
            .map_err(|e| AuthError::Parse(format!("refresh response: {e}")))?;
        self.store.save(&tokens);
        debug!("refresh succeeded, token pair rotated");
        Ok(tokens)
    }
}
