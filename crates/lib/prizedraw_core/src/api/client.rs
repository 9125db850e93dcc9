//! Raffle API client with automatic token refresh.

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use super::RaffleError;
use super::wire::RaffleStatusWire;
use crate::auth::session::SessionManager;
use crate::auth::store::TokenStore;
use crate::models::raffle::{ParticipationOutcome, RaffleSnapshot};

/// Path prefix shared by the raffle endpoints.
const WEBAPP_PREFIX: &str = "/prize-draws/webapp";

/// Client for the raffle endpoints.
///
/// Every call sends the stored access token as a bearer credential and
/// retries exactly once after a 401, behind a token refresh.
pub struct RaffleClient {
    http: Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
    session: SessionManager,
}

impl RaffleClient {
    pub fn new(
        http: Client,
        base_url: String,
        store: Arc<dyn TokenStore>,
        session: SessionManager,
    ) -> Self {
        Self {
            http,
            base_url,
            store,
            session,
        }
    }

    /// Fetch the raffle status, including subscription state.
    ///
    /// `preview` selects the preview endpoint instead of the regular
    /// check-subscriptions one; both return the same shape.
    pub async fn fetch_status(
        &self,
        raffle_id: Uuid,
        preview: bool,
    ) -> Result<RaffleSnapshot, RaffleError> {
        let endpoint = if preview {
            "preview"
        } else {
            "check-subscriptions"
        };
        let url = format!(
            "{}{WEBAPP_PREFIX}/uuid/{raffle_id}/{endpoint}",
            self.base_url
        );

        let resp = self.send_authorized(|| self.http.get(&url)).await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RaffleError::FetchRejected { status, body });
        }

        let wire = resp
            .json::<RaffleStatusWire>()
            .await
            .map_err(|e| RaffleError::Parse(format!("status response: {e}")))?;
        Ok(wire.into())
    }

    /// Join the raffle. The empty JSON object body is part of the contract.
    ///
    /// A `success == false` outcome is a normal value the caller must
    /// branch on, not an error.
    pub async fn participate(&self, raffle_id: Uuid) -> Result<ParticipationOutcome, RaffleError> {
        let url = format!(
            "{}{WEBAPP_PREFIX}/uuid/{raffle_id}/participate",
            self.base_url
        );

        let resp = self
            .send_authorized(|| self.http.post(&url).json(&json!({})))
            .await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RaffleError::JoinRejected { status, body });
        }

        resp.json::<ParticipationOutcome>()
            .await
            .map_err(|e| RaffleError::Parse(format!("participation response: {e}")))
    }

    /// Send a request with the stored access token, refreshing once on 401.
    ///
    /// The builder closure produces a fresh request per attempt; the bearer
    /// header is attached here. A second 401 after a successful refresh is
    /// returned as-is, no further attempts are made.
    async fn send_authorized<F>(&self, build: F) -> Result<Response, RaffleError>
    where
        F: Fn() -> RequestBuilder,
    {
        let Some(access_token) = self.store.access_token() else {
            return Err(RaffleError::NotAuthenticated);
        };

        let resp = build()
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await?;
        if resp.status() != StatusCode::UNAUTHORIZED {
            return Ok(resp);
        }

        debug!("access token rejected, refreshing");
        let tokens = self.session.refresh().await?;
        let resp = build()
            .header("Authorization", format!("Bearer {}", tokens.access_token))
            .send()
            .await?;
        Ok(resp)
    }
}
