//! Raffle domain models.
//!
//! These are internal domain models with the client's field names, distinct
//! from the wire DTOs in `crate::api` (which keep the server's field names).

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A channel the user must be subscribed to before joining.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub id: i64,
    pub title: String,
    pub is_subscribed: bool,
    pub photo_url: Option<String>,
}

/// Point-in-time raffle state as reported by the backend.
///
/// Replaced wholesale on each fetch, with one exception: after a successful
/// join, `is_participating` and `participants_count` are patched locally
/// from the join response instead of re-fetching.
#[derive(Debug, Clone, PartialEq)]
pub struct RaffleSnapshot {
    /// When the raffle closes; `None` for open-ended raffles.
    pub ends_at: Option<DateTime<Utc>>,
    pub participants_count: u32,
    /// Maximum number of participants. Display only, not enforced client-side.
    pub participants_cap: u32,
    pub is_finished: bool,
    pub is_participating: bool,
    pub(crate) is_all_subscribed: bool,
    pub channels: Vec<Channel>,
}

impl RaffleSnapshot {
    /// Whether every mandatory channel subscription is in place.
    ///
    /// The server-declared aggregate is trusted as-is rather than recomputed
    /// from `channels`; this accessor is the single place to change that.
    pub fn all_mandatory_subscribed(&self) -> bool {
        self.is_all_subscribed
    }
}

/// Result of a participation attempt, returned verbatim by the backend.
///
/// `success == false` is a business-level rejection (e.g. subscriptions
/// incomplete), not a transport failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipationOutcome {
    pub success: bool,
    pub message: String,
    pub participants_count: u32,
}
