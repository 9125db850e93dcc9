//! Wire DTOs for the raffle backend.
//!
//! These keep the server's field names. Mapping into the domain models in
//! `crate::models::raffle` is field-for-field renaming plus element-wise
//! channel mapping, nothing else.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::raffle::{Channel, RaffleSnapshot};

#[derive(Debug, Deserialize)]
pub(crate) struct RaffleStatusWire {
    #[serde(default)]
    pub ends_datetime: Option<DateTime<Utc>>,
    pub participants_count: u32,
    pub participants_amount: u32,
    pub is_finished: bool,
    pub is_participant: bool,
    pub all_subscribed: bool,
    pub mandatory_channels: Vec<ChannelWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChannelWire {
    pub channel_id: i64,
    pub title: String,
    pub is_subscribed: bool,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl From<ChannelWire> for Channel {
    fn from(wire: ChannelWire) -> Self {
        Self {
            id: wire.channel_id,
            title: wire.title,
            is_subscribed: wire.is_subscribed,
            photo_url: wire.photo_url,
        }
    }
}

impl From<RaffleStatusWire> for RaffleSnapshot {
    fn from(wire: RaffleStatusWire) -> Self {
        Self {
            ends_at: wire.ends_datetime,
            participants_count: wire.participants_count,
            participants_cap: wire.participants_amount,
            is_finished: wire.is_finished,
            is_participating: wire.is_participant,
            is_all_subscribed: wire.all_subscribed,
            channels: wire
                .mandatory_channels
                .into_iter()
                .map(Channel::from)
                .collect(),
        }
    }
}
