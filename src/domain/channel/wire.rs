//! Wire types for the channel endpoints.

use crate::shared::serde_util::{opt_u64_string, u64_string};
use serde::{Deserialize, Serialize};

/// `GET /v1/channels`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListChannelsResponse {
    #[serde(default)]
    pub channels: Vec<ChannelResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelResponse {
    #[serde(default)]
    pub active: bool,
    pub remote_pubkey: String,
    pub channel_point: String,
    #[serde(default, with = "u64_string")]
    pub chan_id: u64,
    #[serde(default, with = "u64_string")]
    pub capacity: u64,
    #[serde(default, with = "u64_string")]
    pub local_balance: u64,
    #[serde(default, with = "u64_string")]
    pub remote_balance: u64,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub initiator: bool,
}

/// `POST /v1/channels` body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OpenChannelBody {
    pub node_pubkey_string: String,
    #[serde(with = "u64_string")]
    pub local_funding_amount: u64,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "opt_u64_string::serialize"
    )]
    pub push_sat: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}

/// `POST /v1/channels` response (`lnrpc.ChannelPoint`).
///
/// The txid arrives either as base64 bytes in internal byte order or, from
/// some node versions, already as a display string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelPointResponse {
    #[serde(default)]
    pub funding_txid_bytes: Option<String>,
    #[serde(default)]
    pub funding_txid_str: Option<String>,
    #[serde(default)]
    pub output_index: u32,
}

/// First message of the `DELETE /v1/channels/{txid}/{index}` stream, after
/// the `result` envelope has been removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CloseStatusUpdate {
    #[serde(default)]
    pub close_pending: Option<PendingUpdate>,
    #[serde(default)]
    pub chan_close: Option<ChannelCloseUpdate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingUpdate {
    pub txid: String,
    #[serde(default)]
    pub output_index: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelCloseUpdate {
    pub closing_txid: String,
    #[serde(default)]
    pub success: bool,
}
