//! Wire types for `GET /v1/getinfo`.

use crate::shared::serde_util::i64_string;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetInfoResponse {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub commit_hash: String,
    pub identity_pubkey: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub num_pending_channels: u32,
    #[serde(default)]
    pub num_active_channels: u32,
    #[serde(default)]
    pub num_inactive_channels: u32,
    #[serde(default)]
    pub num_peers: u32,
    #[serde(default)]
    pub block_height: u32,
    #[serde(default)]
    pub block_hash: String,
    #[serde(default, with = "i64_string")]
    pub best_header_timestamp: i64,
    #[serde(default)]
    pub synced_to_chain: bool,
    #[serde(default)]
    pub synced_to_graph: bool,
    #[serde(default)]
    pub chains: Vec<ChainResponse>,
    #[serde(default)]
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChainResponse {
    pub chain: String,
    pub network: String,
}
