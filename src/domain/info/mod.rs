//! Info domain — identity and sync state of the node.

pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the node's identity and chain view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub alias: String,
    pub identity_pubkey: String,
    pub version: String,
    pub color: String,
    pub block_height: u32,
    pub block_hash: String,
    pub best_header_at: Option<DateTime<Utc>>,
    pub synced_to_chain: bool,
    pub synced_to_graph: bool,
    pub chains: Vec<Chain>,
    pub uris: Vec<String>,
    pub num_active_channels: u32,
    pub num_inactive_channels: u32,
    pub num_pending_channels: u32,
    pub num_peers: u32,
}

/// A chain/network pair the node runs on (e.g. `bitcoin`/`mainnet`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub chain: String,
    pub network: String,
}

impl NodeInfo {
    /// The first reported network, e.g. `"mainnet"` or `"regtest"`.
    pub fn network(&self) -> Option<&str> {
        self.chains.first().map(|c| c.network.as_str())
    }
}
