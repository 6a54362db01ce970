//! Conversions from wire types to domain types for node info.

use super::wire::{ChainResponse, GetInfoResponse};
use super::{Chain, NodeInfo};
use crate::shared::unix_time;

impl TryFrom<GetInfoResponse> for NodeInfo {
    type Error = String;

    fn try_from(r: GetInfoResponse) -> Result<Self, Self::Error> {
        if r.identity_pubkey.is_empty() {
            return Err("missing identity_pubkey".to_string());
        }
        Ok(Self {
            alias: r.alias,
            identity_pubkey: r.identity_pubkey,
            version: r.version,
            color: r.color,
            block_height: r.block_height,
            block_hash: r.block_hash,
            best_header_at: unix_time(r.best_header_timestamp),
            synced_to_chain: r.synced_to_chain,
            synced_to_graph: r.synced_to_graph,
            chains: r.chains.into_iter().map(Chain::from).collect(),
            uris: r.uris,
            num_active_channels: r.num_active_channels,
            num_inactive_channels: r.num_inactive_channels,
            num_pending_channels: r.num_pending_channels,
            num_peers: r.num_peers,
        })
    }
}

impl From<ChainResponse> for Chain {
    fn from(c: ChainResponse) -> Self {
        Self {
            chain: c.chain,
            network: c.network,
        }
    }
}
