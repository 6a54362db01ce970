//! Peer domain — network-level connections to other nodes.

pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
    pub pubkey: String,
    /// `host:port` as seen by the node.
    pub address: String,
    pub inbound: bool,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub sat_sent: i64,
    pub sat_received: i64,
    pub ping_time: Duration,
}

/// Parameters for [`Peers::connect`](client::Peers::connect).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectPeerRequest {
    pub pubkey: String,
    /// `host` or `host:port`; the node defaults to port 9735.
    pub host: String,
    /// Ask the node to keep reconnecting to this peer.
    pub perm: bool,
    /// Connection timeout the node applies, in seconds.
    pub timeout_secs: Option<u64>,
}

impl ConnectPeerRequest {
    pub fn new(pubkey: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            pubkey: pubkey.into(),
            host: host.into(),
            perm: false,
            timeout_secs: None,
        }
    }

    pub fn perm(mut self, perm: bool) -> Self {
        self.perm = perm;
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}
