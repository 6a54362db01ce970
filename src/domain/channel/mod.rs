//! Channel domain — open, list, and close payment channels.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::ChannelPoint;
use serde::{Deserialize, Serialize};

/// A payment channel as reported by the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub remote_pubkey: String,
    pub channel_point: ChannelPoint,
    /// Short channel id.
    pub chan_id: u64,
    pub capacity: u64,
    pub local_balance: u64,
    pub remote_balance: u64,
    pub active: bool,
    pub private: bool,
    pub initiator: bool,
}

/// Input for [`Channels::open`](client::Channels::open).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenChannelRequest {
    pub node_pubkey: String,
    /// Sats committed by this node. Must be positive.
    pub local_funding_amount: u64,
    /// Sats gifted to the remote side at open.
    pub push_sat: Option<u64>,
    /// Keep the channel out of gossip.
    pub private: Option<bool>,
}

impl OpenChannelRequest {
    pub fn new(node_pubkey: impl Into<String>, local_funding_amount: u64) -> Self {
        Self {
            node_pubkey: node_pubkey.into(),
            local_funding_amount,
            push_sat: None,
            private: None,
        }
    }

    pub fn push_sat(mut self, sats: u64) -> Self {
        self.push_sat = Some(sats);
        self
    }

    pub fn private(mut self, private: bool) -> Self {
        self.private = Some(private);
        self
    }
}

/// Input for [`Channels::close`](client::Channels::close).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseChannelRequest {
    /// `<funding_txid>:<output_index>`, as shown by [`Channel::channel_point`].
    pub channel_point: String,
    /// Broadcast the latest commitment unilaterally instead of negotiating.
    pub force: bool,
}

impl CloseChannelRequest {
    pub fn new(channel_point: impl Into<String>) -> Self {
        Self {
            channel_point: channel_point.into(),
            force: false,
        }
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

impl From<&ChannelPoint> for CloseChannelRequest {
    fn from(point: &ChannelPoint) -> Self {
        Self::new(point.to_string())
    }
}

/// Acknowledgement of a close request.
///
/// `closing_txid` is set once the node has broadcast the closing
/// transaction, which is normally the first update it sends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseChannelAck {
    pub closing_txid: Option<String>,
    pub output_index: Option<u32>,
    /// The node already reports the close as confirmed.
    pub confirmed: bool,
}
