//! Conversions from wire types to domain types for peers.

use super::wire::PeerResponse;
use super::Peer;
use std::time::Duration;

impl TryFrom<PeerResponse> for Peer {
    type Error = String;

    fn try_from(p: PeerResponse) -> Result<Self, Self::Error> {
        if p.pub_key.is_empty() {
            return Err("peer without pub_key".to_string());
        }
        Ok(Self {
            pubkey: p.pub_key,
            address: p.address,
            inbound: p.inbound,
            bytes_sent: p.bytes_sent,
            bytes_received: p.bytes_recv,
            sat_sent: p.sat_sent,
            sat_received: p.sat_recv,
            ping_time: Duration::from_micros(p.ping_time.max(0) as u64),
        })
    }
}
