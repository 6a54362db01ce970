//! Conversions from wire types to domain types for channels.

use super::wire::{ChannelPointResponse, ChannelResponse, CloseStatusUpdate};
use super::{Channel, CloseChannelAck};
use crate::shared::{base64_txid_to_hex, ChannelPoint};

impl TryFrom<ChannelResponse> for Channel {
    type Error = String;

    fn try_from(c: ChannelResponse) -> Result<Self, Self::Error> {
        let channel_point = c
            .channel_point
            .parse::<ChannelPoint>()
            .map_err(|e| e.to_string())?;
        Ok(Self {
            remote_pubkey: c.remote_pubkey,
            channel_point,
            chan_id: c.chan_id,
            capacity: c.capacity,
            local_balance: c.local_balance,
            remote_balance: c.remote_balance,
            active: c.active,
            private: c.private,
            initiator: c.initiator,
        })
    }
}

impl TryFrom<ChannelPointResponse> for ChannelPoint {
    type Error = String;

    fn try_from(r: ChannelPointResponse) -> Result<Self, Self::Error> {
        let txid = match (r.funding_txid_str, r.funding_txid_bytes) {
            (Some(s), _) if !s.is_empty() => s,
            (_, Some(b)) if !b.is_empty() => base64_txid_to_hex(&b)?,
            _ => return Err("missing funding txid".to_string()),
        };
        Ok(ChannelPoint::new(txid, r.output_index))
    }
}

impl TryFrom<CloseStatusUpdate> for CloseChannelAck {
    type Error = String;

    fn try_from(u: CloseStatusUpdate) -> Result<Self, Self::Error> {
        if let Some(pending) = u.close_pending {
            return Ok(Self {
                closing_txid: Some(base64_txid_to_hex(&pending.txid)?),
                output_index: Some(pending.output_index),
                confirmed: false,
            });
        }
        if let Some(closed) = u.chan_close {
            return Ok(Self {
                closing_txid: Some(base64_txid_to_hex(&closed.closing_txid)?),
                output_index: None,
                confirmed: closed.success,
            });
        }
        Ok(Self::default())
    }
}
