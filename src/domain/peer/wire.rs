//! Wire types for the peer endpoints.

use crate::shared::serde_util::{i64_string, opt_u64_string, u64_string};
use serde::{Deserialize, Serialize};

/// `GET /v1/peers`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListPeersResponse {
    #[serde(default)]
    pub peers: Vec<PeerResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeerResponse {
    pub pub_key: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, with = "u64_string")]
    pub bytes_sent: u64,
    #[serde(default, with = "u64_string")]
    pub bytes_recv: u64,
    #[serde(default, with = "i64_string")]
    pub sat_sent: i64,
    #[serde(default, with = "i64_string")]
    pub sat_recv: i64,
    #[serde(default)]
    pub inbound: bool,
    /// Microseconds.
    #[serde(default, with = "i64_string")]
    pub ping_time: i64,
}

/// `lnrpc.LightningAddress`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LightningAddressBody {
    pub pubkey: String,
    pub host: String,
}

/// `POST /v1/peers` body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConnectPeerBody {
    pub addr: LightningAddressBody,
    pub perm: bool,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "opt_u64_string::serialize"
    )]
    pub timeout: Option<u64>,
}
