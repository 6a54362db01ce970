//! Shared newtypes and encoding helpers used across the domain modules.

pub mod serde_util;

use base64::prelude::{Engine as _, BASE64_STANDARD, BASE64_URL_SAFE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

// ─── ChannelPoint ────────────────────────────────────────────────────────────

/// Why a channel point string could not be split.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelPointError {
    #[error("channel point '{0}' must have the form <txid>:<index>")]
    Shape(String),
    #[error("channel point '{0}' has an empty funding txid")]
    EmptyTxid(String),
    #[error("channel point '{0}' has an invalid output index")]
    InvalidIndex(String),
}

/// A channel identifier: funding transaction id plus output index.
///
/// Parses from and displays as `<txid>:<index>`. Only the shape is checked;
/// the txid is treated as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelPoint {
    pub funding_txid: String,
    pub output_index: u32,
}

impl ChannelPoint {
    pub fn new(funding_txid: impl Into<String>, output_index: u32) -> Self {
        Self {
            funding_txid: funding_txid.into(),
            output_index,
        }
    }
}

impl FromStr for ChannelPoint {
    type Err = ChannelPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let (Some(txid), Some(index), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ChannelPointError::Shape(s.to_string()));
        };
        if txid.is_empty() {
            return Err(ChannelPointError::EmptyTxid(s.to_string()));
        }
        let output_index = index
            .parse::<u32>()
            .map_err(|_| ChannelPointError::InvalidIndex(s.to_string()))?;
        Ok(ChannelPoint {
            funding_txid: txid.to_string(),
            output_index,
        })
    }
}

impl std::fmt::Display for ChannelPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.funding_txid, self.output_index)
    }
}

impl Serialize for ChannelPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ChannelPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ─── Ack ─────────────────────────────────────────────────────────────────────

/// Acknowledgement for operations whose only result is "done".
///
/// Newer nodes include a human-readable `status`; older ones reply `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub status: Option<String>,
}

// ─── Byte encodings ──────────────────────────────────────────────────────────

/// Decode a base64 `bytes` field into lowercase hex.
///
/// Both the standard and URL-safe alphabets are accepted.
pub fn base64_to_hex(encoded: &str) -> Result<String, String> {
    decode_base64(encoded).map(hex::encode)
}

/// Decode a base64 txid (internal byte order) into the conventional
/// reversed hex form shown by block explorers.
pub fn base64_txid_to_hex(encoded: &str) -> Result<String, String> {
    let mut bytes = decode_base64(encoded)?;
    bytes.reverse();
    Ok(hex::encode(bytes))
}

/// Unix seconds to a timestamp; zero or negative means "not reported".
pub fn unix_time(secs: i64) -> Option<DateTime<Utc>> {
    if secs <= 0 {
        return None;
    }
    DateTime::<Utc>::from_timestamp(secs, 0)
}

fn decode_base64(encoded: &str) -> Result<Vec<u8>, String> {
    BASE64_STANDARD
        .decode(encoded)
        .or_else(|_| BASE64_URL_SAFE.decode(encoded))
        .map_err(|e| format!("invalid base64 '{}': {}", encoded, e))
}
