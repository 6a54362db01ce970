//! Wallet domain — on-chain balance, history, addresses and sends.

pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Address kinds the node can derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressType {
    /// Native segwit (`bc1q…`).
    #[default]
    WitnessPubkeyHash,
    /// Segwit wrapped in P2SH (`3…`).
    NestedPubkeyHash,
    /// Like `WitnessPubkeyHash`, but returns the last unused address.
    UnusedWitnessPubkeyHash,
    UnusedNestedPubkeyHash,
}

impl AddressType {
    /// The name the node expects in the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::WitnessPubkeyHash => "WITNESS_PUBKEY_HASH",
            AddressType::NestedPubkeyHash => "NESTED_PUBKEY_HASH",
            AddressType::UnusedWitnessPubkeyHash => "UNUSED_WITNESS_PUBKEY_HASH",
            AddressType::UnusedNestedPubkeyHash => "UNUSED_NESTED_PUBKEY_HASH",
        }
    }
}

impl std::fmt::Display for AddressType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address: String,
    pub address_type: AddressType,
}

/// On-chain balances in sats, as reported by the node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub total: u64,
    pub confirmed: u64,
    pub unconfirmed: u64,
    /// Reserved by in-progress funding flows or leases.
    pub locked: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub tx_hash: String,
    /// Net effect on the wallet: negative for spends.
    pub amount: i64,
    pub confirmations: u32,
    /// Empty while unconfirmed.
    pub block_hash: String,
    pub block_height: Option<u32>,
    pub timestamp: Option<DateTime<Utc>>,
    pub total_fees: i64,
    pub dest_addresses: Vec<String>,
    pub label: String,
}

/// Input for [`Wallet::send_coins`](client::Wallet::send_coins).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendCoinsRequest {
    pub addr: String,
    pub amount: u64,
    /// Fee rate; the node picks one from its estimator when unset.
    pub sat_per_vbyte: Option<u64>,
}

impl SendCoinsRequest {
    pub fn new(addr: impl Into<String>, amount: u64) -> Self {
        Self {
            addr: addr.into(),
            amount,
            sat_per_vbyte: None,
        }
    }

    pub fn sat_per_vbyte(mut self, rate: u64) -> Self {
        self.sat_per_vbyte = Some(rate);
        self
    }
}

/// Id of a broadcast on-chain transaction, in explorer (reversed) hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Txid(String);

impl Txid {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Txid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
