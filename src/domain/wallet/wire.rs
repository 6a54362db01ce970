//! Wire types for the on-chain wallet endpoints.

use crate::shared::serde_util::{i64_string, opt_u64_string, u64_string};
use serde::{Deserialize, Serialize};

/// `GET /v1/balance/blockchain`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletBalanceResponse {
    #[serde(default, with = "u64_string")]
    pub total_balance: u64,
    #[serde(default, with = "u64_string")]
    pub confirmed_balance: u64,
    #[serde(default, with = "u64_string")]
    pub unconfirmed_balance: u64,
    #[serde(default, with = "u64_string")]
    pub locked_balance: u64,
}

/// `GET /v1/transactions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDetails {
    #[serde(default)]
    pub transactions: Vec<TransactionResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionResponse {
    pub tx_hash: String,
    #[serde(default, with = "i64_string")]
    pub amount: i64,
    #[serde(default)]
    pub num_confirmations: i32,
    #[serde(default)]
    pub block_hash: String,
    #[serde(default)]
    pub block_height: i32,
    #[serde(default, with = "i64_string")]
    pub time_stamp: i64,
    #[serde(default, with = "i64_string")]
    pub total_fees: i64,
    #[serde(default)]
    pub dest_addresses: Vec<String>,
    #[serde(default)]
    pub label: String,
}

/// `GET /v1/newaddress`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAddressResponse {
    pub address: String,
}

/// `POST /v1/transactions` body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SendCoinsBody {
    pub addr: String,
    #[serde(with = "u64_string")]
    pub amount: u64,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "opt_u64_string::serialize"
    )]
    pub sat_per_vbyte: Option<u64>,
}

/// `POST /v1/transactions` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendCoinsResponse {
    pub txid: String,
}
