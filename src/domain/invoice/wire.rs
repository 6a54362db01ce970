//! Wire types for the invoice endpoints.

use crate::shared::serde_util::{i64_string, u64_string};
use serde::{Deserialize, Serialize};

/// `lnrpc.Invoice`, as returned by list and lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceResponse {
    #[serde(default)]
    pub memo: String,
    /// Base64 payment hash.
    #[serde(default)]
    pub r_hash: String,
    #[serde(default)]
    pub payment_request: String,
    #[serde(default, with = "u64_string")]
    pub value: u64,
    #[serde(default)]
    pub settled: bool,
    #[serde(default, with = "i64_string")]
    pub creation_date: i64,
    #[serde(default, with = "i64_string")]
    pub settle_date: i64,
    #[serde(default, with = "i64_string")]
    pub expiry: i64,
    #[serde(default, with = "u64_string")]
    pub add_index: u64,
    #[serde(default, with = "u64_string")]
    pub amt_paid_sat: u64,
    #[serde(default)]
    pub state: Option<InvoiceStateResponse>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStateResponse {
    Open,
    Settled,
    Canceled,
    Accepted,
}

/// `GET /v1/invoices`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListInvoiceResponse {
    #[serde(default)]
    pub invoices: Vec<InvoiceResponse>,
    #[serde(default, with = "u64_string")]
    pub last_index_offset: u64,
    #[serde(default, with = "u64_string")]
    pub first_index_offset: u64,
}

/// `POST /v1/invoices` body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AddInvoiceBody {
    #[serde(with = "u64_string")]
    pub value: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::shared::serde_util::opt_u64_string::serialize"
    )]
    pub expiry: Option<u64>,
}

/// `POST /v1/invoices` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddInvoiceResponse {
    /// Base64 payment hash.
    pub r_hash: String,
    pub payment_request: String,
    #[serde(default, with = "u64_string")]
    pub add_index: u64,
}
