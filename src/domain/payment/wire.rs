//! Wire types for the payment endpoints.

use crate::shared::serde_util::{i64_string, u64_string};
use serde::{Deserialize, Serialize};

/// `lnrpc.FeeLimit` — exactly one of the fields is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeeLimitBody {
    Fixed(#[serde(with = "u64_string")] u64),
    FixedMsat(#[serde(with = "u64_string")] u64),
    Percent(#[serde(with = "u64_string")] u64),
}

/// `POST /v1/channels/transactions` body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SendRequestBody {
    pub payment_request: String,
    pub fee_limit: FeeLimitBody,
}

/// `POST /v1/channels/transactions` response.
///
/// A routing failure still comes back with a success status; it is
/// reported through `payment_error`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendResponse {
    #[serde(default)]
    pub payment_error: String,
    /// Base64.
    #[serde(default)]
    pub payment_preimage: String,
    /// Base64.
    #[serde(default)]
    pub payment_hash: String,
    #[serde(default)]
    pub payment_route: Option<RouteResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteResponse {
    #[serde(default, with = "u64_string")]
    pub total_fees: u64,
    #[serde(default, with = "u64_string")]
    pub total_amt: u64,
}

/// `GET /v1/payments`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListPaymentsResponse {
    #[serde(default)]
    pub payments: Vec<PaymentResponse>,
}

/// `lnrpc.Payment`. Unlike the send response, hash and preimage are hex
/// strings here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentResponse {
    pub payment_hash: String,
    #[serde(default, with = "u64_string")]
    pub value_sat: u64,
    #[serde(default, with = "u64_string")]
    pub fee_sat: u64,
    #[serde(default)]
    pub payment_preimage: String,
    #[serde(default)]
    pub payment_request: String,
    #[serde(default)]
    pub status: Option<PaymentStatusResponse>,
    #[serde(default, with = "i64_string")]
    pub creation_date: i64,
    #[serde(default, with = "u64_string")]
    pub payment_index: u64,
    #[serde(default)]
    pub failure_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatusResponse {
    Unknown,
    InFlight,
    Succeeded,
    Failed,
    Initiated,
}
