//! Payment domain — outgoing Lightning payments.

pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound on routing fees for one payment. Required on every send and
/// has no `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeLimit {
    /// Absolute ceiling in sats.
    Fixed(u64),
    /// Absolute ceiling in millisats.
    FixedMsat(u64),
    /// Ceiling as a percentage of the payment amount.
    Percent(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Unknown,
    InFlight,
    Succeeded,
    Failed,
    Initiated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Empty for payments made without a payment request (keysend).
    pub payment_request: String,
    /// Hex.
    pub payment_hash: String,
    /// Hex; `None` until the payment succeeds.
    pub preimage: Option<String>,
    /// Sats delivered to the recipient, excluding fees.
    pub amount: u64,
    /// Routing fees paid, in sats.
    pub fee: u64,
    /// The ceiling this client attached at send time. Not known for
    /// payments read back from the node's history.
    pub fee_limit: Option<FeeLimit>,
    pub status: PaymentStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub failure_reason: Option<String>,
}
