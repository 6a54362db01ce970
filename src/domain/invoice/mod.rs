//! Invoice domain — receivables minted by this node.

pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of an invoice. Transitions happen on the node; the client
/// only observes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceState {
    Open,
    Settled,
    Canceled,
    Accepted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub memo: String,
    /// Opaque encoded payment request (BOLT 11).
    pub payment_request: String,
    /// Hex payment hash, usable with [`Invoices::lookup`](client::Invoices::lookup).
    pub payment_hash: String,
    /// Requested amount in sats; zero for "any amount" invoices.
    pub value: u64,
    pub amount_paid: u64,
    pub settled: bool,
    pub state: InvoiceState,
    pub created_at: Option<DateTime<Utc>>,
    pub settled_at: Option<DateTime<Utc>>,
    /// Seconds after creation the invoice stays payable.
    pub expiry: i64,
    pub add_index: u64,
}

/// Input for [`Invoices::add`](client::Invoices::add).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddInvoiceRequest {
    pub value: u64,
    pub memo: Option<String>,
    /// Seconds; the node's default (one day) applies when unset.
    pub expiry: Option<u64>,
}

impl AddInvoiceRequest {
    pub fn new(value: u64) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }

    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub fn expiry(mut self, secs: u64) -> Self {
        self.expiry = Some(secs);
        self
    }
}
