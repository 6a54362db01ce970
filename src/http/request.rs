//! Request description handed to a [`Transport`](super::Transport).
//!
//! Sub-clients build a [`NodeRequest`] per operation; the transport only
//! executes it. Keeping the shape here means every request can be inspected
//! (and compared byte for byte) without a live node.

use crate::error::{LndError, LndResult};
use serde::Serialize;

/// HTTP verbs used by the LND REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// Whether an operation may be re-issued without side effects.
///
/// The client never retries on its own. Callers layering retries on top
/// should only re-invoke `Safe` operations blindly; `Unsafe` ones need
/// deduplication (a second `pay` may pay twice, a second `open` opens a
/// second channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrySafety {
    Safe,
    Unsafe,
}

/// How much of the response body the transport should read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyMode {
    /// Read the body to the end.
    #[default]
    Complete,
    /// Read up to the first newline-delimited JSON message, then drop the
    /// connection. Used by streaming endpoints that stay open for minutes.
    FirstMessage,
}

/// Every operation the client can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetInfo,
    ListChannels,
    OpenChannel,
    CloseChannel,
    ListInvoices,
    LookupInvoice,
    AddInvoice,
    ListPayments,
    PayInvoice,
    ListPeers,
    ConnectPeer,
    DisconnectPeer,
    WalletBalance,
    GetTransactions,
    NewAddress,
    SendCoins,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::GetInfo => "get_info",
            Operation::ListChannels => "list_channels",
            Operation::OpenChannel => "open_channel",
            Operation::CloseChannel => "close_channel",
            Operation::ListInvoices => "list_invoices",
            Operation::LookupInvoice => "lookup_invoice",
            Operation::AddInvoice => "add_invoice",
            Operation::ListPayments => "list_payments",
            Operation::PayInvoice => "pay_invoice",
            Operation::ListPeers => "list_peers",
            Operation::ConnectPeer => "connect_peer",
            Operation::DisconnectPeer => "disconnect_peer",
            Operation::WalletBalance => "wallet_balance",
            Operation::GetTransactions => "get_transactions",
            Operation::NewAddress => "new_address",
            Operation::SendCoins => "send_coins",
        }
    }

    /// HTTP verb the node exposes this operation under.
    pub fn method(&self) -> Method {
        match self {
            Operation::OpenChannel
            | Operation::AddInvoice
            | Operation::PayInvoice
            | Operation::ConnectPeer
            | Operation::SendCoins => Method::Post,
            Operation::CloseChannel | Operation::DisconnectPeer => Method::Delete,
            _ => Method::Get,
        }
    }

    pub fn retry_safety(&self) -> RetrySafety {
        match self {
            Operation::GetInfo
            | Operation::ListChannels
            | Operation::ListInvoices
            | Operation::LookupInvoice
            | Operation::ListPayments
            | Operation::ListPeers
            | Operation::WalletBalance
            | Operation::GetTransactions => RetrySafety::Safe,
            Operation::OpenChannel
            | Operation::CloseChannel
            | Operation::AddInvoice
            | Operation::PayInvoice
            | Operation::ConnectPeer
            | Operation::DisconnectPeer
            | Operation::NewAddress
            | Operation::SendCoins => RetrySafety::Unsafe,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully shaped request against the node, minus host and credential.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRequest {
    pub operation: Operation,
    pub method: Method,
    /// Absolute path, with path segments already percent-encoded.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub body_mode: BodyMode,
}

impl NodeRequest {
    /// Start a request for `operation` at `path`, using the operation's verb.
    pub fn new(operation: Operation, path: impl Into<String>) -> Self {
        Self {
            operation,
            method: operation.method(),
            path: path.into(),
            query: Vec::new(),
            body: None,
            body_mode: BodyMode::Complete,
        }
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize>(mut self, body: &B) -> LndResult<Self> {
        let value = serde_json::to_value(body).map_err(|e| {
            LndError::InvalidRequest(format!(
                "Failed to encode {} body: {}",
                self.operation, e
            ))
        })?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn body_mode(mut self, mode: BodyMode) -> Self {
        self.body_mode = mode;
        self
    }

    /// Path plus the percent-encoded query string, as sent on the wire.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let params: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        format!("{}?{}", self.path, params.join("&"))
    }

    /// Serialized body bytes, exactly as the transport sends them.
    pub fn body_bytes(&self) -> Option<Vec<u8>> {
        self.body
            .as_ref()
            .map(|b| serde_json::to_vec(b).unwrap_or_default())
    }

    /// Request line plus body, used to compare request framing.
    pub fn framing(&self) -> Vec<u8> {
        let mut out = format!("{} {}\n", self.method.as_str(), self.path_and_query()).into_bytes();
        if let Some(body) = self.body_bytes() {
            out.extend_from_slice(&body);
        }
        out
    }
}

/// Percent-encode one path segment.
pub fn path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
