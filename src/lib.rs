//! # LND REST SDK
//!
//! A typed Rust client for the management REST API of an LND Lightning node.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, wire types (always available)
//! 2. **Transport** — `NodeRequest` shaping, the `Transport` trait, and the
//!    `reqwest`-backed `LndHttp` (feature `http`)
//! 3. **Error normalizer** — one classification of every outcome into `LndError`
//! 4. **High-Level Client** — `LndClient` with one sub-client per resource
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lnd_rest_sdk::prelude::*;
//!
//! let client = LndClient::builder("127.0.0.1", Macaroon::from_hex(macaroon_hex))
//!     .tls_certificate_pem(std::fs::read("tls.cert")?)
//!     .build()?;
//!
//! let info = client.info().get().await?;
//! let invoice = client.invoices().add(AddInvoiceRequest::new(1000).memo("coffee")).await?;
//! let payment = client.payments().pay(&invoice.payment_request, FeeLimit::Fixed(10)).await?;
//! ```
//!
//! The client never retries. [`Operation::retry_safety`](http::Operation::retry_safety)
//! tells callers which operations may be re-issued safely.

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and encoding helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Connection settings.
pub mod config;

/// Network constants.
pub mod network;

// ── Layer 2: Transport ───────────────────────────────────────────────────────

pub mod http;

// ── Layer 3: Errors ──────────────────────────────────────────────────────────

/// Error taxonomy and the response normalizer.
pub mod error;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `LndClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Ack, ChannelPoint, ChannelPointError};

    // Domain types
    pub use crate::domain::channel::{
        Channel, CloseChannelAck, CloseChannelRequest, OpenChannelRequest,
    };
    pub use crate::domain::info::{Chain, NodeInfo};
    pub use crate::domain::invoice::{AddInvoiceRequest, Invoice, InvoiceState};
    pub use crate::domain::payment::{FeeLimit, Payment, PaymentStatus};
    pub use crate::domain::peer::{ConnectPeerRequest, Peer};
    pub use crate::domain::wallet::{
        Address, AddressType, SendCoinsRequest, Transaction, Txid, WalletBalance,
    };

    // Errors
    pub use crate::error::{ErrorKind, LndError, LndResult};

    // Config + network
    pub use crate::config::{LndConfig, Macaroon};
    pub use crate::network::DEFAULT_REST_PORT;

    // Transport seam
    pub use crate::http::{
        NodeRequest, Operation, RawResponse, RetrySafety, Transport, TransportFailure,
    };

    // Client + sub-clients
    pub use crate::client::{
        ChannelsClient, InfoClient, InvoicesClient, LndClient, PaymentsClient, PeersClient,
        WalletClient,
    };
    #[cfg(feature = "http")]
    pub use crate::client::LndClientBuilder;
}
