//! High-level client — `LndClient` with nested sub-client accessors.
//!
//! Each resource has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the transport handle, and the single
//! path every request takes through the error normalizer.

#[cfg(feature = "http")]
use crate::config::{LndConfig, Macaroon};
use crate::domain::channel::client::Channels;
use crate::domain::info::client::Info;
use crate::domain::invoice::client::Invoices;
use crate::domain::payment::client::Payments;
use crate::domain::peer::client::Peers;
use crate::domain::wallet::client::Wallet;
use crate::error::{self, LndResult};
use crate::http::{NodeRequest, Transport};

use serde::de::DeserializeOwned;
use std::sync::Arc;
#[cfg(feature = "http")]
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::channel::client::Channels as ChannelsClient;
pub use crate::domain::info::client::Info as InfoClient;
pub use crate::domain::invoice::client::Invoices as InvoicesClient;
pub use crate::domain::payment::client::Payments as PaymentsClient;
pub use crate::domain::peer::client::Peers as PeersClient;
pub use crate::domain::wallet::client::Wallet as WalletClient;

/// The primary entry point.
///
/// Provides one sub-client per resource: `client.channels()`,
/// `client.invoices()`, etc. Cloning is cheap and clones share the
/// underlying connection pool; concurrent calls need no coordination.
#[derive(Clone)]
pub struct LndClient {
    pub(crate) transport: Arc<dyn Transport>,
}

impl LndClient {
    #[cfg(feature = "http")]
    pub fn builder(host: impl Into<String>, macaroon: impl Into<Macaroon>) -> LndClientBuilder {
        LndClientBuilder::new(host, macaroon)
    }

    /// Build a client over the `reqwest` transport.
    #[cfg(feature = "http")]
    pub fn from_config(config: &LndConfig) -> LndResult<Self> {
        let http = crate::http::LndHttp::new(config)?;
        Ok(Self::with_transport(Arc::new(http)))
    }

    /// Build a client over any transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn info(&self) -> Info<'_> {
        Info { client: self }
    }

    pub fn channels(&self) -> Channels<'_> {
        Channels { client: self }
    }

    pub fn invoices(&self) -> Invoices<'_> {
        Invoices { client: self }
    }

    pub fn payments(&self) -> Payments<'_> {
        Payments { client: self }
    }

    pub fn peers(&self) -> Peers<'_> {
        Peers { client: self }
    }

    pub fn wallet(&self) -> Wallet<'_> {
        Wallet { client: self }
    }

    // ── Request execution ────────────────────────────────────────────────

    /// Execute a request and decode its body into `T`.
    pub(crate) async fn send<T: DeserializeOwned>(&self, request: NodeRequest) -> LndResult<T> {
        let outcome = self.transport.execute(&request).await;
        let value = error::normalize(&request, outcome)?;
        error::decode(request.operation, value)
    }
}

impl std::fmt::Debug for LndClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LndClient").finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

/// Builder for [`LndClient`] over the `reqwest` transport.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct LndClientBuilder {
    config: LndConfig,
}

#[cfg(feature = "http")]
impl LndClientBuilder {
    pub fn new(host: impl Into<String>, macaroon: impl Into<Macaroon>) -> Self {
        Self {
            config: LndConfig::new(host, macaroon),
        }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Per-request timeout, covering connect through reading the body.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Trust this PEM certificate (LND's `tls.cert`).
    pub fn tls_certificate_pem(mut self, pem: impl Into<Vec<u8>>) -> Self {
        self.config.tls_certificate_pem = Some(pem.into());
        self
    }

    /// Skip certificate verification entirely. Only for local test nodes.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    pub fn config(&self) -> &LndConfig {
        &self.config
    }

    pub fn build(self) -> LndResult<LndClient> {
        LndClient::from_config(&self.config)
    }
}

#[cfg(all(test, feature = "http"))]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_config() {
        let builder = LndClient::builder("node.local", "0201")
            .port(8443)
            .timeout(Duration::from_secs(5))
            .danger_accept_invalid_certs(true);
        let config = builder.config();
        assert_eq!(config.port, 8443);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.accept_invalid_certs);
        assert_eq!(config.base_url(), "https://node.local:8443");
    }

    #[test]
    fn test_builder_builds() {
        let client = LndClient::builder("node.local", "0201").build();
        assert!(client.is_ok());
    }
}
