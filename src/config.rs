//! Connection settings for one node.

use crate::network::{DEFAULT_REST_PORT, DEFAULT_TIMEOUT_SECS};
use std::fmt;
use std::time::Duration;

/// The node credential, kept hex-encoded as the REST header expects.
///
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Macaroon(String);

impl Macaroon {
    /// Wrap an already hex-encoded macaroon.
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self(hex.into().trim().to_string())
    }

    /// Hex-encode raw macaroon bytes (the contents of `admin.macaroon`).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Macaroon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Macaroon(<redacted>)")
    }
}

impl From<&str> for Macaroon {
    fn from(s: &str) -> Self {
        Self::from_hex(s)
    }
}

impl From<String> for Macaroon {
    fn from(s: String) -> Self {
        Self::from_hex(s)
    }
}

/// Everything needed to reach a node. Immutable once the client is built.
#[derive(Debug, Clone)]
pub struct LndConfig {
    /// Hostname or IP. A value with an explicit scheme (`http://…`) is used
    /// verbatim as the base URL and `port` is ignored.
    pub host: String,
    pub macaroon: Macaroon,
    pub port: u16,
    pub timeout: Duration,
    /// PEM certificate to trust in addition to the system roots (LND's
    /// self-signed `tls.cert`).
    pub tls_certificate_pem: Option<Vec<u8>>,
    pub accept_invalid_certs: bool,
}

impl LndConfig {
    pub fn new(host: impl Into<String>, macaroon: impl Into<Macaroon>) -> Self {
        Self {
            host: host.into(),
            macaroon: macaroon.into(),
            port: DEFAULT_REST_PORT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            tls_certificate_pem: None,
            accept_invalid_certs: false,
        }
    }

    /// Base URL every request path is appended to.
    pub fn base_url(&self) -> String {
        let host = self.host.trim().trim_end_matches('/');
        if host.contains("://") {
            host.to_string()
        } else {
            format!("https://{}:{}", host, self.port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_uses_https_and_port() {
        let config = LndConfig::new("node.example.com", "0201");
        assert_eq!(config.base_url(), "https://node.example.com:8080");

        let mut config = LndConfig::new("10.0.0.2", "0201");
        config.port = 10009;
        assert_eq!(config.base_url(), "https://10.0.0.2:10009");
    }

    #[test]
    fn test_base_url_keeps_explicit_scheme() {
        let config = LndConfig::new("http://127.0.0.1:3000/", "0201");
        assert_eq!(config.base_url(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_macaroon_from_bytes_is_hex() {
        let mac = Macaroon::from_bytes(&[0x02, 0x01, 0xab]);
        assert_eq!(mac.as_hex(), "0201ab");
    }

    #[test]
    fn test_macaroon_debug_is_redacted() {
        let config = LndConfig::new("node", "deadbeef");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("deadbeef"));
        assert!(printed.contains("<redacted>"));
    }
}
