//! The seam between request shaping and the network.

use crate::http::request::NodeRequest;
use async_trait::async_trait;
use thiserror::Error;

/// Whatever the node answered, success or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response (DNS, TLS, refused, timeout).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportFailure {
    pub timeout: bool,
    pub message: String,
}

impl TransportFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            timeout: false,
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            timeout: true,
            message: message.into(),
        }
    }
}

/// Executes one [`NodeRequest`] against a node.
///
/// Implementations attach the credential and `Content-Type: application/json`
/// to every call, return non-2xx answers as a [`RawResponse`] rather than an
/// error, and make a single attempt. Dropping the returned future must
/// abort the in-flight request.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &NodeRequest) -> Result<RawResponse, TransportFailure>;
}
