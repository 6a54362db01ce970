//! Error taxonomy and the normalizer every operation funnels through.
//!
//! A transport outcome is classified exactly once, in [`normalize`]:
//!
//! - no response at all → [`LndError::Network`]
//! - a non-2xx response → [`LndError::Node`], with the node's own message
//!   passed through untouched
//! - a 2xx response whose body does not fit the operation →
//!   [`LndError::MalformedResponse`] (raised by [`decode`])

use crate::http::request::{BodyMode, NodeRequest, Operation};
use crate::http::transport::{RawResponse, TransportFailure};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Coarse classification callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Node,
    MalformedResponse,
    InvalidRequest,
    Config,
}

/// Every failure the client can return.
#[derive(Debug, Error)]
pub enum LndError {
    /// The request never reached the node.
    #[error("Network error: {message}")]
    Network { timeout: bool, message: String },

    /// The node answered with an error status.
    #[error("Node error {status}: {}", message.as_deref().unwrap_or("<no message>"))]
    Node {
        status: u16,
        /// gRPC status code, when the body carried one.
        code: Option<i64>,
        message: Option<String>,
    },

    /// A success status with a body that does not match the operation.
    #[error("Malformed {operation} response: {reason}")]
    MalformedResponse {
        operation: Operation,
        reason: String,
    },

    /// Rejected locally; nothing was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The node accepted a send call but could not complete the payment.
    #[error("Payment failed: {message}")]
    PaymentFailed {
        payment_hash: Option<String>,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for client operations.
pub type LndResult<T> = Result<T, LndError>;

impl LndError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LndError::Network { .. } => ErrorKind::Network,
            LndError::Node { .. } | LndError::PaymentFailed { .. } => ErrorKind::Node,
            LndError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            LndError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            LndError::Config(_) => ErrorKind::Config,
        }
    }

    /// HTTP status reported by the node, if it answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            LndError::Node { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The node's own message, verbatim.
    pub fn node_message(&self) -> Option<&str> {
        match self {
            LndError::Node { message, .. } => message.as_deref(),
            LndError::PaymentFailed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The node reported that the addressed object does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LndError::Node { status: 404, .. } | LndError::Node { code: Some(5), .. }
        )
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, LndError::Network { timeout: true, .. })
    }

    pub(crate) fn malformed(operation: Operation, reason: impl Into<String>) -> Self {
        LndError::MalformedResponse {
            operation,
            reason: reason.into(),
        }
    }
}

impl From<TransportFailure> for LndError {
    fn from(failure: TransportFailure) -> Self {
        LndError::Network {
            timeout: failure.timeout,
            message: failure.message,
        }
    }
}

/// Classify a transport outcome into a JSON body or an [`LndError`].
///
/// An empty 2xx body is treated as `{}`. For streaming endpoints the first
/// message is unwrapped from its `{"result": …}` envelope, and an
/// `{"error": …}` envelope is reported as a node error even on a 2xx status.
pub fn normalize(
    request: &NodeRequest,
    outcome: Result<RawResponse, TransportFailure>,
) -> LndResult<Value> {
    let response = outcome?;

    if !response.is_success() {
        let (code, message) = parse_error_body(&response.body);
        tracing::debug!(
            operation = request.operation.as_str(),
            status = response.status,
            code,
            "node rejected request"
        );
        return Err(LndError::Node {
            status: response.status,
            code,
            message,
        });
    }

    if response.body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    let value: Value = serde_json::from_slice(&response.body)
        .map_err(|e| LndError::malformed(request.operation, format!("invalid JSON: {}", e)))?;

    if request.body_mode == BodyMode::FirstMessage {
        return unwrap_stream_message(request.operation, response.status, value);
    }
    Ok(value)
}

/// Decode a normalized body into the operation's wire type.
pub fn decode<T: DeserializeOwned>(operation: Operation, value: Value) -> LndResult<T> {
    serde_json::from_value(value).map_err(|e| LndError::malformed(operation, e.to_string()))
}

fn unwrap_stream_message(operation: Operation, status: u16, value: Value) -> LndResult<Value> {
    let Value::Object(mut map) = value else {
        return Err(LndError::malformed(operation, "stream message is not an object"));
    };
    if let Some(error) = map.remove("error") {
        let (code, message) = error_fields(&error);
        return Err(LndError::Node {
            status,
            code,
            message,
        });
    }
    match map.remove("result") {
        Some(result) => Ok(result),
        None => Ok(Value::Object(map)),
    }
}

/// Pull `(code, message)` out of an error body.
///
/// Accepts the gateway shape `{"code", "message", "details"}`, the older
/// `{"error": "…"}`, and the streaming `{"error": {"code", "message"}}`.
/// A body that is not JSON is passed through as the message when non-empty.
fn parse_error_body(body: &[u8]) -> (Option<i64>, Option<String>) {
    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return (None, None);
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => error_fields(&value),
        Err(_) => (None, Some(trimmed.to_string())),
    }
}

fn error_fields(value: &Value) -> (Option<i64>, Option<String>) {
    match value {
        Value::String(s) => (None, Some(s.clone())),
        Value::Object(map) => {
            let code = map.get("code").and_then(Value::as_i64);
            let message = map
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string);
            match (code, message, map.get("error")) {
                (code, Some(message), _) => (code, Some(message)),
                (code, None, Some(inner)) => {
                    let (inner_code, inner_message) = error_fields(inner);
                    (code.or(inner_code), inner_message)
                }
                (code, None, None) => (code, None),
            }
        }
        _ => (None, None),
    }
}
