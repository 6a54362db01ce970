//! Fixed endpoint constants for the LND REST API.

/// Default REST port of an LND node.
pub const DEFAULT_REST_PORT: u16 = 8080;

/// Header carrying the hex-encoded macaroon on every request.
pub const MACAROON_HEADER: &str = "Grpc-Metadata-Macaroon";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
