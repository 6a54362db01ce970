//! Transport layer — request shaping, the `Transport` seam, and the
//! `reqwest`-backed `LndHttp`.

#[cfg(feature = "http")]
pub mod client;
pub mod request;
pub mod transport;

#[cfg(feature = "http")]
pub use client::LndHttp;
pub use request::{BodyMode, Method, NodeRequest, Operation, RetrySafety};
pub use transport::{RawResponse, Transport, TransportFailure};
