//! Domain modules organized as vertical slices, one per node resource.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types returned to callers, plus per-operation inputs
//! - `wire.rs` — Raw serde structs matching the node's JSON
//! - `convert.rs` — `TryFrom` conversions; failures become `MalformedResponse`
//! - `client.rs` — Sub-client with one method per operation

pub mod channel;
pub mod info;
pub mod invoice;
pub mod payment;
pub mod peer;
pub mod wallet;
