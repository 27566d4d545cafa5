//! Foundation types for depot.
//!
//! This crate provides the identifier, content-identity, and timestamp types
//! used throughout the depot system. Every other depot crate depends on
//! `depot-types`.
//!
//! # Key Types
//!
//! - [`ItemId`] — UUID v7 identifier for a stored item
//! - [`RequestId`] — UUID v7 identifier for a submission request
//! - [`ContentHash`] — BLAKE3 digest of submitted content
//! - [`ContentIdentity`] — the (size, hash) pair used for deduplication
//! - [`Timestamp`] — milliseconds since the UNIX epoch

pub mod error;
pub mod hash;
pub mod id;
pub mod timestamp;

pub use error::TypeError;
pub use hash::{ContentHash, ContentIdentity};
pub use id::{ItemId, RequestId};
pub use timestamp::Timestamp;
