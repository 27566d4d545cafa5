//! Append-only request ledger for depot.
//!
//! Every submission is recorded here, whether it created a new item or was
//! deduplicated against an existing one. The ledger is the audit trail that
//! answers "who submitted what, and when" independently of the content store.
//!
//! This crate provides:
//! - [`RequestRecord`], one entry per submission
//! - The [`RequestLedger`] trait boundary
//! - [`InMemoryRequestLedger`] for tests, local serving, and embedding

pub mod error;
pub mod memory;
pub mod record;
pub mod traits;

pub use error::{LedgerError, LedgerResult};
pub use memory::InMemoryRequestLedger;
pub use record::RequestRecord;
pub use traits::RequestLedger;
