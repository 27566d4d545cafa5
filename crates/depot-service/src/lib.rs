//! Core submission logic for depot.
//!
//! This crate ties the content store and the request ledger together into
//! the dedup-and-record pipeline:
//!
//! 1. A submission arrives with a user and content.
//! 2. The content identity (byte length + BLAKE3 hash) is computed and looked
//!    up in the store.
//! 3. On a hit the existing item's id is reused; on a miss a new item is
//!    created.
//! 4. Either way, a request record is appended to the ledger.
//!
//! Key types:
//! - [`ItemService`] — submissions and item/request reads
//! - [`StatusService`] — store-wide counters
//! - [`SubmissionResult`] — what a submission resolved to
//! - [`ItemSummary`] / [`RequestSummary`] — content-free listing rows

pub mod config;
pub mod error;
pub mod service;
pub mod status;
pub mod summary;

pub use config::ServiceConfig;
pub use error::{ServiceError, ServiceResult};
pub use service::{ItemService, SubmissionResult};
pub use status::{StatusService, StoreStatus};
pub use summary::{ItemSummary, RequestSummary};
