//! Wire types for the depot HTTP API.
//!
//! Defines the JSON request and response bodies exchanged with depot servers
//! and the endpoint paths they are served on. Service-layer types convert
//! into these messages at the transport boundary so the JSON surface can
//! evolve independently of the internals.

pub mod endpoint;
pub mod message;

pub use endpoint::{endpoints, HealthResponse};
pub use message::{
    ErrorMessage, ItemSummaryMessage, RequestSummaryMessage, StatusMessage, SubmitRequest,
    SubmitResponse,
};
