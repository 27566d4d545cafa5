use serde::{Deserialize, Serialize};

use depot_service::{ItemSummary, RequestSummary, StoreStatus, SubmissionResult};
use depot_types::{ItemId, RequestId, Timestamp};

/// The JSON metadata part of a submission.
///
/// Submissions arrive as multipart forms with two parts: `request` carrying
/// this message and `content` carrying the raw text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRequest {
    /// The submitting user.
    pub user: String,
}

/// Response to a submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// The item the submission resolved to.
    pub item_id: ItemId,
    /// The ledger record created for this submission.
    pub request_id: RequestId,
    /// The submitting user, echoed back.
    pub user: String,
    /// `true` if the content was deduplicated against an existing item.
    pub existing: bool,
}

impl From<SubmissionResult> for SubmitResponse {
    fn from(result: SubmissionResult) -> Self {
        Self {
            item_id: result.item_id,
            request_id: result.request_id,
            user: result.user,
            existing: result.existing,
        }
    }
}

/// One row in an item listing, and the body of an item metadata read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummaryMessage {
    pub id: ItemId,
    pub created_at: Timestamp,
    pub size: u64,
}

impl From<ItemSummary> for ItemSummaryMessage {
    fn from(summary: ItemSummary) -> Self {
        Self {
            id: summary.id,
            created_at: summary.created_at,
            size: summary.size,
        }
    }
}

/// One row in a request listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSummaryMessage {
    pub id: RequestId,
    pub item_id: ItemId,
    pub requested_at: Timestamp,
    pub user: String,
}

impl From<RequestSummary> for RequestSummaryMessage {
    fn from(summary: RequestSummary) -> Self {
        Self {
            id: summary.id,
            item_id: summary.item_id,
            requested_at: summary.requested_at,
            user: summary.user,
        }
    }
}

/// Body of the status endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub items: u64,
    pub requests: u64,
}

impl From<StoreStatus> for StatusMessage {
    fn from(status: StoreStatus) -> Self {
        Self {
            items: status.items,
            requests: status.requests,
        }
    }
}

/// Error body returned on any non-success response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub error: String,
}

impl ErrorMessage {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
