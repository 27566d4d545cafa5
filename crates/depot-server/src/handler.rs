use axum::extract::{Multipart, Path, State};
use axum::response::Json;

use depot_protocol::{
    HealthResponse, ItemSummaryMessage, RequestSummaryMessage, StatusMessage, SubmitRequest,
    SubmitResponse,
};
use depot_types::ItemId;

use crate::error::ServerError;
use crate::state::AppState;

/// Submission handler.
///
/// Expects a multipart form with a `request` part (JSON metadata) and a
/// `content` part (raw text). Unknown parts are ignored; a missing or
/// malformed required part is a 400.
pub async fn submit_item(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SubmitResponse>, ServerError> {
    let mut request: Option<SubmitRequest> = None;
    let mut content: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::InvalidRequest(e.to_string()))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("request") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ServerError::InvalidRequest(e.to_string()))?;
                request = Some(serde_json::from_str(&text).map_err(|e| {
                    ServerError::InvalidRequest(format!("malformed request part: {e}"))
                })?);
            }
            Some("content") => {
                content = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ServerError::InvalidRequest(e.to_string()))?,
                );
            }
            _ => {}
        }
    }

    let request =
        request.ok_or_else(|| ServerError::InvalidRequest("missing request part".into()))?;
    let content =
        content.ok_or_else(|| ServerError::InvalidRequest("missing content part".into()))?;

    let result = state.items.submit(request.user, &content)?;
    Ok(Json(SubmitResponse::from(result)))
}

/// Recent items, newest first.
pub async fn recent_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemSummaryMessage>>, ServerError> {
    let items = state.items.recent_items()?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Metadata for one item.
pub async fn item_summary(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<Json<ItemSummaryMessage>, ServerError> {
    let summary = state.items.item_summary(&id)?;
    Ok(Json(summary.into()))
}

/// Raw content of one item, served as plain text.
pub async fn item_content(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<String, ServerError> {
    Ok(state.items.item_content(&id)?)
}

/// Recent submissions, newest first.
pub async fn recent_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<RequestSummaryMessage>>, ServerError> {
    let requests = state.items.recent_requests()?;
    Ok(Json(requests.into_iter().map(Into::into).collect()))
}

/// Store-wide counters.
pub async fn status(State(state): State<AppState>) -> Result<Json<StatusMessage>, ServerError> {
    let status = state.status.status()?;
    Ok(Json(status.into()))
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
