use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use depot_protocol::endpoints;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all depot endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::ITEMS,
            post(handler::submit_item).get(handler::recent_items),
        )
        .route("/v1/items/:id", get(handler::item_summary))
        .route("/v1/items/:id/content", get(handler::item_content))
        .route(endpoints::REQUESTS, get(handler::recent_requests))
        .route(endpoints::STATUS, get(handler::status))
        .route(endpoints::HEALTH, get(handler::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
