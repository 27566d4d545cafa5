//! HTTP server for depot.
//!
//! Serves submissions and reads over the content store and request ledger:
//! multipart POST for submissions, JSON for listings and counters, plain
//! text for content reads.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::DepotServer;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use depot_protocol::{ItemSummaryMessage, RequestSummaryMessage, StatusMessage, SubmitResponse};
    use depot_service::ServiceConfig;
    use tower::util::ServiceExt;

    const BOUNDARY: &str = "depot-test-boundary";

    fn test_router() -> axum::Router {
        router::build_router(AppState::in_memory(ServiceConfig::default()))
    }

    fn multipart_submit(user: &str, content: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"request\"\r\n\
             Content-Type: application/json\r\n\r\n\
             {{\"user\":\"{user}\"}}\r\n\
             --{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"content\"\r\n\r\n\
             {content}\r\n\
             --{BOUNDARY}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/v1/items")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn read_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    // -----------------------------------------------------------------------
    // Health and status
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn health_endpoint() {
        let app = test_router();
        let response = app.oneshot(get("/v1/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn status_starts_at_zero() {
        let app = test_router();
        let response = app.oneshot(get("/v1/status")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let status: StatusMessage = read_json(response).await;
        assert_eq!(status.items, 0);
        assert_eq!(status.requests, 0);
    }

    // -----------------------------------------------------------------------
    // Submission flow
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn submit_then_read_back() {
        let app = test_router();

        let response = app
            .clone()
            .oneshot(multipart_submit("alice", "hello world"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let submitted: SubmitResponse = read_json(response).await;
        assert_eq!(submitted.user, "alice");
        assert!(!submitted.existing);

        let response = app
            .clone()
            .oneshot(get(&format!("/v1/items/{}", submitted.item_id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let summary: ItemSummaryMessage = read_json(response).await;
        assert_eq!(summary.id, submitted.item_id);
        assert_eq!(summary.size, 11);

        let response = app
            .oneshot(get(&format!("/v1/items/{}/content", submitted.item_id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_text(response).await, "hello world");
    }

    #[tokio::test]
    async fn duplicate_submission_is_deduplicated() {
        let app = test_router();

        let first: SubmitResponse = read_json(
            app.clone()
                .oneshot(multipart_submit("alice", "shared"))
                .await
                .unwrap(),
        )
        .await;
        let second: SubmitResponse = read_json(
            app.clone()
                .oneshot(multipart_submit("bob", "shared"))
                .await
                .unwrap(),
        )
        .await;

        assert!(!first.existing);
        assert!(second.existing);
        assert_eq!(first.item_id, second.item_id);
        assert_ne!(first.request_id, second.request_id);

        let status: StatusMessage =
            read_json(app.clone().oneshot(get("/v1/status")).await.unwrap()).await;
        assert_eq!(status.items, 1);
        assert_eq!(status.requests, 2);

        let items: Vec<ItemSummaryMessage> =
            read_json(app.clone().oneshot(get("/v1/items")).await.unwrap()).await;
        assert_eq!(items.len(), 1);

        let requests: Vec<RequestSummaryMessage> =
            read_json(app.oneshot(get("/v1/requests")).await.unwrap()).await;
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r.item_id == first.item_id));
    }

    // -----------------------------------------------------------------------
    // Error paths
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn unknown_item_is_404() {
        let app = test_router();
        let id = depot_types::ItemId::new();

        let response = app
            .clone()
            .oneshot(get(&format!("/v1/items/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(get(&format!("/v1/items/{id}/content")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_item_id_is_rejected() {
        let app = test_router();
        let response = app.oneshot(get("/v1/items/not-a-uuid")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn submission_without_content_part_is_400() {
        let app = test_router();
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"request\"\r\n\
             Content-Type: application/json\r\n\r\n\
             {{\"user\":\"alice\"}}\r\n\
             --{BOUNDARY}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/v1/items")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn submission_with_malformed_request_part_is_400() {
        let app = test_router();
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"request\"\r\n\
             Content-Type: application/json\r\n\r\n\
             not json\r\n\
             --{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"content\"\r\n\r\n\
             payload\r\n\
             --{BOUNDARY}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/v1/items")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // -----------------------------------------------------------------------
    // Empty content
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn empty_content_submission_is_stored() {
        let app = test_router();

        let submitted: SubmitResponse = read_json(
            app.clone()
                .oneshot(multipart_submit("alice", ""))
                .await
                .unwrap(),
        )
        .await;
        assert!(!submitted.existing);

        let response = app
            .oneshot(get(&format!("/v1/items/{}/content", submitted.item_id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_text(response).await, "");
    }
}
