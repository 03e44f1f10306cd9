//! API routes.

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_api_key;
use crate::handlers::{analyze, health};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any);

    let analyze_routes = Router::new()
        .route("/analyze", post(analyze))
        .layer(middleware::from_fn_with_state(
            state.validator.clone(),
            require_api_key,
        ))
        .layer(cors);

    Router::new()
        .merge(analyze_routes)
        .route("/healthz", get(health))
        // axum's built-in body limit defaults to 2 MB and is what the
        // multipart extractor actually enforces; raise it to the configured
        // cap, with the tower-http layer as the outer bound
        .layer(DefaultBodyLimit::max(state.config.max_body_size))
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(ServerConfig::default()))
    }

    fn multipart_request(field: &str, filename: Option<&str>, payload: &[u8]) -> Request<Body> {
        let boundary = "facetrace-test-boundary";
        let disposition = match filename {
            Some(name) => format!("form-data; name=\"{field}\"; filename=\"{name}\""),
            None => format!("form-data; name=\"{field}\""),
        };
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: {disposition}\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(payload);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn detail(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_healthz_ok() {
        let response = app()
            .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unsupported_extension_rejected() {
        let response = app()
            .oneshot(multipart_request("video", Some("doc.pdf"), b"not a video"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(detail(response).await.contains("Unsupported file type"));
    }

    #[tokio::test]
    async fn test_missing_video_part_rejected() {
        let response = app()
            .oneshot(multipart_request("settings", None, b"{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(detail(response).await.contains("No video part"));
    }

    #[tokio::test]
    async fn test_multipart_field_readable_past_two_megabytes() {
        // a field larger than axum's built-in 2 MB default must be read in
        // full (failing here would surface as a length-limit read error,
        // not a settings parse error)
        let payload = vec![b'x'; 3 * 1024 * 1024];
        let response = app()
            .oneshot(multipart_request("settings", None, &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(detail(response).await.contains("Invalid settings"));
    }

    #[tokio::test]
    async fn test_body_over_configured_cap_rejected() {
        let config = ServerConfig {
            max_body_size: 1024,
            ..ServerConfig::default()
        };
        let router = create_router(AppState::new(config));
        let payload = vec![b'x'; 4096];
        let response = router
            .oneshot(multipart_request("settings", None, &payload))
            .await
            .unwrap();
        assert_ne!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_analyze_requires_key_when_configured() {
        let config = ServerConfig {
            api_key: Some("s3cret".to_string()),
            ..ServerConfig::default()
        };
        let router = create_router(AppState::new(config));
        let response = router
            .oneshot(multipart_request("video", Some("clip.mp4"), b"data"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
