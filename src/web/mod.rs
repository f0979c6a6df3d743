// src/web/mod.rs
// Static music exposure - serves the music directory over HTTP so remote
// devices can pull the stream_url returned by the playback tools

use crate::error::{JukeboxError, Result};
use axum::Router;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the file-serving router. Every response carries
/// `Access-Control-Allow-Origin: *` so embedded devices and browser players
/// can fetch across origins.
pub fn create_router(root: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .fallback_service(ServeDir::new(root))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Serve `root` read-only on all interfaces at `port`, blocking until the
/// server stops. A missing root directory is fatal at startup.
pub async fn serve_files(root: &Path, port: u16) -> Result<()> {
    if !root.is_dir() {
        return Err(JukeboxError::Config(format!(
            "music directory does not exist: {}",
            root.display()
        )));
    }

    let app = create_router(root);
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("serving {} on http://{}/", root.display(), addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::fs;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_serves_file_with_cors_header() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("song.mp3"), b"fake audio").unwrap();

        let app = create_router(tmp.path());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/song.mp3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"fake audio");
    }

    #[tokio::test]
    async fn test_percent_encoded_filenames_resolve() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("七里香.mp3"), b"x").unwrap();

        let app = create_router(tmp.path());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/%E4%B8%83%E9%87%8C%E9%A6%99.mp3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_file_is_404_with_cors() {
        let tmp = tempfile::tempdir().unwrap();
        let app = create_router(tmp.path());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/absent.mp3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(
            response
                .headers()
                .get("access-control-allow-origin")
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_missing_root_is_fatal() {
        let err = serve_files(Path::new("/nonexistent/music"), 0)
            .await
            .unwrap_err();
        assert!(matches!(err, JukeboxError::Config(_)));
    }
}
