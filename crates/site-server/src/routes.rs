//! Router

use axum::{Router, routing::get};
use site_core::SiteConfig;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::health_check;
use crate::state::AppState;

/// Health endpoint at the root, built frontend under the base path.
///
/// Paths under the base that are not files fall back to `index.html` so
/// client-side routes load the app.
pub fn build_router(config: &SiteConfig) -> Router {
    let index = config.static_dir.join("index.html");
    let frontend = ServeDir::new(&config.static_dir).fallback(ServeFile::new(index));

    let state = AppState {
        base_path: config.base_path.as_str().into(),
    };

    let app = Router::new()
        .route("/health", get(health_check))
        .with_state(state);

    let app = if config.base_path.is_empty() {
        app.fallback_service(frontend)
    } else {
        app.nest_service(&config.base_path, frontend)
    };

    app.layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tempfile::TempDir;
    use tower::ServiceExt;

    const INDEX: &str = "<!doctype html><title>Shuttle</title>";
    const LOGO: &[u8] = b"\x89PNG fake logo";

    fn site_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::create_dir(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images/logo.png"), LOGO).unwrap();
        dir
    }

    fn router(dir: &TempDir, base_path: &str) -> Router {
        build_router(&SiteConfig {
            base_path: base_path.into(),
            static_dir: dir.path().to_path_buf(),
            ..Default::default()
        })
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_health() {
        let dir = site_dir();
        let (status, body) = fetch(router(&dir, "/www"), "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["base_path"], "/www");
    }

    #[tokio::test]
    async fn test_logo_served_under_base_path() {
        let dir = site_dir();

        let (status, body) = fetch(router(&dir, "/www"), "/www/images/logo.png").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, LOGO);

        let (status, _) = fetch(router(&dir, "/www"), "/images/logo.png").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_logo_served_at_root() {
        let dir = site_dir();
        let (status, body) = fetch(router(&dir, ""), "/images/logo.png").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, LOGO);
    }

    #[tokio::test]
    async fn test_logo_served_under_unreserved_base_path() {
        let dir = site_dir();
        let base_path = site_core::normalize_base_path("v1.2_beta~x-y/").unwrap();
        let (status, body) =
            fetch(router(&dir, &base_path), "/v1.2_beta~x-y/images/logo.png").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, LOGO);
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dir = site_dir();
        let (status, body) = fetch(router(&dir, "/www"), "/www/some/page").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX.as_bytes());
    }
}
