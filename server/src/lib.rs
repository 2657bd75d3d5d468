//! Folio preview server.
//!
//! Serves the exported site directory under the configured base path, the
//! way a static host would. There is no application logic on the server;
//! everything interactive runs in the browser.

use std::path::Path;

use axum::Router;
use folio_core::Config;
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Create the preview router for `site_root`, mounted at `base_path`.
///
/// An empty `base_path` serves the site from `/`.
pub fn create_router(site_root: &Path, base_path: &str) -> Router {
    let files = ServeDir::new(site_root).append_index_html_on_directories(true);

    let router = if base_path.is_empty() {
        Router::new().fallback_service(files)
    } else {
        Router::new().nest_service(base_path, files)
    };

    router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

/// Bind `config.server.addr` and serve until the process is stopped.
pub async fn serve(config: &Config) -> std::io::Result<()> {
    let site_root = Path::new(&config.server.site_root);
    if !site_root.is_dir() {
        tracing::warn!(
            site_root = %site_root.display(),
            "site root does not exist yet; build the site first"
        );
    }

    let router = create_router(site_root, &config.site.base_path);
    let listener = tokio::net::TcpListener::bind(&config.server.addr).await?;

    tracing::info!(
        "serving {} at http://{}{}/",
        site_root.display(),
        listener.local_addr()?,
        config.site.base_path
    );
    axum::serve(listener, router).await
}

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("index.html"), "<html>folio</html>").expect("write");
        std::fs::create_dir(dir.path().join("pkg")).expect("mkdir");
        std::fs::write(dir.path().join("pkg/folio.css"), "body{}").expect("write");
        dir
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_serves_index_at_root() {
        let dir = site();
        let (status, body) = get(create_router(dir.path(), ""), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("folio"));
    }

    #[tokio::test]
    async fn test_serves_assets_under_base_path() {
        let dir = site();
        let router = create_router(dir.path(), "/portfolio");

        let (status, body) = get(router.clone(), "/portfolio/pkg/folio.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body{}");

        let (status, _) = get(router, "/pkg/folio.css").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = site();
        let (status, _) = get(create_router(dir.path(), ""), "/nope.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
