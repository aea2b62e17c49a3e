use axum::{
    http::{header, HeaderValue},
    middleware,
    routing::get,
    Router,
};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::shared::request_log::request_logger;

pub const CACHE_CONTROL_VALUE: &str = "no-cache, no-store, must-revalidate";

/// `/health` plus the built frontend, every response marked as not cacheable
///
/// Unknown paths get `index.html` so a reload on any URL lands in the app.
pub fn configure_routes(dist: &Path) -> Router {
    let static_files = ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(static_files)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_VALUE),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static("0"),
        ))
        .layer(middleware::from_fn(request_logger))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    async fn raw_get(addr: SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn test_serves_dist_without_caching() {
        let dist = std::env::temp_dir().join(format!("pharma-connect-dist-{}", std::process::id()));
        std::fs::create_dir_all(&dist).unwrap();
        std::fs::write(dist.join("index.html"), "<html>pharma</html>").unwrap();
        std::fs::write(dist.join("app.css"), "body{}").unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = configure_routes(&dist);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let health = raw_get(addr, "/health").await;
        assert!(health.starts_with("HTTP/1.1 200"));
        let lower = health.to_lowercase();
        assert!(lower.contains("cache-control: no-cache, no-store, must-revalidate"));
        assert!(lower.contains("pragma: no-cache"));
        assert!(lower.contains("expires: 0"));
        assert!(health.ends_with("ok"));

        let css = raw_get(addr, "/app.css").await;
        assert!(css.ends_with("body{}"));

        let page = raw_get(addr, "/?page=stock").await;
        assert!(page.contains("<html>pharma</html>"));

        let deep = raw_get(addr, "/orders/42").await;
        assert!(deep.starts_with("HTTP/1.1 200"));
        assert!(deep.contains("<html>pharma</html>"));

        std::fs::remove_dir_all(&dist).ok();
    }
}
