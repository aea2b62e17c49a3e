use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use std::time::Duration;

/// Byte count with dot thousands separators: `52431` -> `52.431`
pub fn format_size(n: usize) -> String {
    let digits = n.to_string();
    let bytes = digits.as_bytes();
    let mut groups: Vec<&str> = bytes
        .rchunks(3)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect();
    groups.reverse();
    groups.join(".")
}

/// One console line per request: time, duration, size, status, method, path.
/// The time is cyan for 200 and yellow otherwise.
pub fn format_line(
    status: StatusCode,
    method: &Method,
    path: &str,
    elapsed: Duration,
    size: Option<usize>,
) -> String {
    let color = if status == StatusCode::OK { "36" } else { "33" };
    let size = size.map_or_else(|| "error".to_string(), format_size);
    format!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color,
        Local::now().format("%H:%M:%S"),
        elapsed.as_millis(),
        size,
        status.as_u16(),
        method.as_str(),
        path
    )
}

/// Logs every request after the response body has been read (to know its size)
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            println!(
                "{}",
                format_line(parts.status, &method, &path, start.elapsed(), Some(bytes.len()))
            );
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            tracing::warn!("failed to read response body for {} {}: {}", method, path, e);
            println!(
                "{}",
                format_line(parts.status, &method, &path, start.elapsed(), None)
            );
            Response::from_parts(parts, Body::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0");
        assert_eq!(format_size(999), "999");
        assert_eq!(format_size(1000), "1.000");
        assert_eq!(format_size(1_234_567), "1.234.567");
    }

    #[test]
    fn test_format_line() {
        let line = format_line(
            StatusCode::NOT_FOUND,
            &Method::GET,
            "/missing.js",
            Duration::from_millis(3),
            Some(12_345),
        );
        assert!(line.starts_with("\x1b[33m"));
        assert!(line.contains("12.345"));
        assert!(line.ends_with("404    GET /missing.js"));

        let failed = format_line(StatusCode::OK, &Method::GET, "/", Duration::ZERO, None);
        assert!(failed.starts_with("\x1b[36m"));
        assert!(failed.contains("error"));
    }
}
