use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

/// Header carrying the per-request id back to the client
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Log every request/response pair with a request id and echo the id back
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or("").to_string();

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        query = %sanitize_query(&query),
        "Incoming request"
    );

    let mut response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_client_error() || status.is_server_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request failed"
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request completed"
        );
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER.clone(), value);
    }

    response
}

/// Mask values of secret-looking query parameters
fn sanitize_query(query: &str) -> String {
    const SECRET_KEYS: [&str; 4] = ["api_key", "token", "password", "secret"];

    query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if SECRET_KEYS.contains(&key) => format!("{}=***", key),
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_query() {
        assert_eq!(sanitize_query(""), "");
        assert_eq!(sanitize_query("q=alice"), "q=alice");
        assert_eq!(sanitize_query("api_key=secret123"), "api_key=***");
        assert_eq!(
            sanitize_query("q=test&password=hunter2&limit=10"),
            "q=test&password=***&limit=10"
        );
    }

    #[test]
    fn test_sanitize_query_leaves_similar_keys() {
        assert_eq!(sanitize_query("tokens=5"), "tokens=5");
    }
}
