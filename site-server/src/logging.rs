use axum::{
    extract::{MatchedPath, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestLogEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub method: String,
    pub path: String,
    pub matched_path: Option<String>,
    pub query_string: Option<String>,
    pub status_code: u16,
    pub duration_ms: u64,
    pub client_ip: Option<String>,
    pub user_agent: Option<String>,
    pub service: String,
    pub version: String,
}

// Middleware to capture and log every request/response pair
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let start_time = Instant::now();

    // Extract request information
    let method = request.method().clone();
    let uri = request.uri().clone();
    let path = uri.path().to_string();
    let query_string = uri.query().map(|q| q.to_string());
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string());
    let client_ip = extract_client_ip(request.headers());
    let user_agent = request
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    // Process the request
    let response = next.run(request).await;

    let duration = start_time.elapsed();
    let status_code = response.status().as_u16();

    let log_entry = RequestLogEntry {
        id: Uuid::new_v4().to_string(),
        timestamp: Utc::now(),
        method: method.to_string(),
        path,
        matched_path,
        query_string,
        status_code,
        duration_ms: duration.as_millis() as u64,
        client_ip,
        user_agent,
        service: "site-server".to_string(),
        version: "0.1.0".to_string(),
    };

    info!(
        "📡 API Call: {} {} -> {} ({} ms)",
        method,
        uri.path(),
        status_code,
        duration.as_millis()
    );

    let log_entry_json = serde_json::to_string(&log_entry).unwrap_or_default();
    debug!("📊 Detailed Log: {}", log_entry_json);

    response
}

fn extract_client_ip(headers: &HeaderMap) -> Option<String> {
    // Try various headers that might contain the real client IP
    let ip_headers = ["x-forwarded-for", "x-real-ip", "x-client-ip"];

    for header_name in &ip_headers {
        if let Some(header_value) = headers.get(*header_name) {
            if let Ok(ip_str) = header_value.to_str() {
                // Take the first IP if there are multiple (comma-separated)
                let first_ip = ip_str.split(',').next().unwrap_or("").trim();
                if !first_ip.is_empty() {
                    return Some(first_ip.to_string());
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_client_ip_from_forwarded_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        assert_eq!(
            extract_client_ip(&headers).as_deref(),
            Some("203.0.113.7")
        );
    }

    #[test]
    fn test_client_ip_missing() {
        assert_eq!(extract_client_ip(&HeaderMap::new()), None);
    }
}
