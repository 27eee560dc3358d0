//! Middleware for request processing

pub mod extractors;

// Re-export for convenience
pub use extractors::ValidatedJson;

use axum::extract::Request;
use axum::http::{header, Method};
use axum::middleware::Next;
use axum::response::Response;
use std::time::{Duration, Instant};
use tower_http::cors::{Any, CorsLayer};

/// Request timing middleware for performance monitoring
pub async fn request_timing_middleware(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed();

    // Log slow requests
    if duration > Duration::from_secs(1) {
        tracing::warn!(
            path = %path,
            duration_ms = duration.as_millis(),
            "Slow request detected"
        );
    }

    response
}

/// Request logging middleware
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = %response.status(),
        "API request"
    );

    response
}

/// Create a CORS layer open to any origin.
///
/// The ingestion API is consumed by browser storefront snippets; tighten the
/// origin list per deployment.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}
