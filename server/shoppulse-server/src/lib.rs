//! ShopPulse Server - e-commerce event ingestion API
//!
//! This library provides the core functionality of the ShopPulse HTTP server:
//! request validation, one handler per event type, and the route/middleware
//! composition.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod validation;

// Re-export commonly used types
pub use error::ApiError;
pub use server::ShopPulseServer;

use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router with all routes and middleware
pub fn create_app(server: ShopPulseServer) -> Router {
    routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::create_cors_layer())
                .layer(from_fn(middleware::request_timing_middleware))
                .layer(from_fn(middleware::request_logging_middleware)),
        )
        .with_state(server)
}
