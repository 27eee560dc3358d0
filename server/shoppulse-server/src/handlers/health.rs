use axum::extract::State;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::server::ShopPulseServer;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// "ok" while the process is serving
    #[schema(example = "ok")]
    pub status: String,
}

/// Service banner response
#[derive(Debug, Serialize, ToSchema)]
pub struct BannerResponse {
    #[schema(example = "ShopPulse API is running")]
    pub message: String,
}

/// Health check handler
///
/// Deliberately touches nothing: probes must stay cheap and must not fail
/// with the database.
#[utoipa::path(
    get,
    path = crate::routes::paths::health::HEALTH,
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Service banner handler
#[utoipa::path(
    get,
    path = crate::routes::paths::ROOT,
    tag = "health",
    responses(
        (status = 200, description = "Service banner", body = BannerResponse)
    )
)]
pub async fn root_banner(State(server): State<ShopPulseServer>) -> Json<BannerResponse> {
    Json(BannerResponse {
        message: format!("{} API is running", server.config.name),
    })
}
