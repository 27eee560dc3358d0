use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::ShopPulseServer;

/// Main OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::handlers::health::health_check,
        crate::handlers::health::root_banner,

        // Event ingestion endpoints
        crate::handlers::user_behavior::create_user_behavior_event,
        crate::handlers::user_behavior::list_user_behavior_events,
        crate::handlers::cart::create_cart_event,
        crate::handlers::order::create_order_event,
        crate::handlers::order_item::create_order_item_event,
        crate::handlers::payment::create_payment_event,
        crate::handlers::logistics::create_logistics_event,
    ),
    components(
        schemas(
            // Health schemas
            crate::handlers::health::HealthResponse,
            crate::handlers::health::BannerResponse,

            // Request schemas
            crate::handlers::user_behavior::UserBehaviorEventType,
            crate::handlers::user_behavior::CreateUserBehaviorEventRequest,
            crate::handlers::cart::CreateCartEventRequest,
            crate::handlers::order::OrderStatus,
            crate::handlers::order::CreateOrderEventRequest,
            crate::handlers::order_item::CreateOrderItemEventRequest,
            crate::handlers::payment::CreatePaymentEventRequest,
            crate::handlers::logistics::CreateLogisticsEventRequest,

            // Row schemas
            event_store::UserBehaviorEvent,
            event_store::CartEvent,
            event_store::OrderEvent,
            event_store::OrderItemEvent,
            event_store::PaymentEvent,
            event_store::LogisticsEvent,
        )
    ),
    tags(
        (name = "health", description = "Service health and banner endpoints"),
        (name = "events", description = "E-commerce event ingestion and read-back"),
    ),
    info(
        title = "ShopPulse API",
        version = "1.0.0",
        description = "E-commerce event ingestion platform: user behavior, cart, order, order item, payment, and logistics events persisted one row per event.",
        contact(
            name = "ShopPulse Team",
            email = "api@shoppulse.dev",
            url = "https://shoppulse.dev"
        ),
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
)]
pub struct ApiDoc;

/// Swagger UI routes serving the generated document.
pub fn swagger_routes() -> Router<ShopPulseServer> {
    SwaggerUi::new("/docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
