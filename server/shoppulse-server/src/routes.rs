pub mod paths;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{cart, health, logistics, order, order_item, payment, user_behavior},
    openapi,
    server::ShopPulseServer,
};

/// Create health check routes
pub fn health_routes() -> Router<ShopPulseServer> {
    Router::new()
        .route(paths::ROOT, get(health::root_banner))
        .route(paths::health::HEALTH, get(health::health_check))
}

/// Create event ingestion routes
pub fn event_routes() -> Router<ShopPulseServer> {
    Router::new()
        .route(
            paths::events::USER_BEHAVIOR,
            post(user_behavior::create_user_behavior_event),
        )
        .route(
            paths::events::USER_BEHAVIOR,
            get(user_behavior::list_user_behavior_events),
        )
        .route(paths::events::CART, post(cart::create_cart_event))
        .route(paths::events::ORDER, post(order::create_order_event))
        .route(
            paths::events::ORDER_ITEM,
            post(order_item::create_order_item_event),
        )
        .route(paths::events::PAYMENT, post(payment::create_payment_event))
        .route(
            paths::events::LOGISTICS,
            post(logistics::create_logistics_event),
        )
}

/// Create the full route tree
pub fn create_routes() -> Router<ShopPulseServer> {
    Router::new()
        .merge(health_routes())
        .merge(event_routes())
        .merge(openapi::swagger_routes())
}
