use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shoppulse_server::create_app;
use shoppulse_server::server::{ServerConfig, ShopPulseServer};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("shoppulse_server=info".parse()?)
                .add_directive("event_store=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    let config = ServerConfig::from_env();
    let addr = config.bind_addr();

    let server = ShopPulseServer::new(config).await?;
    event_store::ensure_schema(server.db.pool()).await?;

    let app = create_app(server.clone());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "ShopPulse API listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    server.db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
