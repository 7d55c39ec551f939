use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth_gateway_axum::{GatewayConfig, auth_gateway_router, init};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize the backing stores before taking traffic
    init().await?;

    let config = GatewayConfig::from_env()?;
    let app = auth_gateway_router(config);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3001").await?;
    tracing::info!("Gateway listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
