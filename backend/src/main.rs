//! KhetSetGo server binary

use std::net::SocketAddr;

use khetsetgo_backend::{create_app, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "khetsetgo_server=debug,khetsetgo_backend=debug,tower_http=debug".into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    if config.server.log_format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting KhetSetGo Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::debug!("Twilio: {:?}", config.twilio);
    if !config.twilio.is_configured() {
        tracing::info!("Twilio credentials not set, SMS delivery is simulated");
    }

    // Create application state
    let state = AppState::from_config(config.clone())?;
    tracing::info!("Serving advisories for {} villages", state.advisory.table().len());

    // Build application
    let app = create_app(state);

    // Start server
    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((host, config.server.port));
    tracing::info!("SMS Service running on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
