//! KhetSetGo - Backend Server
//!
//! Serves satellite-style farm advisories for Indian villages, a
//! notification dispatcher for SMS and voice alerts, and a mock SMS gateway
//! that stands in for a real carrier.

use std::sync::Arc;

use axum::{routing::get, Router};
use shared::{AdvisoryResolver, LocationTable};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
use error::{AppError, AppResult};
use services::{AdvisoryService, NotificationDispatcher, SimulatedSmsProvider, SmsProvider, SmsService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub advisory: AdvisoryService,
    pub dispatcher: NotificationDispatcher,
    pub sms: SmsService,
}

impl AppState {
    /// Build state from configuration, loading village data if configured
    pub fn from_config(config: Config) -> AppResult<Self> {
        let table = load_villages(config.advisory.villages_path.as_deref())?;
        let provider = Arc::new(SimulatedSmsProvider::new(config.sms.processing_delay()));
        Ok(Self::new(config, table, provider))
    }

    /// Build state from already-loaded parts
    pub fn new(config: Config, table: LocationTable, provider: Arc<dyn SmsProvider>) -> Self {
        let resolver = AdvisoryResolver::new(Arc::new(table), config.advisory.policy());

        Self {
            advisory: AdvisoryService::new(resolver, config.advisory.resolve_delay()),
            dispatcher: NotificationDispatcher::from_config(&config.sms),
            sms: SmsService::new(provider),
            config: Arc::new(config),
        }
    }
}

/// Load the village table from a JSON file, or fall back to the demo villages
pub fn load_villages(path: Option<&str>) -> AppResult<LocationTable> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| AppError::Configuration(format!("cannot read {}: {}", path, e)))?;
            let table = LocationTable::from_json(&json)?;
            tracing::info!("Loaded {} villages from {}", table.len(), path);
            Ok(table)
        }
        None => Ok(LocationTable::builtin()),
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .merge(routes::sms_gateway_routes())
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "KhetSetGo Advisory API v1.0"
}
