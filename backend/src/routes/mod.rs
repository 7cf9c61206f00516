//! Route definitions for the KhetSetGo server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Mock SMS gateway routes, served at the root where clients expect them
pub fn sms_gateway_routes() -> Router<AppState> {
    Router::new()
        .route("/send-sms", post(handlers::send_sms))
        .route("/health", get(handlers::health_check))
}

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Village reference data
        .nest("/villages", village_routes())
        // Advisory resolution
        .route("/advisories", post(handlers::resolve_advisory))
        // Notification dispatch
        .route("/notifications", post(handlers::dispatch_notification))
}

/// Village routes
fn village_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_villages))
        .route("/:name", get(handlers::get_village))
}
