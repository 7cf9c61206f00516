//! Health check handlers

use axum::Json;
use chrono::{SecondsFormat, Utc};
use shared::{ServiceHealth, SERVICE_RUNNING_STATUS};

/// Liveness endpoint handler
pub async fn health_check() -> Json<ServiceHealth> {
    Json(ServiceHealth {
        status: SERVICE_RUNNING_STATUS.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
