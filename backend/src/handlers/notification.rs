//! HTTP handler for advisory notifications

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use shared::{DeliveryResult, NotificationChannel};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Input for dispatching an advisory
#[derive(Debug, Deserialize)]
pub struct DispatchInput {
    pub channel: NotificationChannel,
    pub message: String,
    pub village_name: Option<String>,
}

/// Send an advisory over SMS or play it as a voice alert
pub async fn dispatch_notification(
    State(state): State<AppState>,
    payload: Result<Json<DispatchInput>, JsonRejection>,
) -> AppResult<Json<DeliveryResult>> {
    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    if input.message.trim().is_empty() {
        return Err(AppError::Validation {
            field: "message".to_string(),
            message: "Message must not be empty".to_string(),
        });
    }

    let result = state
        .dispatcher
        .dispatch(input.channel, &input.message, input.village_name.as_deref())
        .await;

    Ok(Json(result))
}
