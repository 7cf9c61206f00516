//! HTTP handler for the mock SMS gateway

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use shared::{SendSmsRequest, SendSmsResponse};
use validator::Validate;

use crate::error::SmsError;
use crate::AppState;

/// Accept an SMS for "delivery"
pub async fn send_sms(
    State(state): State<AppState>,
    payload: Result<Json<SendSmsRequest>, JsonRejection>,
) -> Result<Json<SendSmsResponse>, SmsError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Rejected SMS request body: {}", rejection.body_text());
        SmsError::InvalidBody(rejection.body_text())
    })?;

    request.validate().map_err(|_| SmsError::MissingFields)?;

    let response = state.sms.send(request).await?;
    Ok(Json(response))
}
