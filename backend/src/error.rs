//! Error handling for the KhetSetGo server
//!
//! Two response shapes are produced: the `{ error: { code, message } }`
//! envelope for the `/api/v1` routes, and the flat `{ success: false, ... }`
//! body the SMS gateway has always returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::{DataError, SmsFailure, INVALID_BODY_ERROR, MISSING_FIELDS_ERROR, SEND_FAILED_ERROR};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Reference data errors
    #[error("Village data error: {0}")]
    ReferenceData(#[from] DataError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // External service errors
    #[error("SMS gateway error: {0}")]
    SmsGateway(String),

    #[error("SMS gateway timed out")]
    SmsGatewayTimeout,
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "BAD_REQUEST".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{} not found", resource),
                    field: None,
                },
            ),
            AppError::ReferenceData(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "REFERENCE_DATA_ERROR".to_string(),
                    message: err.to_string(),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                    field: None,
                },
            ),
            AppError::SmsGateway(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "SMS_GATEWAY_ERROR".to_string(),
                    message: format!("SMS gateway error: {}", msg),
                    field: None,
                },
            ),
            AppError::SmsGatewayTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                ErrorDetail {
                    code: "SMS_GATEWAY_TIMEOUT".to_string(),
                    message: "SMS gateway did not respond in time".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

/// Errors from the mock SMS gateway, in its own wire format
#[derive(Error, Debug)]
pub enum SmsError {
    #[error("Phone number and message are required")]
    MissingFields,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Reported with status 200 and `success: false`, as clients expect
    #[error("Failed to send SMS: {0}")]
    SendFailed(String),
}

impl IntoResponse for SmsError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            SmsError::MissingFields => (
                StatusCode::BAD_REQUEST,
                SmsFailure::new(MISSING_FIELDS_ERROR, None),
            ),
            SmsError::InvalidBody(details) => (
                StatusCode::BAD_REQUEST,
                SmsFailure::new(INVALID_BODY_ERROR, Some(details)),
            ),
            SmsError::SendFailed(details) => {
                tracing::error!("SMS sending failed: {}", details);
                (StatusCode::OK, SmsFailure::new(SEND_FAILED_ERROR, Some(details)))
            }
        };

        (status, Json(body)).into_response()
    }
}
