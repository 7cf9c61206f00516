//! SMS gateway client
//!
//! Posts advisories to a `/send-sms` endpoint (the mock gateway served by
//! this crate, or anything speaking the same JSON). Each call is a single
//! attempt bounded by a timeout; there are no retries.

use std::time::Duration;

use reqwest::Client;
use shared::{NotificationRequest, SendSmsRequest, SendSmsResponse, SmsGatewayReply};

use crate::error::{AppError, AppResult};

/// SMS gateway client
#[derive(Clone)]
pub struct SmsGatewayClient {
    client: Client,
    url: String,
    timeout: Duration,
}

impl SmsGatewayClient {
    /// Create a new client for the given `/send-sms` URL
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one advisory to the gateway
    pub async fn send(&self, request: &NotificationRequest) -> AppResult<SendSmsResponse> {
        let body = SendSmsRequest {
            phone_number: request.destination.clone(),
            message: request.body.clone(),
            village_name: Some(request.location_name.clone()),
        };

        let response = self
            .client
            .post(&self.url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::SmsGatewayTimeout
                } else {
                    AppError::SmsGateway(format!("request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::SmsGateway(format!("{} - {}", status, body)));
        }

        let reply: SmsGatewayReply = response.json().await.map_err(|e| {
            if e.is_timeout() {
                AppError::SmsGatewayTimeout
            } else {
                AppError::SmsGateway(format!("failed to parse response: {}", e))
            }
        })?;

        match reply {
            SmsGatewayReply::Sent(sent) if sent.success => Ok(sent),
            SmsGatewayReply::Sent(sent) => Err(AppError::SmsGateway(sent.message)),
            SmsGatewayReply::Failed(failure) => Err(AppError::SmsGateway(match failure.details {
                Some(details) => format!("{}: {}", failure.error, details),
                None => failure.error,
            })),
        }
    }
}
