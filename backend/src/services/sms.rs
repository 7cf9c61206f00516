//! Mock SMS gateway service
//!
//! Backs `POST /send-sms`. Delivery goes through an [`SmsProvider`]; the
//! only provider shipped is a simulation that sleeps and invents an id.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use shared::{is_indian_mobile, normalize_phone, SendSmsRequest, SendSmsResponse};
use uuid::Uuid;

use crate::error::SmsError;

/// Something that can hand a text message to a carrier
#[async_trait]
pub trait SmsProvider: Send + Sync {
    /// Deliver `body` to `recipient`, returning the provider message id
    async fn deliver(&self, recipient: &str, body: &str) -> anyhow::Result<String>;
}

/// Provider that only waits and fabricates a message id
#[derive(Debug, Clone)]
pub struct SimulatedSmsProvider {
    delay: Duration,
}

impl SimulatedSmsProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SmsProvider for SimulatedSmsProvider {
    async fn deliver(&self, _recipient: &str, _body: &str) -> anyhow::Result<String> {
        tokio::time::sleep(self.delay).await;

        let suffix = Uuid::new_v4().simple().to_string();
        Ok(format!("demo_{}_{}", Utc::now().timestamp_millis(), &suffix[..8]))
    }
}

/// SMS gateway service
#[derive(Clone)]
pub struct SmsService {
    provider: Arc<dyn SmsProvider>,
}

impl SmsService {
    pub fn new(provider: Arc<dyn SmsProvider>) -> Self {
        Self { provider }
    }

    /// Send a validated request through the provider
    pub async fn send(&self, request: SendSmsRequest) -> Result<SendSmsResponse, SmsError> {
        let recipient = normalize_phone(&request.phone_number);

        if !is_indian_mobile(&recipient) {
            tracing::warn!(recipient = %recipient, "Recipient does not look like an Indian mobile number");
        }

        tracing::info!(
            recipient = %recipient,
            body = %request.message,
            village = ?request.village_name,
            "SMS sent"
        );

        let message_id = self
            .provider
            .deliver(&recipient, &request.message)
            .await
            .map_err(|e| SmsError::SendFailed(e.to_string()))?;

        Ok(SendSmsResponse::sent(message_id, recipient, request.village_name))
    }
}
