//! Notification dispatcher
//!
//! Sends an advisory to the farmer over SMS or plays it as a voice alert.
//! SMS delivery is best-effort: one gateway call is spawned in the
//! background and its outcome is only logged. The caller always receives a
//! local simulated acknowledgment.

use std::time::Duration;

use shared::{mask_phone, DeliveryResult, NotificationChannel, NotificationRequest};

use crate::config::SmsConfig;
use crate::external::SmsGatewayClient;

/// Notification dispatcher
#[derive(Clone)]
pub struct NotificationDispatcher {
    gateway: Option<SmsGatewayClient>,
    recipient: String,
    ack_delay: Duration,
}

impl NotificationDispatcher {
    pub fn new(gateway: Option<SmsGatewayClient>, recipient: impl Into<String>, ack_delay: Duration) -> Self {
        Self {
            gateway,
            recipient: recipient.into(),
            ack_delay,
        }
    }

    /// Build from config; an empty gateway URL disables the network call
    pub fn from_config(config: &SmsConfig) -> Self {
        let gateway = (!config.gateway_url.trim().is_empty())
            .then(|| SmsGatewayClient::new(config.gateway_url.clone(), config.gateway_timeout()));

        Self::new(gateway, config.default_recipient.clone(), config.ack_delay())
    }

    /// Dispatch an advisory. There is no failure path.
    pub async fn dispatch(
        &self,
        channel: NotificationChannel,
        body: &str,
        location_name: Option<&str>,
    ) -> DeliveryResult {
        match channel {
            NotificationChannel::Sms => self.dispatch_sms(body, location_name).await,
            NotificationChannel::Voice => self.dispatch_voice(body, location_name),
        }
    }

    async fn dispatch_sms(&self, body: &str, location_name: Option<&str>) -> DeliveryResult {
        let request = NotificationRequest::new(
            NotificationChannel::Sms,
            self.recipient.clone(),
            body,
            location_name,
        );

        if let Some(gateway) = self.gateway.clone() {
            let outbound = request.clone();
            tokio::spawn(async move {
                match gateway.send(&outbound).await {
                    Ok(reply) => tracing::info!(
                        request_id = %outbound.request_id,
                        message_id = %reply.message_id,
                        "SMS gateway accepted advisory"
                    ),
                    Err(e) => tracing::info!(
                        request_id = %outbound.request_id,
                        gateway = %gateway.url(),
                        error = %e,
                        "SMS gateway not available, using local simulation"
                    ),
                }
            });
        }

        tokio::time::sleep(self.ack_delay).await;

        tracing::info!(
            request_id = %request.request_id,
            recipient = %mask_phone(&request.destination),
            village = %request.location_name,
            body = %request.body,
            "SMS simulation sent"
        );

        DeliveryResult::simulated(&request)
    }

    fn dispatch_voice(&self, body: &str, location_name: Option<&str>) -> DeliveryResult {
        let request = NotificationRequest::new(NotificationChannel::Voice, String::new(), body, location_name);

        tracing::info!(
            request_id = %request.request_id,
            village = %request.location_name,
            "Mock voice alert: playing advice in local language"
        );

        DeliveryResult::simulated(&request)
    }
}
