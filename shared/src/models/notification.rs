//! Notification dispatch models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback location label when the advisory has no village
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Acknowledgment shown when a voice alert is played
pub const VOICE_ACKNOWLEDGMENT: &str = "Voice alert chalayi ja rahi hai! (Mock voice playing)";

/// Delivery channel for an advisory
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NotificationChannel {
    #[serde(rename = "SMS", alias = "sms")]
    Sms,
    #[serde(rename = "Voice", alias = "voice")]
    Voice,
}

impl NotificationChannel {
    /// Prefix for generated request identifiers
    pub fn id_prefix(&self) -> &'static str {
        match self {
            NotificationChannel::Sms => "SMS",
            NotificationChannel::Voice => "VOICE",
        }
    }
}

impl std::fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationChannel::Sms => write!(f, "SMS"),
            NotificationChannel::Voice => write!(f, "Voice"),
        }
    }
}

/// A single delivery attempt; never queued or retried
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationRequest {
    pub request_id: String,
    pub channel: NotificationChannel,
    pub destination: String,
    pub body: String,
    pub location_name: String,
    pub created_at: DateTime<Utc>,
}

impl NotificationRequest {
    /// Stamp a new request with a time-based identifier
    pub fn new(
        channel: NotificationChannel,
        destination: impl Into<String>,
        body: impl Into<String>,
        location_name: Option<&str>,
    ) -> Self {
        let created_at = Utc::now();
        Self {
            request_id: format!("{}_{}", channel.id_prefix(), created_at.timestamp_millis()),
            channel,
            destination: destination.into(),
            body: body.into(),
            location_name: location_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(UNKNOWN_LOCATION)
                .to_string(),
            created_at,
        }
    }
}

/// Outcome reported to the user interface
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// Acknowledged locally; transport outcome is not reflected
    Simulated,
}

/// Acknowledgment returned by the dispatcher
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryResult {
    pub success: bool,
    pub status: DeliveryStatus,
    pub channel: NotificationChannel,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    pub location_name: String,
    pub acknowledgment: String,
    pub timestamp: DateTime<Utc>,
}

impl DeliveryResult {
    /// Local success for a request, whatever happened on the wire
    pub fn simulated(request: &NotificationRequest) -> Self {
        let (recipient, acknowledgment) = match request.channel {
            NotificationChannel::Sms => (
                Some(request.destination.clone()),
                format!("SMS sent successfully to {}", request.destination),
            ),
            NotificationChannel::Voice => (None, VOICE_ACKNOWLEDGMENT.to_string()),
        };

        Self {
            success: true,
            status: DeliveryStatus::Simulated,
            channel: request.channel,
            request_id: request.request_id.clone(),
            recipient,
            location_name: request.location_name.clone(),
            acknowledgment,
            timestamp: Utc::now(),
        }
    }
}
