//! Wire format of the SMS gateway

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::validate_not_blank;

pub const SMS_SENT_MESSAGE: &str = "SMS sent successfully";
pub const MISSING_FIELDS_ERROR: &str = "Phone number and message are required";
pub const SEND_FAILED_ERROR: &str = "Failed to send SMS";
pub const INVALID_BODY_ERROR: &str = "Invalid request body";
pub const SERVICE_RUNNING_STATUS: &str = "SMS Service is running";

/// Body of `POST /send-sms`
///
/// Missing fields deserialize as empty strings so that presence and
/// blankness are reported through the same validation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsRequest {
    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub phone_number: String,

    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village_name: Option<String>,
}

/// Successful gateway reply
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsResponse {
    pub success: bool,
    pub message: String,
    pub message_id: String,
    pub recipient: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
}

impl SendSmsResponse {
    pub fn sent(message_id: String, recipient: String, village: Option<String>) -> Self {
        Self {
            success: true,
            message: SMS_SENT_MESSAGE.to_string(),
            message_id,
            recipient,
            village,
        }
    }
}

/// Failed gateway reply
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SmsFailure {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SmsFailure {
    pub fn new(error: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details,
        }
    }
}

/// Either gateway reply, as seen by a client
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SmsGatewayReply {
    Sent(SendSmsResponse),
    Failed(SmsFailure),
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceHealth {
    pub status: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_fails_validation() {
        let request: SendSmsRequest = serde_json::from_str("{}").unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_blank_fields_fail_validation() {
        let request: SendSmsRequest =
            serde_json::from_str(r#"{"phoneNumber": "   ", "message": "test"}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_camel_case_request() {
        let request: SendSmsRequest = serde_json::from_str(
            r#"{"phoneNumber": "+91 8669490817", "message": "test", "villageName": "Rampur"}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.village_name.as_deref(), Some("Rampur"));
    }

    #[test]
    fn test_reply_variants() {
        let sent: SmsGatewayReply = serde_json::from_str(
            r#"{"success": true, "message": "SMS sent successfully", "messageId": "demo_1", "recipient": "+911"}"#,
        )
        .unwrap();
        assert!(matches!(sent, SmsGatewayReply::Sent(r) if r.message_id == "demo_1"));

        let failed: SmsGatewayReply =
            serde_json::from_str(r#"{"success": false, "error": "Failed to send SMS", "details": "boom"}"#)
                .unwrap();
        assert!(matches!(failed, SmsGatewayReply::Failed(f) if f.details.as_deref() == Some("boom")));
    }

    #[test]
    fn test_village_omitted_when_absent() {
        let json = serde_json::to_value(SendSmsResponse::sent("demo_1".into(), "+911".into(), None)).unwrap();
        assert!(json.get("village").is_none());
        assert_eq!(json["messageId"], "demo_1");
    }
}
