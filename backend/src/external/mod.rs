//! External API integrations

pub mod sms_gateway;

pub use sms_gateway::SmsGatewayClient;
