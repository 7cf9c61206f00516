//! Configuration management for the KhetSetGo server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with KSG_ prefix
//! 4. A bare `PORT` variable for the listen port

use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Advisory resolution settings
    pub advisory: AdvisoryConfig,

    /// SMS gateway and dispatcher settings
    pub sms: SmsConfig,

    /// Twilio credentials (placeholders, never used against the provider)
    pub twilio: TwilioConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,

    /// Log output: `pretty` or `json`
    pub log_format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdvisoryConfig {
    /// Soil moisture percent at or above which crops are considered watered
    pub soil_moisture_threshold: f64,

    /// Forecast rainfall in mm at or above which irrigation is skipped
    pub rainfall_threshold_mm: f64,

    /// Simulated satellite lookup latency
    pub resolve_delay_ms: u64,

    /// Optional JSON file replacing the built-in villages
    pub villages_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmsConfig {
    /// Gateway endpoint the dispatcher posts to; empty disables the call
    pub gateway_url: String,

    /// Bound on the single gateway attempt
    pub gateway_timeout_ms: u64,

    /// Simulated provider latency inside `/send-sms`
    pub processing_delay_ms: u64,

    /// Delay before the dispatcher acknowledges an SMS locally
    pub ack_delay_ms: u64,

    /// Farmer number advisories are sent to
    pub default_recipient: String,
}

#[derive(Deserialize, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub phone_number: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("KSG_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3001)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.log_format", "pretty")?
            .set_default("advisory.soil_moisture_threshold", 35.0)?
            .set_default("advisory.rainfall_threshold_mm", 10.0)?
            .set_default("advisory.resolve_delay_ms", 500)?
            .set_default("sms.gateway_url", "http://localhost:3001/send-sms")?
            .set_default("sms.gateway_timeout_ms", 5000)?
            .set_default("sms.processing_delay_ms", 1000)?
            .set_default("sms.ack_delay_ms", 500)?
            .set_default("sms.default_recipient", "+91 8669490817")?
            .set_default("twilio.account_sid", "your_account_sid")?
            .set_default("twilio.auth_token", "your_auth_token")?
            .set_default("twilio.phone_number", "+1234567890")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (KSG_ prefix)
            .add_source(
                Environment::with_prefix("KSG").separator("__"),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl SmsConfig {
    pub fn gateway_timeout(&self) -> Duration {
        Duration::from_millis(self.gateway_timeout_ms)
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub fn ack_delay(&self) -> Duration {
        Duration::from_millis(self.ack_delay_ms)
    }
}

impl AdvisoryConfig {
    pub fn resolve_delay(&self) -> Duration {
        Duration::from_millis(self.resolve_delay_ms)
    }

    pub fn policy(&self) -> shared::AdvisoryPolicy {
        shared::AdvisoryPolicy {
            soil_moisture_threshold: self.soil_moisture_threshold,
            rainfall_threshold_mm: self.rainfall_threshold_mm,
        }
    }
}

impl TwilioConfig {
    /// Whether real credentials were supplied instead of the placeholders
    pub fn is_configured(&self) -> bool {
        !self.account_sid.starts_with("your_") && !self.auth_token.starts_with("your_")
    }
}

impl std::fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("phone_number", &self.phone_number)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            host: "0.0.0.0".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            soil_moisture_threshold: shared::SOIL_MOISTURE_THRESHOLD,
            rainfall_threshold_mm: shared::RAINFALL_THRESHOLD_MM,
            resolve_delay_ms: 500,
            villages_path: None,
        }
    }
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            gateway_url: "http://localhost:3001/send-sms".to_string(),
            gateway_timeout_ms: 5000,
            processing_delay_ms: 1000,
            ack_delay_ms: 500,
            default_recipient: "+91 8669490817".to_string(),
        }
    }
}

impl Default for TwilioConfig {
    fn default() -> Self {
        Self {
            account_sid: "your_account_sid".to_string(),
            auth_token: "your_auth_token".to_string(),
            phone_number: "+1234567890".to_string(),
        }
    }
}
