//! Business logic services for the KhetSetGo server

pub mod advisory;
pub mod dispatcher;
pub mod sms;

pub use advisory::AdvisoryService;
pub use dispatcher::NotificationDispatcher;
pub use sms::{SimulatedSmsProvider, SmsProvider, SmsService};
