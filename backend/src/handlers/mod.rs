//! HTTP handlers

pub mod advisory;
pub mod health;
pub mod notification;
pub mod sms;

pub use advisory::*;
pub use health::*;
pub use notification::*;
pub use sms::*;
