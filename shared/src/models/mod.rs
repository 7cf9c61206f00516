//! Domain models for the KhetSetGo advisory platform

mod advisory;
mod layer;
mod location;
mod notification;
mod sms;

pub use advisory::*;
pub use layer::*;
pub use location::*;
pub use notification::*;
pub use sms::*;
