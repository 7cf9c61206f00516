//! Shared types and models for the KhetSetGo advisory platform
//!
//! This crate contains the domain logic shared between the backend server,
//! the browser (via WASM), and tests: village reference data, the advisory
//! resolver, the dashboard view model, and map layer overlays.

pub mod models;
pub mod resolver;
pub mod types;
pub mod validation;
pub mod view;

pub use models::*;
pub use resolver::*;
pub use types::*;
pub use validation::*;
pub use view::*;
