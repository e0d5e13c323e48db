//! dentra-config
//!
//! Persistent dashboard preferences: reporting policy and business code formats.
//! Owns the Config data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{CodeFormat, Config};
