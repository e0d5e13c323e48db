//! dentra-core
//!
//! Dashboard analytics over decoded clinic records: business code sequencing,
//! month-over-month revenue and record growth.
//! Depends on dentra-domain. No CLI, no terminal I/O, no storage.

pub mod code_service;
pub mod dashboard_service;
pub mod error;
pub mod growth_service;
pub mod percent;
pub mod period;
pub mod revenue_service;
pub mod time;

pub use code_service::*;
pub use dashboard_service::*;
pub use error::CoreError;
pub use growth_service::*;
pub use percent::*;
pub use period::*;
pub use revenue_service::*;
pub use time::*;

#[cfg(test)]
mod tests;
