#![doc(test(attr(deny(warnings))))]

//! Dentra dashboard derives the clinic dashboard figures (next business
//! codes, month-over-month revenue and patient growth) from document
//! collections exported by the clinic's document store.

pub mod cli;
pub mod errors;
pub mod loader;
pub mod utils;

pub use dentra_config;
pub use dentra_core;
pub use dentra_domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Dentra dashboard tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
