use dentra_config::ConfigError;
use dentra_core::CoreError;
use dentra_domain::DecodeError;
use thiserror::Error;

/// Error type for the command-line front end and file loading.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Usage(String),
}

impl DashboardError {
    pub fn usage(message: impl Into<String>) -> Self {
        DashboardError::Usage(message.into())
    }
}
