use dentra_domain::DecodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
