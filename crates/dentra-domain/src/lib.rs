//! dentra-domain
//!
//! Typed records for the clinic dashboard (treatments, paid entries, countable
//! records, business codes) and the document query model.
//! No I/O, no CLI, no storage. Decoding from document-store JSON happens here, once.

pub mod code;
pub mod common;
pub mod error;
pub mod lenient;
pub mod query;
pub mod record;
pub mod timestamp;
pub mod treatment;

pub use code::*;
pub use common::*;
pub use error::DecodeError;
pub use query::*;
pub use record::*;
pub use treatment::*;
