//! Converter Core - Domain entities, services, and traits.
//!
//! This crate contains the conversion logic for the Converter API.
//! It is transport-agnostic: the HTTP shell lives in `converter-server`.

pub mod constants;
pub mod errors;
pub mod fx;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
