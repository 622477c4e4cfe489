//! Common types and utilities shared across the package reader and the
//! data set model.

// Submodule declarations
pub mod error;
pub mod xml;

// Re-exports for convenience
pub use error::{DecodeError, Error, Result};
pub use xml::Element;
