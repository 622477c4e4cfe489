//! Unified error types for the ILCD reader.
//!
//! This module provides the document-level [`DecodeError`] and the
//! package-level [`Error`] that every public operation returns.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{DecodeError, Error, Result};
