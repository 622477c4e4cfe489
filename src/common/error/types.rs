//! Error types for ILCD package access.
//!
//! Decoding failures of a single document are reported as [`DecodeError`];
//! the package reader wraps them, together with container and lookup
//! failures, into the unified [`Error`].
use crate::model::DataSetKind;
use thiserror::Error;

/// A data set document could not be mapped onto its model type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The document is not well-formed XML
    #[error("XML error: {0}")]
    Xml(String),

    /// The document contains no element at all
    #[error("document has no root element")]
    NoRootElement,

    /// The root element does not match the requested data set type
    #[error("expected root element <{expected}>, found <{found}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    /// Element text that should be numeric could not be parsed
    #[error("invalid value {value:?} in <{element}>")]
    InvalidValue { element: String, value: String },

    /// Names, attributes or text are not valid UTF-8
    #[error("invalid UTF-8: {0}")]
    Utf8(String),
}

/// Main error type for package operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The package cannot be opened (missing, unreadable or not a zip)
    #[error("cannot open package {path}: {reason}")]
    Open { path: String, reason: String },

    /// No entry matches the requested data set type and UUID
    #[error("{kind} {uuid} not found in package")]
    NotFound { kind: DataSetKind, uuid: String },

    /// An entry's byte stream cannot be opened or fully read
    #[error("IO error reading {entry}: {source}")]
    Io {
        entry: String,
        #[source]
        source: std::io::Error,
    },

    /// An entry's content does not decode to the expected data set
    #[error("cannot decode {entry}: {source}")]
    Decode {
        entry: String,
        #[source]
        source: DecodeError,
    },
}

impl Error {
    /// Returns `true` if the requested data set does not exist in the package.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Returns `true` if an entry exists but is malformed.
    #[inline]
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }
}

/// Result type for package operations.
pub type Result<T> = std::result::Result<T, Error>;
