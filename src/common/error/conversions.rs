//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from the
//! XML and ZIP library errors to the crate's error types.

use super::types::{DecodeError, Error};

impl From<quick_xml::Error> for DecodeError {
    fn from(err: quick_xml::Error) -> Self {
        DecodeError::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for DecodeError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        DecodeError::Xml(err.to_string())
    }
}

impl From<quick_xml::escape::EscapeError> for DecodeError {
    fn from(err: quick_xml::escape::EscapeError) -> Self {
        DecodeError::Xml(err.to_string())
    }
}

impl From<std::str::Utf8Error> for DecodeError {
    fn from(err: std::str::Utf8Error) -> Self {
        DecodeError::Utf8(err.to_string())
    }
}

impl Error {
    /// Wraps a zip failure that happened while accessing one entry.
    pub(crate) fn from_entry_zip_error(entry: &str, err: zip::result::ZipError) -> Self {
        let source = match err {
            zip::result::ZipError::Io(e) => e,
            other => std::io::Error::new(std::io::ErrorKind::InvalidData, other),
        };
        Error::Io {
            entry: entry.to_string(),
            source,
        }
    }

    /// Wraps a failure to open the container at `path`.
    pub(crate) fn open(path: impl Into<String>, reason: impl ToString) -> Self {
        Error::Open {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use zip::result::ZipError;

    #[test]
    fn test_entry_zip_error_becomes_io() {
        let err = Error::from_entry_zip_error("ILCD/flows/a.xml", ZipError::FileNotFound);
        match err {
            Error::Io { entry, source } => {
                assert_eq!(entry, "ILCD/flows/a.xml");
                assert_eq!(source.kind(), io::ErrorKind::InvalidData);
            },
            other => panic!("unexpected error: {other:?}"),
        }

        let short = io::Error::new(io::ErrorKind::UnexpectedEof, "short read");
        let err = Error::from_entry_zip_error("ILCD/flows/b.xml", ZipError::Io(short));
        assert!(matches!(
            err,
            Error::Io { ref source, .. } if source.kind() == io::ErrorKind::UnexpectedEof
        ));
    }
}
