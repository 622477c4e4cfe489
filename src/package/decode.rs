//! Decoding of package entries into data sets or raw bytes.
//!
//! Entry content is always copied out of the archive, so decoded values and
//! raw buffers stay valid after the reader is closed.

use crate::common::{DecodeError, Element, Error, Result};
use crate::model::DataSet;
use std::io::Read;

/// Decode a data set document.
///
/// The root element must be the one of `T`'s kind; unknown elements below
/// it are ignored.
pub fn decode<T: DataSet>(data: &[u8]) -> std::result::Result<T, DecodeError> {
    let root = Element::parse(data)?;
    let expected = T::KIND.root_element();
    if root.name() != expected {
        return Err(DecodeError::UnexpectedRoot {
            expected,
            found: root.name().to_string(),
        });
    }
    T::from_element(&root)
}

/// Read the complete content of the entry `name` from `reader`.
pub(crate) fn read_raw(name: &str, mut reader: impl Read, size_hint: u64) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(usize::try_from(size_hint).unwrap_or(0));
    reader.read_to_end(&mut data).map_err(|source| Error::Io {
        entry: name.to_string(),
        source,
    })?;
    Ok(data)
}

/// Decode the already read content of the entry `name`.
pub(crate) fn decode_entry<T: DataSet>(name: &str, data: &[u8]) -> Result<T> {
    decode(data).map_err(|source| Error::Decode {
        entry: name.to_string(),
        source,
    })
}
