//! ILCD package access.
//!
//! An ILCD package is a zip archive holding one XML document per data set.
//! The type of a data set is derived from its entry path ([`path`]), the
//! document is decoded into the model ([`decode`]), and [`ZipReader`] ties
//! both together into lookups by UUID and enumerations per type.
//!
//! # Implementation Notes
//!
//! - Entry lookup is a linear scan of the directory listing by default;
//!   [`LookupStrategy::Indexed`] groups entries per type at open time and
//!   returns the same entries in the same order.
//! - A UUID matches any entry of the requested type whose path contains it.
//!   The first matching entry in archive order wins.
//! - Enumerations abort at the first entry that fails to read or decode.

mod config;
pub mod decode;
pub mod path;
mod reader;

pub use config::{LookupStrategy, ReaderOptions};
pub use decode::decode;
pub use reader::{Visit, ZipReader};
