//! ilcd - A Rust library for reading ILCD life cycle inventory packages
//!
//! ILCD packages are zip archives with one XML document per data set:
//! processes, flows, flow properties, unit groups, sources, contacts and
//! LCIA methods, each identified by a UUID in its file name.
//!
//! # Features
//!
//! - **Typed access**: Fetch a data set by UUID and decode it into the model
//! - **Raw access**: Fetch the unchanged document bytes of a data set
//! - **Streaming**: Visit all data sets of a type without loading the whole
//!   package, stopping whenever the visitor asks to
//! - **Shared sub-documents**: Multi-language strings, references and
//!   classifications with accessors that tolerate missing content
//!
//! # Example - Reading a flow
//!
//! ```no_run
//! use ilcd::package::ZipReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = ZipReader::open("package.zip")?;
//! let flow = reader.get_flow("08a91e70-3ddc-11dd-923d-0050c2490048")?;
//!
//! if let Some(fp) = flow.reference_flow_property() {
//!     println!("reference flow property: {:?}", fp.flow_property);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Visiting all processes
//!
//! ```no_run
//! use ilcd::model::DataSet;
//! use ilcd::package::{Visit, ZipReader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = ZipReader::open("package.zip")?;
//! let mut count = 0;
//! reader.each_process(|process| {
//!     println!("{} {}", process.uuid(), process.name("en"));
//!     count += 1;
//!     if count == 10 { Visit::Stop } else { Visit::Continue }
//! })?;
//! # Ok(())
//! # }
//! ```

/// Error types and the XML element tree
pub mod common;

/// Data set model: entity types and shared sub-documents
pub mod model;

/// Package reader: path classification, decoding and lookups
pub mod package;

// Re-export commonly used types for convenience
pub use common::{DecodeError, Error, Result};
pub use model::{
    Class, Classification, Contact, DataSet, DataSetKind, Flow, FlowProperty, LangString, Method,
    Process, Ref, Source, UnitGroup,
};
pub use package::{LookupStrategy, ReaderOptions, Visit, ZipReader};
