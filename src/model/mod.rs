//! ILCD data set model.
//!
//! Every entity type of an ILCD package implements [`DataSet`]: it knows its
//! [`DataSetKind`] (folder token, root element and reference type tag) and
//! binds its fields from a parsed [`Element`] tree. The sub-documents shared
//! by all entity types live in [`commons`].

pub mod commons;
mod contact;
mod flow;
mod flow_property;
mod method;
mod process;
mod source;
mod unit_group;

pub use commons::{AdminInfo, Class, Classification, DataEntry, LangString, LangStringItem, Publication, Ref};
pub use contact::{Contact, ContactInfo};
pub use flow::{Flow, FlowInfo, FlowName, FlowPropertyRef};
pub use flow_property::{FlowProperty, FlowPropertyInfo};
pub use method::{CharacterisationFactor, Method, MethodInfo};
pub use process::{Exchange, LciaResult, Process, ProcessInfo, ProcessName};
pub use source::{Source, SourceInfo};
pub use unit_group::{Unit, UnitGroup, UnitGroupInfo};

use crate::common::{DecodeError, Element};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The entity types an ILCD package can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataSetKind {
    Process,
    Flow,
    FlowProperty,
    UnitGroup,
    Source,
    Contact,
    Method,
}

impl DataSetKind {
    /// All kinds, in a fixed order.
    pub const ALL: [DataSetKind; 7] = [
        DataSetKind::Process,
        DataSetKind::Flow,
        DataSetKind::FlowProperty,
        DataSetKind::UnitGroup,
        DataSetKind::Source,
        DataSetKind::Contact,
        DataSetKind::Method,
    ];

    /// Folder token that marks entries of this kind in a package path.
    pub const fn folder(self) -> &'static str {
        match self {
            DataSetKind::Process => "processes",
            DataSetKind::Flow => "flows",
            DataSetKind::FlowProperty => "flowproperties",
            DataSetKind::UnitGroup => "unitgroups",
            DataSetKind::Source => "sources",
            DataSetKind::Contact => "contacts",
            DataSetKind::Method => "methods",
        }
    }

    /// Local name of the document's root element.
    pub const fn root_element(self) -> &'static str {
        match self {
            DataSetKind::Process => "processDataSet",
            DataSetKind::Flow => "flowDataSet",
            DataSetKind::FlowProperty => "flowPropertyDataSet",
            DataSetKind::UnitGroup => "unitGroupDataSet",
            DataSetKind::Source => "sourceDataSet",
            DataSetKind::Contact => "contactDataSet",
            DataSetKind::Method => "LCIAMethodDataSet",
        }
    }

    /// Value of the `type` attribute of a reference pointing to this kind.
    pub const fn type_tag(self) -> &'static str {
        match self {
            DataSetKind::Process => "process data set",
            DataSetKind::Flow => "flow data set",
            DataSetKind::FlowProperty => "flow property data set",
            DataSetKind::UnitGroup => "unit group data set",
            DataSetKind::Source => "source data set",
            DataSetKind::Contact => "contact data set",
            DataSetKind::Method => "LCIA method data set",
        }
    }

    /// Kind for a reference `type` attribute value.
    pub fn from_type_tag(tag: &str) -> Option<DataSetKind> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.type_tag().eq_ignore_ascii_case(tag.trim()))
    }
}

impl fmt::Display for DataSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_tag())
    }
}

/// Capability shared by all entity types of an ILCD package.
pub trait DataSet: Sized {
    /// The entity type implemented by `Self`.
    const KIND: DataSetKind;

    /// Bind the fields of `Self` from a document's root element.
    ///
    /// The root element name has already been checked against
    /// [`DataSetKind::root_element`]. Unknown elements are ignored.
    fn from_element(root: &Element) -> Result<Self, DecodeError>;

    /// UUID of the data set.
    fn uuid(&self) -> &str;

    /// Classifications of the data set.
    fn classifications(&self) -> &[Classification];

    /// Administrative information.
    fn admin(&self) -> &AdminInfo;

    /// All outgoing references of the data set, in document order.
    fn references(&self) -> Vec<&Ref>;

    /// Version of the data set, or an empty string if not declared.
    fn version(&self) -> &str {
        self.admin().version()
    }
}
