//! Flow property data sets (`flowPropertyDataSet`).

use super::commons::{AdminInfo, Classification, LangString, Ref};
use super::{DataSet, DataSetKind};
use crate::common::{DecodeError, Element};
use serde::{Deserialize, Serialize};

const INFO: [&str; 2] = ["flowPropertiesInformation", "dataSetInformation"];

/// An ILCD flow property data set, e.g. mass or net calorific value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowProperty {
    pub info: FlowPropertyInfo,
    /// Unit group in which amounts of this property are expressed
    pub unit_group: Option<Ref>,
    pub admin: AdminInfo,
}

/// `flowPropertiesInformation/dataSetInformation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowPropertyInfo {
    pub uuid: String,
    pub name: LangString,
    pub synonyms: LangString,
    pub classifications: Vec<Classification>,
    pub comment: LangString,
}

impl FlowProperty {
    /// Reference to the unit group of this flow property.
    pub fn reference_unit_group(&self) -> Option<&Ref> {
        self.unit_group.as_ref()
    }

    pub fn name(&self, lang: &str) -> &str {
        self.info.name.get(lang)
    }
}

impl DataSet for FlowProperty {
    const KIND: DataSetKind = DataSetKind::FlowProperty;

    fn from_element(root: &Element) -> Result<Self, DecodeError> {
        let info = root.find(&INFO);
        Ok(Self {
            info: FlowPropertyInfo {
                uuid: root.text_at(&[INFO[0], INFO[1], "UUID"]),
                name: LangString::from_children_of(info, "name"),
                synonyms: LangString::from_children_of(info, "synonyms"),
                classifications: Classification::all_of(info)?,
                comment: LangString::from_children_of(info, "generalComment"),
            },
            unit_group: Ref::at(
                root,
                &[
                    "flowPropertiesInformation",
                    "quantitativeReference",
                    "referenceToReferenceUnitGroup",
                ],
            ),
            admin: AdminInfo::from_root(root),
        })
    }

    fn uuid(&self) -> &str {
        &self.info.uuid
    }

    fn classifications(&self) -> &[Classification] {
        &self.info.classifications
    }

    fn admin(&self) -> &AdminInfo {
        &self.admin
    }

    fn references(&self) -> Vec<&Ref> {
        self.unit_group.iter().chain(self.admin.references()).collect()
    }
}
