//! Contact data sets (`contactDataSet`).

use super::commons::{AdminInfo, Classification, LangString, Ref};
use super::{DataSet, DataSetKind};
use crate::common::{DecodeError, Element};
use serde::{Deserialize, Serialize};

const INFO: [&str; 2] = ["contactInformation", "dataSetInformation"];

/// An ILCD contact data set: a person or organisation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub info: ContactInfo,
    pub admin: AdminInfo,
}

/// `contactInformation/dataSetInformation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub uuid: String,
    pub short_name: LangString,
    pub name: LangString,
    pub classifications: Vec<Classification>,
    pub address: LangString,
    pub telephone: String,
    pub telefax: String,
    pub email: String,
    pub www: String,
    pub description: LangString,
}

impl Contact {
    /// Name of the contact in `lang`.
    pub fn name(&self, lang: &str) -> &str {
        self.info.name.get(lang)
    }
}

impl DataSet for Contact {
    const KIND: DataSetKind = DataSetKind::Contact;

    fn from_element(root: &Element) -> Result<Self, DecodeError> {
        let info = root.find(&INFO);
        let text = |name: &str| info.map(|i| i.text_at(&[name])).unwrap_or_default();
        Ok(Self {
            info: ContactInfo {
                uuid: root.text_at(&[INFO[0], INFO[1], "UUID"]),
                short_name: LangString::from_children_of(info, "shortName"),
                name: LangString::from_children_of(info, "name"),
                classifications: Classification::all_of(info)?,
                address: LangString::from_children_of(info, "contactAddress"),
                telephone: text("telephone"),
                telefax: text("telefax"),
                email: text("email"),
                www: text("WWWAddress"),
                description: LangString::from_children_of(info, "contactDescriptionOrComment"),
            },
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
        self.admin.references().collect()
    }
}
