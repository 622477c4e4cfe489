//! Source data sets (`sourceDataSet`).

use super::commons::{AdminInfo, Classification, LangString, Ref};
use super::{DataSet, DataSetKind};
use crate::common::{DecodeError, Element};
use serde::{Deserialize, Serialize};

const INFO: [&str; 2] = ["sourceInformation", "dataSetInformation"];

/// An ILCD source data set: literature, databases, data set formats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub info: SourceInfo,
    pub admin: AdminInfo,
}

/// `sourceInformation/dataSetInformation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub uuid: String,
    pub short_name: LangString,
    pub classifications: Vec<Classification>,
    pub citation: String,
    pub publication_type: String,
    pub description: LangString,
    /// `uri` attributes of `referenceToDigitalFile`
    pub files: Vec<String>,
    pub contacts: Vec<Ref>,
}

impl Source {
    /// Short name of the source in `lang`.
    pub fn name(&self, lang: &str) -> &str {
        self.info.short_name.get(lang)
    }
}

impl DataSet for Source {
    const KIND: DataSetKind = DataSetKind::Source;

    fn from_element(root: &Element) -> Result<Self, DecodeError> {
        let info = root.find(&INFO);
        Ok(Self {
            info: SourceInfo {
                uuid: root.text_at(&[INFO[0], INFO[1], "UUID"]),
                short_name: LangString::from_children_of(info, "shortName"),
                classifications: Classification::all_of(info)?,
                citation: info.map(|i| i.text_at(&["sourceCitation"])).unwrap_or_default(),
                publication_type: info.map(|i| i.text_at(&["publicationType"])).unwrap_or_default(),
                description: LangString::from_children_of(info, "sourceDescriptionOrComment"),
                files: info
                    .map(|i| {
                        i.children_named("referenceToDigitalFile")
                            .filter_map(|f| f.attr("uri"))
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default(),
                contacts: info
                    .map(|i| Ref::all_at(i, &["referenceToContact"]))
                    .unwrap_or_default(),
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
        self.info.contacts.iter().chain(self.admin.references()).collect()
    }
}
