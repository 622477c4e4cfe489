//! LCIA method data sets (`LCIAMethodDataSet`).

use super::commons::{AdminInfo, Classification, LangString, Ref};
use super::{DataSet, DataSetKind};
use crate::common::{DecodeError, Element};
use serde::{Deserialize, Serialize};

const INFO: [&str; 2] = ["LCIAMethodInformation", "dataSetInformation"];

/// An ILCD impact assessment method data set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub info: MethodInfo,
    /// Flow property in which the indicator is expressed
    pub reference_quantity: Option<Ref>,
    pub reference_year: String,
    pub admin: AdminInfo,
    pub factors: Vec<CharacterisationFactor>,
}

/// `LCIAMethodInformation/dataSetInformation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInfo {
    pub uuid: String,
    pub name: LangString,
    pub methodologies: Vec<String>,
    pub impact_categories: Vec<String>,
    pub impact_indicator: String,
    pub classifications: Vec<Classification>,
    pub comment: LangString,
}

/// Characterisation factor of an elementary flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterisationFactor {
    pub flow: Option<Ref>,
    pub direction: String,
    pub mean_value: f64,
    pub location: String,
}

impl Method {
    pub fn name(&self, lang: &str) -> &str {
        self.info.name.get(lang)
    }

    /// First characterisation factor for the flow with the given UUID.
    pub fn factor(&self, flow_uuid: &str) -> Option<&CharacterisationFactor> {
        self.factors
            .iter()
            .find(|f| f.flow.as_ref().is_some_and(|r| r.uuid == flow_uuid))
    }
}

impl DataSet for Method {
    const KIND: DataSetKind = DataSetKind::Method;

    fn from_element(root: &Element) -> Result<Self, DecodeError> {
        let info = root.find(&INFO);
        let texts = |name: &str| -> Vec<String> {
            info.map(|i| i.children_named(name).map(|e| e.text().to_string()).collect())
                .unwrap_or_default()
        };

        let factors: Vec<CharacterisationFactor> = root
            .find_all(&["characterisationFactors", "factor"])
            .into_iter()
            .map(|f| -> Result<CharacterisationFactor, DecodeError> {
                Ok(CharacterisationFactor {
                    flow: Ref::at(f, &["referenceToFlowDataSet"]),
                    direction: f.text_at(&["exchangeDirection"]),
                    mean_value: f.parse_at(&["meanValue"])?.unwrap_or(0.0),
                    location: f.text_at(&["location"]),
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            info: MethodInfo {
                uuid: root.text_at(&[INFO[0], INFO[1], "UUID"]),
                name: LangString::from_children_of(info, "name"),
                methodologies: texts("methodology"),
                impact_categories: texts("impactCategory"),
                impact_indicator: info.map(|i| i.text_at(&["impactIndicator"])).unwrap_or_default(),
                classifications: Classification::all_of(info)?,
                comment: LangString::from_children_of(info, "generalComment"),
            },
            reference_quantity: Ref::at(
                root,
                &["LCIAMethodInformation", "quantitativeReference", "referenceQuantity"],
            ),
            reference_year: root.text_at(&["LCIAMethodInformation", "time", "referenceYear"]),
            admin: AdminInfo::from_root(root),
            factors,
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
        self.reference_quantity
            .iter()
            .chain(self.factors.iter().filter_map(|f| f.flow.as_ref()))
            .chain(self.admin.references())
            .collect()
    }
}
