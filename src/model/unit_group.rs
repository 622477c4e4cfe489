//! Unit group data sets (`unitGroupDataSet`).

use super::commons::{AdminInfo, Classification, LangString, Ref};
use super::{DataSet, DataSetKind};
use crate::common::{DecodeError, Element};
use serde::{Deserialize, Serialize};

const INFO: [&str; 2] = ["unitGroupInformation", "dataSetInformation"];

/// An ILCD unit group data set, e.g. units of mass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitGroup {
    pub info: UnitGroupInfo,
    /// Internal ID of the reference unit
    pub reference_unit_id: Option<i64>,
    pub admin: AdminInfo,
    pub units: Vec<Unit>,
}

/// `unitGroupInformation/dataSetInformation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitGroupInfo {
    pub uuid: String,
    pub name: LangString,
    pub classifications: Vec<Classification>,
    pub comment: LangString,
}

/// A unit with its conversion factor to the reference unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// `dataSetInternalID`
    pub id: i64,
    pub name: String,
    pub mean_value: f64,
    pub comment: LangString,
}

impl UnitGroup {
    /// The unit declared as reference unit, if it exists.
    pub fn reference_unit(&self) -> Option<&Unit> {
        let id = self.reference_unit_id?;
        self.units.iter().find(|u| u.id == id)
    }

    /// First unit with the given name.
    pub fn unit(&self, name: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.name == name)
    }

    pub fn name(&self, lang: &str) -> &str {
        self.info.name.get(lang)
    }
}

impl DataSet for UnitGroup {
    const KIND: DataSetKind = DataSetKind::UnitGroup;

    fn from_element(root: &Element) -> Result<Self, DecodeError> {
        let info = root.find(&INFO);
        let units: Vec<Unit> = root
            .find_all(&["units", "unit"])
            .into_iter()
            .map(|u| -> Result<Unit, DecodeError> {
                Ok(Unit {
                    id: u.parse_attr("dataSetInternalID")?.unwrap_or(0),
                    name: u.text_at(&["name"]),
                    mean_value: u.parse_at(&["meanValue"])?.unwrap_or(0.0),
                    comment: LangString::from_children(u, "generalComment"),
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            info: UnitGroupInfo {
                uuid: root.text_at(&[INFO[0], INFO[1], "UUID"]),
                name: LangString::from_children_of(info, "name"),
                classifications: Classification::all_of(info)?,
                comment: LangString::from_children_of(info, "generalComment"),
            },
            reference_unit_id: root.parse_at(&[
                "unitGroupInformation",
                "quantitativeReference",
                "referenceToReferenceUnit",
            ])?,
            admin: AdminInfo::from_root(root),
            units,
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

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT_GROUP: &str = r#"<unitGroupDataSet xmlns:common="http://lca.jrc.it/ILCD/Common">
      <unitGroupInformation>
        <dataSetInformation>
          <common:UUID>93a60a57-a4c8-11da-a746-0800200c9a66</common:UUID>
          <common:name xml:lang="en">Units of mass</common:name>
        </dataSetInformation>
        <quantitativeReference>
          <referenceToReferenceUnit>1</referenceToReferenceUnit>
        </quantitativeReference>
      </unitGroupInformation>
      <units>
        <unit dataSetInternalID="0"><name>g</name><meanValue>0.001</meanValue></unit>
        <unit dataSetInternalID="1"><name>kg</name><meanValue>1.0</meanValue></unit>
        <unit dataSetInternalID="2"><name>t</name><meanValue>1000.0</meanValue></unit>
      </units>
    </unitGroupDataSet>"#;

    #[test]
    fn test_reference_unit() {
        let ug = UnitGroup::from_element(&Element::parse(UNIT_GROUP.as_bytes()).unwrap()).unwrap();
        assert_eq!(ug.name("en"), "Units of mass");
        assert_eq!(ug.units.len(), 3);
        assert_eq!(ug.reference_unit().map(|u| u.name.as_str()), Some("kg"));
        assert_eq!(ug.unit("t").map(|u| u.mean_value), Some(1000.0));
    }

    #[test]
    fn test_reference_unit_missing() {
        let xml = UNIT_GROUP.replace("<referenceToReferenceUnit>1<", "<referenceToReferenceUnit>5<");
        let ug = UnitGroup::from_element(&Element::parse(xml.as_bytes()).unwrap()).unwrap();
        assert!(ug.reference_unit().is_none());
    }
}
