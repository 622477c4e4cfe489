//! Flow data sets (`flowDataSet`).

use super::commons::{AdminInfo, Classification, LangString, Ref};
use super::{DataSet, DataSetKind};
use crate::common::{DecodeError, Element};
use serde::{Deserialize, Serialize};

const INFO: [&str; 2] = ["flowInformation", "dataSetInformation"];

/// An ILCD flow data set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    pub info: FlowInfo,
    /// Internal ID of the flow property used for unit conversion
    pub reference_flow_property_id: Option<i64>,
    pub location: String,
    /// Elementary flow, product flow, waste flow, ...
    pub flow_type: String,
    pub admin: AdminInfo,
    pub flow_properties: Vec<FlowPropertyRef>,
}

/// `flowInformation/dataSetInformation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowInfo {
    pub uuid: String,
    pub name: FlowName,
    pub synonyms: LangString,
    pub classifications: Vec<Classification>,
    /// Compartment categories of elementary flows
    pub categorizations: Vec<Classification>,
    pub cas: String,
    pub comment: LangString,
}

/// The name fields of a flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowName {
    pub base_name: LangString,
    pub treatment: LangString,
    pub mix_and_location: LangString,
    pub properties: LangString,
}

impl FlowName {
    /// Non-empty name parts for `lang`, joined with `; `.
    pub fn full_name(&self, lang: &str) -> String {
        [
            &self.base_name,
            &self.treatment,
            &self.mix_and_location,
            &self.properties,
        ]
        .iter()
        .map(|part| part.get(lang))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
    }
}

/// A flow property declared by a flow, with its conversion factor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowPropertyRef {
    /// `dataSetInternalID`
    pub id: i64,
    pub flow_property: Option<Ref>,
    pub mean_value: f64,
    pub comment: LangString,
}

impl Flow {
    /// The flow property declared as reference flow property.
    ///
    /// Returns `None` if no declared flow property carries the referenced
    /// internal ID, or if the flow declares none.
    pub fn reference_flow_property(&self) -> Option<&FlowPropertyRef> {
        let id = self.reference_flow_property_id?;
        self.flow_properties.iter().find(|fp| fp.id == id)
    }

    /// Base name of the flow in `lang`.
    pub fn name(&self, lang: &str) -> &str {
        self.info.name.base_name.get(lang)
    }
}

impl DataSet for Flow {
    const KIND: DataSetKind = DataSetKind::Flow;

    fn from_element(root: &Element) -> Result<Self, DecodeError> {
        let info = root.find(&INFO);
        let name = info.and_then(|i| i.child("name"));

        let categorizations: Vec<Classification> = info
            .map(|i| i.find_all(&["classificationInformation", "elementaryFlowCategorization"]))
            .unwrap_or_default()
            .into_iter()
            .map(|e| Classification::from_element(e, "category", "catId"))
            .collect::<Result<_, _>>()?;

        let flow_properties: Vec<FlowPropertyRef> = root
            .find_all(&["flowProperties", "flowProperty"])
            .into_iter()
            .map(|fp| -> Result<FlowPropertyRef, DecodeError> {
                Ok(FlowPropertyRef {
                    id: fp.parse_attr("dataSetInternalID")?.unwrap_or(0),
                    flow_property: Ref::at(fp, &["referenceToFlowPropertyDataSet"]),
                    mean_value: fp.parse_at(&["meanValue"])?.unwrap_or(0.0),
                    comment: LangString::from_children(fp, "generalComment"),
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            info: FlowInfo {
                uuid: root.text_at(&[INFO[0], INFO[1], "UUID"]),
                name: FlowName {
                    base_name: LangString::from_children_of(name, "baseName"),
                    treatment: LangString::from_children_of(name, "treatmentStandardsRoutes"),
                    mix_and_location: LangString::from_children_of(name, "mixAndLocationTypes"),
                    properties: LangString::from_children_of(name, "flowProperties"),
                },
                synonyms: LangString::from_children_of(info, "synonyms"),
                classifications: Classification::all_of(info)?,
                categorizations,
                cas: info.map(|i| i.text_at(&["CASNumber"])).unwrap_or_default(),
                comment: LangString::from_children_of(info, "generalComment"),
            },
            reference_flow_property_id: root.parse_at(&[
                "flowInformation",
                "quantitativeReference",
                "referenceToReferenceFlowProperty",
            ])?,
            location: root.text_at(&["flowInformation", "geography", "locationOfSupply"]),
            flow_type: root.text_at(&["modellingAndValidation", "LCIMethod", "typeOfDataSet"]),
            admin: AdminInfo::from_root(root),
            flow_properties,
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
        self.flow_properties
            .iter()
            .filter_map(|fp| fp.flow_property.as_ref())
            .chain(self.admin.references())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOW: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<flowDataSet xmlns="http://lca.jrc.it/ILCD/Flow" xmlns:common="http://lca.jrc.it/ILCD/Common" version="1.1">
  <flowInformation>
    <dataSetInformation>
      <common:UUID>08a91e70-3ddc-11dd-923d-0050c2490048</common:UUID>
      <name>
        <baseName xml:lang="en">carbon dioxide</baseName>
        <treatmentStandardsRoutes xml:lang="en">fossil</treatmentStandardsRoutes>
      </name>
      <common:synonyms xml:lang="en">CO2</common:synonyms>
      <classificationInformation>
        <common:elementaryFlowCategorization>
          <common:category level="0" catId="1">Emissions</common:category>
          <common:category level="1" catId="2">Emissions to air</common:category>
        </common:elementaryFlowCategorization>
      </classificationInformation>
      <CASNumber>000124-38-9</CASNumber>
    </dataSetInformation>
    <quantitativeReference>
      <referenceToReferenceFlowProperty>1</referenceToReferenceFlowProperty>
    </quantitativeReference>
  </flowInformation>
  <modellingAndValidation>
    <LCIMethod>
      <typeOfDataSet>Elementary flow</typeOfDataSet>
    </LCIMethod>
  </modellingAndValidation>
  <flowProperties>
    <flowProperty dataSetInternalID="0">
      <referenceToFlowPropertyDataSet type="flow property data set" refObjectId="93a60a56-a3c8-22da-a746-0800200c9a66">
        <common:shortDescription xml:lang="en">Volume</common:shortDescription>
      </referenceToFlowPropertyDataSet>
      <meanValue>0.5</meanValue>
    </flowProperty>
    <flowProperty dataSetInternalID="1">
      <referenceToFlowPropertyDataSet type="flow property data set" refObjectId="93a60a56-a3c8-11da-a746-0800200b9a66">
        <common:shortDescription xml:lang="en">Mass</common:shortDescription>
      </referenceToFlowPropertyDataSet>
      <meanValue>1.0</meanValue>
    </flowProperty>
  </flowProperties>
</flowDataSet>"#;

    fn parse(xml: &str) -> Flow {
        Flow::from_element(&Element::parse(xml.as_bytes()).unwrap()).unwrap()
    }

    #[test]
    fn test_flow_fields() {
        let flow = parse(FLOW);
        assert_eq!(flow.uuid(), "08a91e70-3ddc-11dd-923d-0050c2490048");
        assert_eq!(flow.name("en"), "carbon dioxide");
        assert_eq!(flow.info.name.full_name("en"), "carbon dioxide; fossil");
        assert_eq!(flow.info.synonyms.get("en"), "CO2");
        assert_eq!(flow.info.cas, "000124-38-9");
        assert_eq!(flow.flow_type, "Elementary flow");
        assert!(flow.classifications().is_empty());
        assert_eq!(flow.info.categorizations.len(), 1);
        assert_eq!(
            flow.info.categorizations[0].get_class(1).map(|c| c.name.as_str()),
            Some("Emissions to air")
        );
        assert_eq!(flow.references().len(), 2);
    }

    #[test]
    fn test_reference_flow_property() {
        let flow = parse(FLOW);
        let fp = flow.reference_flow_property().unwrap();
        assert_eq!(fp.id, 1);
        assert_eq!(fp.mean_value, 1.0);
        let r = fp.flow_property.as_ref().unwrap();
        assert_eq!(r.uuid, "93a60a56-a3c8-11da-a746-0800200b9a66");
        assert_eq!(r.name.get("en"), "Mass");
    }

    #[test]
    fn test_reference_flow_property_absent() {
        let flow = parse(&FLOW.replace(
            "<referenceToReferenceFlowProperty>1<",
            "<referenceToReferenceFlowProperty>7<",
        ));
        assert!(flow.reference_flow_property().is_none());

        let empty = parse("<flowDataSet/>");
        assert!(empty.reference_flow_property().is_none());
        assert_eq!(empty.uuid(), "");
        assert_eq!(empty.name("en"), "");
    }

    #[test]
    fn test_internal_id_beyond_32_bits() {
        let flow = parse(
            &FLOW
                .replace(
                    "<referenceToReferenceFlowProperty>1<",
                    "<referenceToReferenceFlowProperty>3000000000<",
                )
                .replace("dataSetInternalID=\"1\"", "dataSetInternalID=\"3000000000\""),
        );
        assert_eq!(flow.reference_flow_property_id, Some(3_000_000_000));
        let fp = flow.reference_flow_property().unwrap();
        assert_eq!(fp.id, 3_000_000_000);
        assert_eq!(fp.mean_value, 1.0);
    }

    #[test]
    fn test_invalid_internal_id() {
        let xml = FLOW.replace("dataSetInternalID=\"0\"", "dataSetInternalID=\"zero\"");
        let result = Flow::from_element(&Element::parse(xml.as_bytes()).unwrap());
        assert!(matches!(result, Err(DecodeError::InvalidValue { .. })));
    }
}
