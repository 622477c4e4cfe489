//! Process data sets (`processDataSet`).

use super::commons::{AdminInfo, Classification, LangString, Ref};
use super::{DataSet, DataSetKind};
use crate::common::{DecodeError, Element};
use serde::{Deserialize, Serialize};

const INFO: [&str; 2] = ["processInformation", "dataSetInformation"];

/// An ILCD process data set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Process {
    pub info: ProcessInfo,
    /// Type of the quantitative reference (`Reference flow(s)`, ...)
    pub reference_type: String,
    /// Internal IDs of the exchanges declared as reference flows
    pub reference_flow_ids: Vec<i64>,
    pub functional_unit: LangString,
    pub reference_year: Option<i32>,
    pub valid_until: Option<i32>,
    pub location: String,
    /// Unit process, LCI result, ...
    pub process_type: String,
    pub admin: AdminInfo,
    pub exchanges: Vec<Exchange>,
    pub lcia_results: Vec<LciaResult>,
}

/// `processInformation/dataSetInformation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfo {
    pub uuid: String,
    pub name: ProcessName,
    pub synonyms: LangString,
    pub classifications: Vec<Classification>,
    pub comment: LangString,
}

/// The name fields of a process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessName {
    pub base_name: LangString,
    pub treatment: LangString,
    pub mix_and_location: LangString,
    pub functional_unit: LangString,
}

/// An input or output of a process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    /// `dataSetInternalID`
    pub id: i64,
    pub flow: Option<Ref>,
    pub location: String,
    /// `Input` or `Output`
    pub direction: String,
    pub mean_amount: f64,
    pub resulting_amount: f64,
    pub derivation: String,
    pub comment: LangString,
}

impl Exchange {
    #[inline]
    pub fn is_input(&self) -> bool {
        self.direction.eq_ignore_ascii_case("input")
    }
}

/// An impact assessment result attached to a process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LciaResult {
    pub method: Option<Ref>,
    pub mean_amount: f64,
}

impl Process {
    /// Exchanges declared as reference flows, in declaration order.
    ///
    /// Declared IDs without a matching exchange are skipped.
    pub fn reference_flows(&self) -> Vec<&Exchange> {
        self.reference_flow_ids
            .iter()
            .filter_map(|id| self.exchange(*id))
            .collect()
    }

    /// The first declared reference flow, if it exists.
    pub fn reference_flow(&self) -> Option<&Exchange> {
        let id = self.reference_flow_ids.first()?;
        self.exchange(*id)
    }

    /// Exchange with the given internal ID.
    pub fn exchange(&self, id: i64) -> Option<&Exchange> {
        self.exchanges.iter().find(|e| e.id == id)
    }

    /// Base name of the process in `lang`.
    pub fn name(&self, lang: &str) -> &str {
        self.info.name.base_name.get(lang)
    }
}

impl DataSet for Process {
    const KIND: DataSetKind = DataSetKind::Process;

    fn from_element(root: &Element) -> Result<Self, DecodeError> {
        let info = root.find(&INFO);
        let name = info.and_then(|i| i.child("name"));
        let quant_ref = root.find(&["processInformation", "quantitativeReference"]);

        let reference_flow_ids = quant_ref
            .map(|q| {
                q.children_named("referenceToReferenceFlow")
                    .filter_map(|e| e.parse_text().transpose())
                    .collect::<Result<Vec<i64>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        let exchanges: Vec<Exchange> = root
            .find_all(&["exchanges", "exchange"])
            .into_iter()
            .map(|e| -> Result<Exchange, DecodeError> {
                Ok(Exchange {
                    id: e.parse_attr("dataSetInternalID")?.unwrap_or(0),
                    flow: Ref::at(e, &["referenceToFlowDataSet"]),
                    location: e.text_at(&["location"]),
                    direction: e.text_at(&["exchangeDirection"]),
                    mean_amount: e.parse_at(&["meanAmount"])?.unwrap_or(0.0),
                    resulting_amount: e.parse_at(&["resultingAmount"])?.unwrap_or(0.0),
                    derivation: e.text_at(&["dataDerivationTypeStatus"]),
                    comment: LangString::from_children(e, "generalComment"),
                })
            })
            .collect::<Result<_, _>>()?;

        let lcia_results: Vec<LciaResult> = root
            .find_all(&["LCIAResults", "LCIAResult"])
            .into_iter()
            .map(|e| -> Result<LciaResult, DecodeError> {
                Ok(LciaResult {
                    method: Ref::at(e, &["referenceToLCIAMethodDataSet"]),
                    mean_amount: e.parse_at(&["meanAmount"])?.unwrap_or(0.0),
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            info: ProcessInfo {
                uuid: root.text_at(&[INFO[0], INFO[1], "UUID"]),
                name: ProcessName {
                    base_name: LangString::from_children_of(name, "baseName"),
                    treatment: LangString::from_children_of(name, "treatmentStandardsRoutes"),
                    mix_and_location: LangString::from_children_of(name, "mixAndLocationTypes"),
                    functional_unit: LangString::from_children_of(name, "functionalUnitFlowProperties"),
                },
                synonyms: LangString::from_children_of(info, "synonyms"),
                classifications: Classification::all_of(info)?,
                comment: LangString::from_children_of(info, "generalComment"),
            },
            reference_type: quant_ref
                .and_then(|q| q.attr("type"))
                .unwrap_or_default()
                .to_string(),
            reference_flow_ids,
            functional_unit: LangString::from_children_of(quant_ref, "functionalUnitOrOther"),
            reference_year: root.parse_at(&["processInformation", "time", "referenceYear"])?,
            valid_until: root.parse_at(&["processInformation", "time", "dataSetValidUntil"])?,
            location: root.attr_at(
                &["processInformation", "geography", "locationOfOperationSupplyOrProduction"],
                "location",
            ),
            process_type: root.text_at(&[
                "modellingAndValidation",
                "LCIMethodAndAllocation",
                "typeOfDataSet",
            ]),
            admin: AdminInfo::from_root(root),
            exchanges,
            lcia_results,
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
        self.exchanges
            .iter()
            .filter_map(|e| e.flow.as_ref())
            .chain(self.lcia_results.iter().filter_map(|r| r.method.as_ref()))
            .chain(self.admin.references())
            .collect()
    }
}
