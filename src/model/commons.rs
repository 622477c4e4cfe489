//! Sub-documents shared by all data set types.
//!
//! Multi-language strings, data set references, classifications and the
//! administrative blocks appear in the same shape in every ILCD document.
//! All accessors tolerate missing content and return empty values instead.

use super::DataSetKind;
use crate::common::{DecodeError, Element};
use serde::{Deserialize, Serialize};

/// One language variant of a multi-language string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangStringItem {
    pub lang: String,
    pub value: String,
}

/// An ILCD multi-language string: ordered `(language, text)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangString(pub Vec<LangStringItem>);

impl LangString {
    /// Collect the language variants of all `name` children of `parent`.
    pub(crate) fn from_children(parent: &Element, name: &str) -> Self {
        Self(
            parent
                .children_named(name)
                .map(|e| LangStringItem {
                    lang: e.attr("lang").unwrap_or_default().to_string(),
                    value: e.raw_text().to_string(),
                })
                .collect(),
        )
    }

    /// Like [`from_children`](Self::from_children), for an optional parent.
    pub(crate) fn from_children_of(parent: Option<&Element>, name: &str) -> Self {
        parent
            .map(|p| Self::from_children(p, name))
            .unwrap_or_default()
    }

    /// Text for the language code `lang`, or an empty string.
    ///
    /// If a language occurs more than once, the first occurrence wins.
    pub fn get(&self, lang: &str) -> &str {
        self.0
            .iter()
            .find(|item| item.lang == lang)
            .map(|item| item.value.as_str())
            .unwrap_or_default()
    }

    /// Text for `lang`, falling back to the first variant.
    pub fn get_or_first(&self, lang: &str) -> &str {
        match self.get(lang) {
            "" => self.0.first().map(|i| i.value.as_str()).unwrap_or_default(),
            text => text,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LangStringItem> {
        self.0.iter()
    }
}

/// Reference to another data set, in this or another package.
///
/// A reference is plain data; resolving it is left to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ref {
    /// UUID of the referenced data set (`refObjectId`)
    pub uuid: String,
    /// Type tag, e.g. `flow data set`
    pub data_set_type: String,
    pub uri: String,
    pub version: String,
    /// Display name (`shortDescription`)
    pub name: LangString,
}

impl Ref {
    pub(crate) fn from_element(e: &Element) -> Self {
        Self {
            uuid: e.attr("refObjectId").unwrap_or_default().trim().to_string(),
            data_set_type: e.attr("type").unwrap_or_default().to_string(),
            uri: e.attr("uri").unwrap_or_default().to_string(),
            version: e.attr("version").unwrap_or_default().to_string(),
            name: LangString::from_children(e, "shortDescription"),
        }
    }

    /// Reference at `path` below `parent`, if present.
    pub(crate) fn at(parent: &Element, path: &[&str]) -> Option<Self> {
        parent.find(path).map(Self::from_element)
    }

    /// All references reachable by `path` below `parent`.
    pub(crate) fn all_at(parent: &Element, path: &[&str]) -> Vec<Self> {
        parent
            .find_all(path)
            .into_iter()
            .map(Self::from_element)
            .collect()
    }

    /// Kind of the referenced data set, if the type tag is known.
    pub fn kind(&self) -> Option<DataSetKind> {
        DataSetKind::from_type_tag(&self.data_set_type)
    }
}

/// A category in a classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub level: i32,
    pub id: String,
    pub name: String,
}

/// A classification: a flat list of classes annotated with their level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub name: String,
    pub classes: Vec<Class>,
}

impl Classification {
    /// Parse a `classification` (class nodes carry `classId`) or an
    /// `elementaryFlowCategorization` (category nodes carry `catId`).
    pub(crate) fn from_element(e: &Element, node: &str, id_attr: &str) -> Result<Self, DecodeError> {
        let classes: Vec<Class> = e
            .children_named(node)
            .map(|c| -> Result<Class, DecodeError> {
                Ok(Class {
                    level: c.parse_attr("level")?.unwrap_or(0),
                    id: c.attr(id_attr).unwrap_or_default().to_string(),
                    name: c.text().to_string(),
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self {
            name: e.attr("name").unwrap_or_default().to_string(),
            classes,
        })
    }

    /// All `classificationInformation/classification` blocks of `info`.
    pub(crate) fn all_of(info: Option<&Element>) -> Result<Vec<Self>, DecodeError> {
        let Some(info) = info else {
            return Ok(Vec::new());
        };
        info.find_all(&["classificationInformation", "classification"])
            .into_iter()
            .map(|e| Self::from_element(e, "class", "classId"))
            .collect()
    }

    /// First class with exactly the given level.
    pub fn get_class(&self, level: i32) -> Option<&Class> {
        self.classes.iter().find(|c| c.level == level)
    }

    /// Class names ordered by level, joined with `/`.
    pub fn path(&self) -> String {
        let mut classes: Vec<&Class> = self.classes.iter().collect();
        classes.sort_by_key(|c| c.level);
        classes
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// `dataEntryBy` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEntry {
    pub time_stamp: String,
    pub data_formats: Vec<Ref>,
}

/// `publicationAndOwnership` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub version: String,
    pub uri: String,
    pub owner: Option<Ref>,
}

/// `administrativeInformation` of a data set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminInfo {
    pub data_entry: Option<DataEntry>,
    pub publication: Option<Publication>,
}

impl AdminInfo {
    pub(crate) fn from_root(root: &Element) -> Self {
        let Some(admin) = root.child("administrativeInformation") else {
            return Self::default();
        };
        let data_entry = admin.child("dataEntryBy").map(|e| DataEntry {
            time_stamp: e.text_at(&["timeStamp"]),
            data_formats: Ref::all_at(e, &["referenceToDataSetFormat"]),
        });
        let publication = admin.child("publicationAndOwnership").map(|e| Publication {
            version: e.text_at(&["dataSetVersion"]),
            uri: e.text_at(&["permanentDataSetURI"]),
            owner: Ref::at(e, &["referenceToOwnershipOfDataSet"]),
        });
        Self {
            data_entry,
            publication,
        }
    }

    /// Declared data set version, or an empty string.
    pub fn version(&self) -> &str {
        self.publication
            .as_ref()
            .map(|p| p.version.as_str())
            .unwrap_or_default()
    }

    /// Declared time stamp, or an empty string.
    pub fn time_stamp(&self) -> &str {
        self.data_entry
            .as_ref()
            .map(|d| d.time_stamp.as_str())
            .unwrap_or_default()
    }

    /// References held by the administrative blocks.
    pub(crate) fn references(&self) -> impl Iterator<Item = &Ref> {
        self.data_entry
            .iter()
            .flat_map(|d| d.data_formats.iter())
            .chain(self.publication.iter().filter_map(|p| p.owner.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(lang: &str, value: &str) -> LangStringItem {
        LangStringItem {
            lang: lang.to_string(),
            value: value.to_string(),
        }
    }

    fn class(level: i32, id: &str, name: &str) -> Class {
        Class {
            level,
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_lang_string_get() {
        let s = LangString(vec![item("en", "water"), item("de", "Wasser"), item("en", "H2O")]);
        assert_eq!(s.get("en"), "water");
        assert_eq!(s.get("de"), "Wasser");
        assert_eq!(s.get("fr"), "");
        assert_eq!(s.get_or_first("fr"), "water");
        assert_eq!(LangString::default().get("en"), "");
        assert_eq!(LangString::default().get_or_first("en"), "");
    }

    #[test]
    fn test_lang_string_keeps_text_as_written() {
        let xml = br#"<dataSetInformation xmlns:common="c">
            <common:generalComment xml:lang="en">  two spaces in, one out </common:generalComment>
            <common:generalComment xml:lang="de">
line one
</common:generalComment>
        </dataSetInformation>"#;
        let s = LangString::from_children(&Element::parse(xml).unwrap(), "generalComment");
        assert_eq!(s.get("en"), "  two spaces in, one out ");
        assert_eq!(s.get("de"), "\nline one\n");
    }

    #[test]
    fn test_ref_from_element() {
        let xml = br#"<referenceToFlowPropertyDataSet xmlns:common="c" type="flow property data set"
            refObjectId="93a60a56-a3c8-11da-a746-0800200b9a66" uri="../flowproperties/93a60a56.xml" version="03.00.003">
            <common:shortDescription xml:lang="en">Mass</common:shortDescription>
        </referenceToFlowPropertyDataSet>"#;
        let r = Ref::from_element(&Element::parse(xml).unwrap());
        assert_eq!(r.uuid, "93a60a56-a3c8-11da-a746-0800200b9a66");
        assert_eq!(r.kind(), Some(DataSetKind::FlowProperty));
        assert_eq!(r.uri, "../flowproperties/93a60a56.xml");
        assert_eq!(r.version, "03.00.003");
        assert_eq!(r.name.get("en"), "Mass");
    }

    #[test]
    fn test_classification_from_element() {
        let xml = br#"<classification name="ILCD">
            <class level="0" classId="a">Materials production</class>
            <class level="1" classId="b">Metals</class>
        </classification>"#;
        let c = Classification::from_element(&Element::parse(xml).unwrap(), "class", "classId").unwrap();
        assert_eq!(c.name, "ILCD");
        assert_eq!(c.get_class(1), Some(&class(1, "b", "Metals")));
        assert_eq!(c.get_class(2), None);
        assert_eq!(c.path(), "Materials production/Metals");

        let bad = br#"<classification><class level="x">A</class></classification>"#;
        assert!(Classification::from_element(&Element::parse(bad).unwrap(), "class", "classId").is_err());
    }

    #[test]
    fn test_get_class_first_wins() {
        let c = Classification {
            name: String::new(),
            classes: vec![class(0, "a", "A"), class(1, "b", "B"), class(1, "c", "C")],
        };
        assert_eq!(c.get_class(1).map(|c| c.id.as_str()), Some("b"));
        assert_eq!(Classification::default().get_class(0), None);
    }

    #[test]
    fn test_admin_info() {
        let xml = br#"<flowDataSet><administrativeInformation>
            <dataEntryBy>
                <common:timeStamp>2020-01-01T00:00:00</common:timeStamp>
                <common:referenceToDataSetFormat refObjectId="f1" type="source data set"/>
            </dataEntryBy>
            <publicationAndOwnership>
                <common:dataSetVersion>01.00.000</common:dataSetVersion>
                <common:permanentDataSetURI>http://example.com/ds</common:permanentDataSetURI>
                <common:referenceToOwnershipOfDataSet refObjectId="c1" type="contact data set"/>
            </publicationAndOwnership>
        </administrativeInformation></flowDataSet>"#;
        let admin = AdminInfo::from_root(&Element::parse(xml).unwrap());
        assert_eq!(admin.version(), "01.00.000");
        assert_eq!(admin.time_stamp(), "2020-01-01T00:00:00");
        let refs: Vec<_> = admin.references().map(|r| r.uuid.as_str()).collect();
        assert_eq!(refs, vec!["f1", "c1"]);

        let empty = AdminInfo::from_root(&Element::parse(b"<flowDataSet/>").unwrap());
        assert_eq!(empty.version(), "");
        assert_eq!(empty.references().count(), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_lang_string_distinct_languages(
            entries in prop::collection::btree_map("[a-z]{2}", "[^\\s]{1,12}", 0..6),
            wanted in "[a-z]{2}",
        ) {
            let s = LangString(entries.iter().map(|(l, v)| item(l, v)).collect());
            for (lang, value) in &entries {
                prop_assert_eq!(s.get(lang), value.as_str());
            }
            let expected = entries.get(&wanted).map(String::as_str).unwrap_or("");
            prop_assert_eq!(s.get(&wanted), expected);
        }

        #[test]
        fn prop_get_class_returns_first_with_level(
            levels in prop::collection::vec(0i32..4, 0..10),
            level in 0i32..5,
        ) {
            let c = Classification {
                name: String::new(),
                classes: levels.iter().enumerate().map(|(i, l)| class(*l, &i.to_string(), "x")).collect(),
            };
            let expected = levels.iter().position(|l| *l == level).map(|i| i.to_string());
            prop_assert_eq!(c.get_class(level).map(|c| c.id.clone()), expected);
        }
    }
}
