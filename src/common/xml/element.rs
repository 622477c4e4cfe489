//! Lightweight element tree for data set documents.
//!
//! Data set documents are small (a few kilobytes up to a few megabytes for
//! large processes), so each one is parsed once into a tree of [`Element`]s
//! and the model types bind their fields with explicit element paths.
//! Names are stored by local name: namespace prefixes like `common:` or
//! `xml:` are dropped, and namespace declarations are not kept as attributes.

use crate::common::DecodeError;
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use std::str::FromStr;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// An XML element with its attributes, text content and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Parse a complete document and return its root element.
    ///
    /// Anything after the root element is ignored. A document that ends
    /// before its root element is closed is reported as malformed.
    pub fn parse(data: &[u8]) -> Result<Element, DecodeError> {
        let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
        let mut reader = Reader::from_reader(data);
        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => stack.push(Element::from_start(e)?),
                Event::Empty(ref e) => {
                    let element = Element::from_start(e)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                },
                Event::End(_) => {
                    if let Some(element) = stack.pop() {
                        match stack.last_mut() {
                            Some(parent) => parent.children.push(element),
                            None => return Ok(element),
                        }
                    }
                },
                Event::Text(ref t) => {
                    if let Some(current) = stack.last_mut() {
                        let raw = std::str::from_utf8(t.as_ref())?;
                        current.text.push_str(&unescape(raw)?);
                    }
                },
                Event::CData(ref c) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(std::str::from_utf8(c.as_ref())?);
                    }
                },
                Event::GeneralRef(ref r) => {
                    if let Some(current) = stack.last_mut() {
                        let name = std::str::from_utf8(r.as_ref())?;
                        current.text.push_str(&unescape(&format!("&{name};"))?);
                    }
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        match stack.first() {
            None => Err(DecodeError::NoRootElement),
            Some(root) => Err(DecodeError::Xml(format!(
                "unexpected end of document inside <{}>",
                root.name
            ))),
        }
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, DecodeError> {
        let name = std::str::from_utf8(start.local_name().as_ref())?.to_string();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            if attr.key.as_namespace_binding().is_some() {
                continue;
            }
            let key = std::str::from_utf8(attr.key.local_name().as_ref())?.to_string();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    /// Local name of the element.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the attribute with the given local name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Text content with surrounding whitespace removed.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// Text content exactly as written, after reference resolution.
    #[inline]
    pub fn raw_text(&self) -> &str {
        &self.text
    }

    /// All child elements in document order.
    #[inline]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First child element with the given local name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All child elements with the given local name, in document order.
    pub fn children_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Follow `path` through the first matching child at every step.
    pub fn find(&self, path: &[&str]) -> Option<&Element> {
        path.iter().try_fold(self, |current, name| current.child(name))
    }

    /// Collect every element reachable by `path`, in document order.
    ///
    /// Unlike [`find`](Self::find), every matching element is followed at
    /// every step, so `["exchanges", "exchange"]` yields the exchanges of all
    /// `exchanges` blocks.
    pub fn find_all(&self, path: &[&str]) -> Vec<&Element> {
        let mut current = vec![self];
        for name in path {
            current = current
                .into_iter()
                .flat_map(|e| e.children_named(name))
                .collect();
        }
        current
    }

    /// Trimmed text at `path`, or an empty string if the element is absent.
    pub fn text_at(&self, path: &[&str]) -> String {
        self.find(path).map(|e| e.text().to_string()).unwrap_or_default()
    }

    /// Attribute of the element at `path`, or an empty string if absent.
    pub fn attr_at(&self, path: &[&str], name: &str) -> String {
        self.find(path)
            .and_then(|e| e.attr(name))
            .unwrap_or_default()
            .to_string()
    }

    /// Parse the text at `path`; absent or empty text yields `None`.
    pub fn parse_at<T: FromStr>(&self, path: &[&str]) -> Result<Option<T>, DecodeError> {
        match self.find(path) {
            Some(e) => e.parse_text(),
            None => Ok(None),
        }
    }

    /// Parse this element's text; empty text yields `None`.
    pub fn parse_text<T: FromStr>(&self) -> Result<Option<T>, DecodeError> {
        parse_value(&self.name, self.text())
    }

    /// Parse the attribute `name`; an absent or empty attribute yields `None`.
    pub fn parse_attr<T: FromStr>(&self, name: &str) -> Result<Option<T>, DecodeError> {
        match self.attr(name) {
            Some(value) => parse_value(name, value.trim()),
            None => Ok(None),
        }
    }
}

fn parse_value<T: FromStr>(element: &str, value: &str) -> Result<Option<T>, DecodeError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| DecodeError::InvalidValue {
            element: element.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<flowDataSet xmlns="http://lca.jrc.it/ILCD/Flow" xmlns:common="http://lca.jrc.it/ILCD/Common" version="1.1">
    <flowInformation>
        <dataSetInformation>
            <common:UUID> 0a1b </common:UUID>
            <common:synonyms xml:lang="en">salt &amp; pepper</common:synonyms>
            <common:synonyms xml:lang="de"><![CDATA[Salz & Pfeffer]]></common:synonyms>
        </dataSetInformation>
        <quantitativeReference>
            <referenceToReferenceFlowProperty>2</referenceToReferenceFlowProperty>
        </quantitativeReference>
    </flowInformation>
    <flowProperties>
        <flowProperty dataSetInternalID="1"/>
        <flowProperty dataSetInternalID="2"/>
    </flowProperties>
    <flowProperties>
        <flowProperty dataSetInternalID="3"/>
    </flowProperties>
</flowDataSet>"#;

    #[test]
    fn test_parse_local_names() {
        let root = Element::parse(DOC.as_bytes()).unwrap();
        assert_eq!(root.name(), "flowDataSet");
        assert_eq!(root.attr("version"), Some("1.1"));
        assert_eq!(root.attr("xmlns"), None);
        assert_eq!(root.attr("common"), None);
        assert_eq!(
            root.text_at(&["flowInformation", "dataSetInformation", "UUID"]),
            "0a1b"
        );
    }

    #[test]
    fn test_text_unescaped() {
        let root = Element::parse(DOC.as_bytes()).unwrap();
        let info = root.find(&["flowInformation", "dataSetInformation"]).unwrap();
        let synonyms: Vec<_> = info.children_named("synonyms").collect();
        assert_eq!(synonyms.len(), 2);
        assert_eq!(synonyms[0].text(), "salt & pepper");
        assert_eq!(synonyms[0].attr("lang"), Some("en"));
        assert_eq!(synonyms[1].text(), "Salz & Pfeffer");
    }

    #[test]
    fn test_raw_text_keeps_padding() {
        let root = Element::parse(b"<a> x &lt; y </a>").unwrap();
        assert_eq!(root.raw_text(), " x < y ");
        assert_eq!(root.text(), "x < y");
    }

    #[test]
    fn test_find_all_follows_every_branch() {
        let root = Element::parse(DOC.as_bytes()).unwrap();
        let ids: Vec<_> = root
            .find_all(&["flowProperties", "flowProperty"])
            .iter()
            .map(|e| e.attr("dataSetInternalID").unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(root.find_all(&["missing", "flowProperty"]).is_empty());
    }

    #[test]
    fn test_parse_at() {
        let root = Element::parse(DOC.as_bytes()).unwrap();
        let id: Option<i32> = root
            .parse_at(&["flowInformation", "quantitativeReference", "referenceToReferenceFlowProperty"])
            .unwrap();
        assert_eq!(id, Some(2));
        let missing: Option<i32> = root.parse_at(&["nope"]).unwrap();
        assert_eq!(missing, None);
        let invalid: Result<Option<i32>, _> =
            root.parse_at(&["flowInformation", "dataSetInformation", "UUID"]);
        assert!(matches!(invalid, Err(DecodeError::InvalidValue { .. })));
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(
            Element::parse(b"<a><b></a>"),
            Err(DecodeError::Xml(_))
        ));
        assert!(matches!(Element::parse(b"<a><b/>"), Err(DecodeError::Xml(_))));
        assert_eq!(Element::parse(b"   "), Err(DecodeError::NoRootElement));
    }

    #[test]
    fn test_bom_is_skipped() {
        let mut data = UTF8_BOM.to_vec();
        data.extend_from_slice(b"<root>x</root>");
        let root = Element::parse(&data).unwrap();
        assert_eq!(root.name(), "root");
        assert_eq!(root.text(), "x");
    }
}
