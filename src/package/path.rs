//! Classification of package entries by path.
//!
//! An entry belongs to a data set type if its path contains the type's folder
//! token and ends with `.xml`. This is a plain substring test: path segments
//! are not parsed, so a folder token that appears elsewhere in a path still
//! matches, and a path can match more than one type.

use crate::model::DataSetKind;

/// File suffix of data set documents.
pub const XML_SUFFIX: &str = ".xml";

/// Returns `true` if `path` is a data set document of the given kind.
#[inline]
pub fn is_data_set_path(kind: DataSetKind, path: &str) -> bool {
    path.contains(kind.folder()) && path.ends_with(XML_SUFFIX)
}

/// Returns `true` if `path` is a data set of the given kind and contains `uuid`.
#[inline]
pub fn matches_uuid(kind: DataSetKind, path: &str, uuid: &str) -> bool {
    is_data_set_path(kind, path) && path.contains(uuid)
}

/// The first kind, in [`DataSetKind::ALL`] order, whose predicate matches.
pub fn classify(path: &str) -> Option<DataSetKind> {
    DataSetKind::ALL
        .into_iter()
        .find(|kind| is_data_set_path(*kind, path))
}

/// Returns `true` if `path` is a process data set document.
pub fn is_process_path(path: &str) -> bool {
    is_data_set_path(DataSetKind::Process, path)
}

/// Returns `true` if `path` is a flow data set document.
pub fn is_flow_path(path: &str) -> bool {
    is_data_set_path(DataSetKind::Flow, path)
}

/// Returns `true` if `path` is a flow property data set document.
pub fn is_flow_property_path(path: &str) -> bool {
    is_data_set_path(DataSetKind::FlowProperty, path)
}

/// Returns `true` if `path` is a unit group data set document.
pub fn is_unit_group_path(path: &str) -> bool {
    is_data_set_path(DataSetKind::UnitGroup, path)
}

/// Returns `true` if `path` is a source data set document.
pub fn is_source_path(path: &str) -> bool {
    is_data_set_path(DataSetKind::Source, path)
}

/// Returns `true` if `path` is a contact data set document.
pub fn is_contact_path(path: &str) -> bool {
    is_data_set_path(DataSetKind::Contact, path)
}

/// Returns `true` if `path` is an LCIA method data set document.
pub fn is_method_path(path: &str) -> bool {
    is_data_set_path(DataSetKind::Method, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_predicates() {
        assert!(is_process_path("ILCD/processes/0a1b.xml"));
        assert!(is_flow_path("ILCD/flows/0a1b.xml"));
        assert!(is_flow_property_path("ILCD/flowproperties/0a1b.xml"));
        assert!(is_unit_group_path("ILCD/unitgroups/0a1b.xml"));
        assert!(is_source_path("ILCD/sources/0a1b.xml"));
        assert!(is_contact_path("ILCD/contacts/0a1b.xml"));
        assert!(is_method_path("ILCD/lciamethods/0a1b.xml"));

        assert!(!is_flow_path("ILCD/flowproperties/0a1b.xml"));
        assert!(!is_flow_path("ILCD/flows/0a1b.json"));
        assert!(!is_flow_path("ILCD/flows/"));
        assert!(!is_process_path("ILCD/Processes/0a1b.xml"));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("ILCD/flows/0a1b.xml"), Some(DataSetKind::Flow));
        assert_eq!(classify("ILCD/unitgroups/0a1b.xml"), Some(DataSetKind::UnitGroup));
        assert_eq!(classify("ILCD/external_docs/doc.pdf"), None);
        assert_eq!(classify("META-INF/MANIFEST.MF"), None);
    }

    #[test]
    fn test_substring_matching_is_kept() {
        // folder token outside the folder segment still matches
        assert!(is_flow_path("ILCD/processes/flows-of-2020.xml"));
        assert!(is_process_path("ILCD/processes/flows-of-2020.xml"));
        assert_eq!(classify("ILCD/processes/flows-of-2020.xml"), Some(DataSetKind::Process));
    }

    #[test]
    fn test_matches_uuid() {
        let path = "ILCD/flows/123e4567-e89b-12d3-a456-426614174000.xml";
        assert!(matches_uuid(DataSetKind::Flow, path, "123e4567-e89b-12d3-a456-426614174000"));
        assert!(!matches_uuid(DataSetKind::Process, path, "123e4567-e89b-12d3-a456-426614174000"));
        assert!(!matches_uuid(DataSetKind::Flow, path, "00000000-0000-0000-0000-000000000000"));
        assert!(matches_uuid(DataSetKind::Flow, path, "123e4567"));
    }
}
