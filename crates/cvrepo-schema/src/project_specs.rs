//! # project_specs.json
//!
//! The project specification names collections in two places:
//!
//! - `drs_specs[*].parts[*].collection_id`
//! - `global_attributes_specs.specs.<attribute>.source_collection`
//!
//! `drs_specs` is accepted either as a list of DRS specs or as a mapping
//! from DRS type (`directory`, `file_name`, ...) to spec. Unknown keys are
//! ignored throughout. References are kept verbatim; whether they name an
//! existing directory is decided by the caller.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Failure to load `project_specs.json`.
#[derive(Error, Debug)]
pub enum ProjectSpecsError {
    /// The file does not exist. Callers treat this as advisory.
    #[error("project_specs.json not found at {0}")]
    NotFound(String),

    #[error("cannot read project_specs.json: {0}")]
    Read(#[source] std::io::Error),

    #[error("invalid project_specs.json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The subset of `project_specs.json` that references collections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectSpecs {
    #[serde(default)]
    pub drs_specs: Option<DrsSpecs>,
    #[serde(default)]
    pub global_attributes_specs: Option<GlobalAttributesSpecs>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DrsSpecs {
    List(Vec<DrsSpec>),
    ByType(BTreeMap<String, DrsSpec>),
}

impl DrsSpecs {
    fn iter(&self) -> Box<dyn Iterator<Item = &DrsSpec> + '_> {
        match self {
            Self::List(specs) => Box::new(specs.iter()),
            Self::ByType(specs) => Box::new(specs.values()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrsSpec {
    #[serde(default)]
    pub parts: Vec<DrsPart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrsPart {
    #[serde(default)]
    pub collection_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalAttributesSpecs {
    #[serde(default)]
    pub specs: BTreeMap<String, GlobalAttributeSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalAttributeSpec {
    #[serde(default)]
    pub source_collection: Option<String>,
}

impl ProjectSpecs {
    /// Load from a file.
    pub fn load(path: &Path) -> Result<Self, ProjectSpecsError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ProjectSpecsError::NotFound(path.display().to_string()))
            }
            Err(e) => return Err(ProjectSpecsError::Read(e)),
        };
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ProjectSpecsError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Every collection named by a DRS part or a global attribute,
    /// de-duplicated and sorted.
    pub fn collection_references(&self) -> BTreeSet<&str> {
        let drs = self
            .drs_specs
            .iter()
            .flat_map(DrsSpecs::iter)
            .flat_map(|spec| spec.parts.iter())
            .filter_map(|part| part.collection_id.as_deref());

        let attributes = self
            .global_attributes_specs
            .iter()
            .flat_map(|g| g.specs.values())
            .filter_map(|spec| spec.source_collection.as_deref());

        drs.chain(attributes).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn references_from_list_form_and_attributes() {
        let specs = ProjectSpecs::from_json_str(
            r#"{
                "project_id": "obs4REF",
                "drs_specs": [
                    {"type": "directory", "parts": [
                        {"collection_id": "activity_id", "is_required": true},
                        {"collection_id": "source_id"}
                    ]},
                    {"type": "file_name", "parts": [
                        {"collection_id": "source_id"},
                        {"is_required": false}
                    ]}
                ],
                "global_attributes_specs": {
                    "specs": {
                        "institution_id": {"source_collection": "institution_id"},
                        "comment": {"value_type": "string"}
                    }
                }
            }"#,
        )
        .unwrap();

        let refs: Vec<_> = specs.collection_references().into_iter().collect();
        assert_eq!(refs, vec!["activity_id", "institution_id", "source_id"]);
    }

    #[test]
    fn references_from_mapping_form() {
        let specs = ProjectSpecs::from_json_str(
            r#"{"drs_specs": {"directory": {"parts": [{"collection_id": "frequency"}]}}}"#,
        )
        .unwrap();
        let refs: Vec<_> = specs.collection_references().into_iter().collect();
        assert_eq!(refs, vec!["frequency"]);
    }

    #[test]
    fn empty_document_has_no_references() {
        let specs = ProjectSpecs::from_json_str("{}").unwrap();
        assert!(specs.collection_references().is_empty());
    }

    #[test]
    fn non_string_collection_id_is_a_parse_error() {
        let err = ProjectSpecs::from_json_str(
            r#"{"global_attributes_specs": {"specs": {"x": {"source_collection": 7}}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ProjectSpecsError::Parse(_)));
    }

    #[test]
    fn path_like_references_are_kept_verbatim() {
        let specs = ProjectSpecs::from_json_str(
            r#"{
                "drs_specs": [{"parts": [{"collection_id": "foo"}]}],
                "global_attributes_specs": {"specs": {"x": {"source_collection": "../x"}}}
            }"#,
        )
        .unwrap();
        let refs: Vec<_> = specs.collection_references().into_iter().collect();
        assert_eq!(refs, vec!["../x", "foo"]);
    }

    #[test]
    fn load_distinguishes_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProjectSpecs::load(&dir.path().join("project_specs.json")).unwrap_err();
        assert!(matches!(err, ProjectSpecsError::NotFound(_)));
    }
}
