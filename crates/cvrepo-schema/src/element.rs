//! Element file checks: each term document needs `id`, `type` and `@context`.

use std::fmt;

use serde_json::Value;

/// Top-level keys every element must define.
pub const REQUIRED_ELEMENT_FIELDS: [&str; 3] = ["id", "type", "@context"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementProblem {
    NotAnObject,
    MissingFields(Vec<&'static str>),
}

impl fmt::Display for ElementProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => f.write_str("Element must be a JSON object"),
            Self::MissingFields(fields) => {
                write!(f, "Missing required fields: {}", crate::quote_fields(fields))
            }
        }
    }
}

/// Check a parsed element document. `None` means it is well-formed.
pub fn check_element(document: &Value) -> Option<ElementProblem> {
    let Some(root) = document.as_object() else {
        return Some(ElementProblem::NotAnObject);
    };
    let missing: Vec<&'static str> = REQUIRED_ELEMENT_FIELDS
        .into_iter()
        .filter(|field| !root.contains_key(*field))
        .collect();
    (!missing.is_empty()).then_some(ElementProblem::MissingFields(missing))
}
