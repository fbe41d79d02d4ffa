//! # Context File Checks
//!
//! A collection's `*.jsonld` file must hold a top-level `@context` mapping
//! with at least the keys in [`REQUIRED_CONTEXT_FIELDS`].

use std::fmt;

use serde_json::Value;

/// Keys every `@context` mapping must define.
pub const REQUIRED_CONTEXT_FIELDS: [&str; 3] = ["id", "type", "@base"];

/// What is wrong with a context document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextProblem {
    /// The document root is not a JSON object.
    NotAnObject,
    MissingContext,
    /// `@context` is present but is not a mapping.
    ContextNotMapping,
    MissingFields(Vec<&'static str>),
}

impl fmt::Display for ContextProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => f.write_str("Document root must be a JSON object"),
            Self::MissingContext => f.write_str("Missing '@context' field"),
            Self::ContextNotMapping => f.write_str("'@context' must be a mapping"),
            Self::MissingFields(fields) => write!(
                f,
                "Missing required fields in @context: {}",
                crate::quote_fields(fields)
            ),
        }
    }
}

/// Check a parsed context document. `None` means it is well-formed.
pub fn check_context(document: &Value) -> Option<ContextProblem> {
    let root = match document.as_object() {
        Some(root) => root,
        None => return Some(ContextProblem::NotAnObject),
    };
    let context = match root.get("@context") {
        Some(context) => context,
        None => return Some(ContextProblem::MissingContext),
    };
    let mapping = match context.as_object() {
        Some(mapping) => mapping,
        None => return Some(ContextProblem::ContextNotMapping),
    };

    let missing: Vec<&'static str> = REQUIRED_CONTEXT_FIELDS
        .into_iter()
        .filter(|field| !mapping.contains_key(*field))
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(ContextProblem::MissingFields(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn complete_context_passes() {
        let doc = json!({
            "@context": {
                "id": "@id",
                "type": "@type",
                "@base": "https://example.org/source_id/"
            }
        });
        assert_eq!(check_context(&doc), None);
    }

    #[test]
    fn missing_base_is_reported_alone() {
        let doc = json!({"@context": {"id": "@id", "type": "@type"}});
        let problem = check_context(&doc).unwrap();
        assert_eq!(problem, ContextProblem::MissingFields(vec!["@base"]));
        assert_eq!(
            problem.to_string(),
            "Missing required fields in @context: '@base'"
        );
    }

    #[test]
    fn all_missing_fields_are_listed_in_one_problem() {
        let doc = json!({"@context": {}});
        assert_eq!(
            check_context(&doc),
            Some(ContextProblem::MissingFields(vec!["id", "type", "@base"]))
        );
    }

    #[test]
    fn context_must_be_present() {
        assert_eq!(
            check_context(&json!({"id": "x"})),
            Some(ContextProblem::MissingContext)
        );
    }

    #[test]
    fn context_must_be_a_mapping() {
        let doc = json!({"@context": ["https://example.org/ctx.jsonld"]});
        assert_eq!(check_context(&doc), Some(ContextProblem::ContextNotMapping));
    }

    #[test]
    fn root_must_be_an_object() {
        assert_eq!(check_context(&json!([1, 2])), Some(ContextProblem::NotAnObject));
    }
}
