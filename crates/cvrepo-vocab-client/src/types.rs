//! Payload types returned by the vocabulary service.

use cvrepo_core::TermId;
use serde::{Deserialize, Serialize};

/// One vocabulary term as served by the service.
///
/// Only `id` is relied upon. Everything else the service sends is kept in
/// `extra` so that callers can inspect it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drs_name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Term {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: TermId(id.into()),
            kind: None,
            drs_name: None,
            extra: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_keeps_unknown_fields() {
        let term: Term = serde_json::from_value(serde_json::json!({
            "id": "era-5",
            "type": "source",
            "drs_name": "ERA-5",
            "cohort": ["Published"]
        }))
        .unwrap();
        assert_eq!(term.id.as_str(), "era-5");
        assert_eq!(term.kind.as_deref(), Some("source"));
        assert_eq!(term.drs_name.as_deref(), Some("ERA-5"));
        assert!(term.extra.contains_key("cohort"));
    }

    #[test]
    fn term_requires_only_id() {
        let term: Term = serde_json::from_str(r#"{"id": "mon"}"#).unwrap();
        assert_eq!(term, Term::new("mon"));
    }
}
