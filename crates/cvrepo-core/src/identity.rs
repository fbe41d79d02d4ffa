//! # Identifier Newtypes
//!
//! A collection is named after its directory, so a `CollectionId` must be a
//! single path segment. Term ids come from the `id` field of element files
//! and are compared verbatim against what the vocabulary service returns.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CvError;

/// Name of a vocabulary collection (and of its directory).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionId(String);

impl CollectionId {
    /// Validate and wrap a collection name.
    ///
    /// # Errors
    ///
    /// Rejects empty names, names containing a path separator, and the
    /// special segments `.` and `..`.
    pub fn new(value: impl Into<String>) -> Result<Self, CvError> {
        let value = value.into();
        let reason = if value.is_empty() {
            Some("must not be empty")
        } else if value.contains('/') || value.contains('\\') {
            Some("must be a single path segment")
        } else if value == "." || value == ".." {
            Some("must not be a relative path segment")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(CvError::InvalidIdentifier {
                kind: "collection",
                value,
                reason,
            }),
            None => Ok(Self(value)),
        }
    }

    /// Access the collection name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CollectionId {
    type Error = CvError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CollectionId> for String {
    fn from(id: CollectionId) -> Self {
        id.0
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a single vocabulary term.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermId(pub String);

impl TermId {
    /// Access the term id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TermId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
