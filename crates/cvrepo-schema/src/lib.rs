//! # cvrepo-schema: Repository Structure Validation
//!
//! Checks the shape of a CV repository checkout without consulting any
//! external service:
//!
//! - every collection has a context file whose `@context` mapping carries
//!   `id`, `type` and `@base` ([`context`]);
//! - every element file carries `id`, `type` and `@context` ([`element`]);
//! - every collection named in `project_specs.json` exists as a top-level
//!   directory ([`project_specs`]).
//!
//! [`RepositoryValidator`] runs all of them and returns a
//! [`cvrepo_core::ValidationReport`]. Bad files become issues in the report;
//! only an unreadable repository root is returned as an `Err`.

pub mod context;
pub mod document;
pub mod element;
pub mod project_specs;
pub mod validate;

pub use document::{load_json, DocumentError};
pub use project_specs::{ProjectSpecs, ProjectSpecsError};
pub use validate::{validate_repository, RepositoryValidator};

/// Render a field list as `'id', '@base'` for issue messages.
pub(crate) fn quote_fields(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| format!("'{f}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
