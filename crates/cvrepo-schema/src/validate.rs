//! # Repository Structure Validation
//!
//! Walks the collections of a [`RepositoryLayout`] and records one issue per
//! problem found:
//!
//! | Check | Severity |
//! |-------|----------|
//! | directory has `*.json` but no `*.jsonld` | warning |
//! | collection has no context file | error |
//! | collection has more than one context file | warning |
//! | collection has no element files | error |
//! | context file unreadable, malformed, or incomplete | error |
//! | element file unreadable, malformed, or incomplete | error |
//! | `project_specs.json` missing | warning |
//! | `project_specs.json` unreadable or malformed | error |
//! | `project_specs.json` names a non-existent collection | error |

use std::path::Path;

use cvrepo_core::layout::PROJECT_SPECS_FILE;
use cvrepo_core::{CollectionId, DirectoryListing, LayoutError, RepositoryLayout, ValidationReport};

use crate::context::check_context;
use crate::document::load_json;
use crate::element::check_element;
use crate::project_specs::{ProjectSpecs, ProjectSpecsError};

/// Validate the repository rooted at `root`.
///
/// # Errors
///
/// Fails only when the root itself cannot be scanned.
pub fn validate_repository(root: impl AsRef<Path>) -> Result<ValidationReport, LayoutError> {
    Ok(RepositoryValidator::new(root)?.validate())
}

/// Structure validator over a scanned repository.
#[derive(Debug)]
pub struct RepositoryValidator {
    layout: RepositoryLayout,
}

impl RepositoryValidator {
    /// Scan `root` and build a validator for it.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, LayoutError> {
        Ok(Self::from_layout(RepositoryLayout::scan(root)?))
    }

    pub fn from_layout(layout: RepositoryLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &RepositoryLayout {
        &self.layout
    }

    /// Run every structure check.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        let collections: Vec<_> = self.layout.collections().collect();
        let orphans: Vec<_> = self.layout.orphans().collect();
        tracing::info!(
            collections = collections.len(),
            orphans = orphans.len(),
            "classified repository directories"
        );

        for orphan in &orphans {
            report.add_warning_with_context(
                orphan.name.as_str(),
                format!(
                    "DID YOU FORGET CONTEXT for directory '{}'? (has .json files but no .jsonld context)",
                    orphan.name
                ),
            );
        }
        report.orphan_directories = orphans.len();

        for collection in &collections {
            self.check_collection(collection, &mut report);
        }
        report.collections_checked = collections.len();

        self.check_project_specs(&mut report);

        report
    }

    fn check_collection(&self, dir: &DirectoryListing, report: &mut ValidationReport) {
        let errors_before = report.error_count();
        let name = dir.name.as_str();

        match dir.context_files.len() {
            0 => report.add_error_with_context(name, format!("{name}: No .jsonld context file found")),
            1 => {}
            _ => report.add_warning_with_context(
                name,
                format!(
                    "{name}: Multiple .jsonld files found: {}",
                    file_names(&dir.context_files).join(", ")
                ),
            ),
        }

        if dir.non_context_entries.is_empty() {
            report.add_error_with_context(
                name,
                format!("{name}: No element files found (directory only contains context)"),
            );
        }

        for path in &dir.context_files {
            let file = display_name(path);
            let problem = match load_json(path) {
                Ok(document) => check_context(&document).map(|p| p.to_string()),
                Err(e) => Some(e.to_string()),
            };
            if let Some(problem) = problem {
                report.add_error_with_context(name, format!("{file}: {problem}"));
            }
        }

        for path in &dir.element_files {
            let file = display_name(path);
            let problem = match load_json(path) {
                Ok(document) => check_element(&document).map(|p| p.to_string()),
                Err(e) => Some(e.to_string()),
            };
            if let Some(problem) = problem {
                report.add_error_with_context(name, format!("{file}: {problem}"));
            }
        }

        let new_errors = report.error_count() - errors_before;
        if new_errors == 0 {
            tracing::info!(collection = name, elements = dir.element_files.len(), "collection passed validation");
        } else {
            tracing::warn!(collection = name, errors = new_errors, "collection failed validation");
        }
    }

    fn check_project_specs(&self, report: &mut ValidationReport) {
        let path = self.layout.project_specs_path();
        let specs = match ProjectSpecs::load(&path) {
            Ok(specs) => specs,
            Err(ProjectSpecsError::NotFound(_)) => {
                report.add_warning(format!(
                    "{PROJECT_SPECS_FILE} not found - skipping source_collection validation"
                ));
                return;
            }
            Err(e) => {
                report.add_error_with_context(
                    PROJECT_SPECS_FILE,
                    format!("Error reading {PROJECT_SPECS_FILE}: {e}"),
                );
                return;
            }
        };

        let references = specs.collection_references();
        tracing::info!(
            references = references.len(),
            "collected collection references from {PROJECT_SPECS_FILE}"
        );

        for reference in &references {
            let message = match CollectionId::new(*reference) {
                Ok(id) if self.layout.has_directory(id.as_str()) => {
                    tracing::debug!(collection = %id, "referenced directory exists");
                    continue;
                }
                Ok(_) => format!("{PROJECT_SPECS_FILE} references non-existent collection: '{reference}'"),
                Err(e) => format!(
                    "{PROJECT_SPECS_FILE} references non-existent collection: '{reference}' ({e})"
                ),
            };
            report.add_error_with_context(PROJECT_SPECS_FILE, message);
        }
        report.spec_references_checked = references.len();
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn file_names(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths.iter().map(|p| display_name(p)).collect()
}
