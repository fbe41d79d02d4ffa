//! # Cross-Check Subcommand
//!
//! Compares the on-disk collections and element ids against what the
//! vocabulary service publishes for a project.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use clap::Args;
use cvrepo_core::{RepositoryLayout, ValidationReport};
use cvrepo_vocab_client::VocabularyService;

use crate::GlobalOpts;

/// Arguments for `cv-validate cross-check`.
#[derive(Args, Debug)]
pub struct CrossCheckArgs {
    /// Project whose collections are compared with the checkout.
    #[arg(long, default_value = crate::DEFAULT_PROJECT)]
    pub project: String,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the cross-check subcommand.
pub fn run_cross_check(args: &CrossCheckArgs, opts: &GlobalOpts) -> Result<u8> {
    let layout = RepositoryLayout::scan(&opts.root)
        .with_context(|| format!("cannot scan repository at {}", opts.root.display()))?;
    let client = crate::vocab_client(opts)?;
    let report = crate::runtime()?.block_on(cross_check(&client, &args.project, &layout));
    crate::output::print_report("Vocabulary service cross-check", &report, args.json)?;
    Ok(crate::exit_code(&report))
}

/// Check that `project` exists, that every on-disk collection is served for
/// it, and that every element id of a served collection is among its terms.
///
/// Listing projects or collections failing stops the check; a failing term
/// listing is recorded and the remaining collections are still checked.
pub async fn cross_check<S: VocabularyService>(
    service: &S,
    project: &str,
    layout: &RepositoryLayout,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    let projects = match service.get_all_projects().await {
        Ok(projects) => projects,
        Err(e) => {
            report.add_error(format!("Failed to get projects from the vocabulary service: {e}"));
            return report;
        }
    };
    if !projects.iter().any(|p| p == project) {
        report.add_error(format!(
            "Project '{project}' not found in the vocabulary service. Available projects: {}",
            projects.join(", ")
        ));
        return report;
    }
    tracing::info!(project, "project found");

    let served: BTreeSet<String> = match service.get_all_collections_in_project(project).await {
        Ok(collections) => collections.into_iter().collect(),
        Err(e) => {
            report.add_error(format!("Failed to get collections of '{project}': {e}"));
            return report;
        }
    };
    tracing::info!(project, count = served.len(), "collections served");

    let collections: Vec<_> = layout.collections().collect();
    report.collections_checked = collections.len();

    let missing: Vec<&str> = collections
        .iter()
        .map(|c| c.name.as_str())
        .filter(|name| !served.contains(*name))
        .collect();
    if !missing.is_empty() {
        report.add_error(format!(
            "Collections found in repository but not in the vocabulary service: {}",
            missing.join(", ")
        ));
    }

    for collection in collections.iter().filter(|c| served.contains(&c.name)) {
        let name = collection.name.as_str();
        let terms = match service.get_all_terms_in_collection(project, name).await {
            Ok(terms) => terms,
            Err(e) => {
                report.add_error_with_context(name, format!("Failed to get terms: {e}"));
                continue;
            }
        };
        let served_ids: BTreeSet<&str> = terms.iter().map(|t| t.id.as_str()).collect();
        let local_ids = collection.element_ids();
        let missing_ids: Vec<&str> = local_ids
            .iter()
            .map(|id| id.as_str())
            .filter(|id| !served_ids.contains(id))
            .collect();

        tracing::debug!(
            collection = name,
            local = local_ids.len(),
            served = served_ids.len(),
            "compared element ids"
        );
        if missing_ids.is_empty() {
            tracing::info!(collection = name, "all elements served");
        } else {
            tracing::warn!(collection = name, missing = missing_ids.len(), "elements not served");
            report.add_error_with_context(
                name,
                format!(
                    "Elements in repository but not in the vocabulary service: {}",
                    missing_ids.join(", ")
                ),
            );
        }
    }

    match service.get_all_terms_in_all_projects().await {
        Ok(all_terms) => tracing::info!(total = all_terms.len(), "terms across all projects"),
        Err(e) => report.add_error(format!("Failed to get all terms: {e}")),
    }

    report
}
