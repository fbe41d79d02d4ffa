//! # Test Subcommand
//!
//! The full CI check: the vocabulary service cross-check followed by the
//! structure validation. Both always run; the exit code is 1 if either
//! recorded an error.

use anyhow::{Context, Result};
use clap::Args;
use cvrepo_core::{RepositoryLayout, ValidationReport};
use serde::Serialize;

use crate::crosscheck::cross_check;
use crate::GlobalOpts;

/// Arguments for `cv-validate test`.
#[derive(Args, Debug)]
pub struct TestArgs {
    /// Project whose collections are compared with the checkout.
    #[arg(long, default_value = crate::DEFAULT_PROJECT)]
    pub project: String,

    /// Print both reports as one JSON document.
    #[arg(long)]
    pub json: bool,
}

/// Reports of one `test` run.
#[derive(Debug, Serialize)]
pub struct SuiteReport {
    pub project: String,
    pub cross_check: ValidationReport,
    pub structure: ValidationReport,
}

impl SuiteReport {
    pub fn is_success(&self) -> bool {
        self.cross_check.is_success() && self.structure.is_success()
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// Execute the test subcommand.
pub fn run_test(args: &TestArgs, opts: &GlobalOpts) -> Result<u8> {
    let suite = run_suite(&args.project, opts)?;
    print_suite(&suite, args.json)?;
    Ok(suite.exit_code())
}

/// Run the cross-check and the structure validation against `opts.root`.
///
/// The structure validation runs even when the cross-check fails.
pub fn run_suite(project: &str, opts: &GlobalOpts) -> Result<SuiteReport> {
    let layout = RepositoryLayout::scan(&opts.root)
        .with_context(|| format!("cannot scan repository at {}", opts.root.display()))?;
    let client = crate::vocab_client(opts)?;
    let service_report = crate::runtime()?.block_on(cross_check(&client, project, &layout));
    let structure = cvrepo_schema::RepositoryValidator::from_layout(layout).validate();

    Ok(SuiteReport {
        project: project.to_string(),
        cross_check: service_report,
        structure,
    })
}

fn print_suite(suite: &SuiteReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(suite)?);
        return Ok(());
    }
    let title = format!("Vocabulary service cross-check ({})", suite.project);
    print!("{}", crate::output::render_text(&title, &suite.cross_check));
    println!();
    print!(
        "{}",
        crate::output::render_text("Repository structure", &suite.structure)
    );
    println!();
    if suite.is_success() {
        println!("All checks passed");
    } else {
        println!(
            "Validation failed with {} error(s)",
            suite.cross_check.error_count() + suite.structure.error_count()
        );
    }
    Ok(())
}
