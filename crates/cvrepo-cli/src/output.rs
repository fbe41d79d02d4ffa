//! Report rendering for the CI log.

use std::fmt::Write as _;

use anyhow::Result;
use cvrepo_core::ValidationReport;

/// Print `report` to stdout, as text or as pretty JSON.
pub fn print_report(title: &str, report: &ValidationReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render_text(title, report));
    }
    Ok(())
}

/// Human-readable summary: warnings first, then errors or a pass line.
pub fn render_text(title: &str, report: &ValidationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(
        out,
        "  collections: {}, orphan directories: {}, project_specs references: {}",
        report.collections_checked, report.orphan_directories, report.spec_references_checked
    );

    let warning_count = report.warning_count();
    if warning_count > 0 {
        let _ = writeln!(out, "\nWarnings ({warning_count}):");
        for warning in report.warnings() {
            let _ = writeln!(out, "  {warning}");
        }
    }

    let _ = writeln!(out, "\nSummary:");
    let error_count = report.error_count();
    if error_count > 0 {
        let _ = writeln!(out, "  FAILED with {error_count} error(s):");
        for error in report.errors() {
            let _ = writeln!(out, "  {error}");
        }
    } else {
        let _ = writeln!(out, "  OK: all checks passed");
    }
    out
}
