//! # Validation Report
//!
//! Every check in the workspace appends to a [`ValidationReport`] instead of
//! returning early. Errors fail the run; warnings are advisory and never
//! change the exit status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Issue severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Fatal: the run fails.
    Error,
    /// Advisory only.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("ERROR"),
            Self::Warning => f.write_str("WARN"),
        }
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
    /// Directory or file the issue concerns, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Issue {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            context: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(ctx) => write!(f, "{} [{}] {}", self.severity, ctx, self.message),
            None => write!(f, "{} {}", self.severity, self.message),
        }
    }
}

/// Accumulated findings of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    issues: Vec<Issue>,
    /// Collection directories inspected.
    pub collections_checked: usize,
    /// Directories holding JSON but no context file.
    pub orphan_directories: usize,
    /// Distinct collection references found in `project_specs.json`.
    pub spec_references_checked: usize,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.push(Issue::error(message));
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.push(Issue::warning(message));
    }

    pub fn add_error_with_context(&mut self, context: impl Into<String>, message: impl Into<String>) {
        self.push(Issue::error(message).with_context(context));
    }

    pub fn add_warning_with_context(
        &mut self,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.push(Issue::warning(message).with_context(context));
    }

    /// All issues in the order they were recorded.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(Issue::is_error)
    }

    /// A run succeeds when no error was recorded. Warnings do not count.
    pub fn is_success(&self) -> bool {
        !self.has_errors()
    }

    /// Append another report's issues and add up its counters.
    pub fn merge(&mut self, other: ValidationReport) {
        self.issues.extend(other.issues);
        self.collections_checked += other.collections_checked;
        self.orphan_directories += other.orphan_directories;
        self.spec_references_checked += other.spec_references_checked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_succeeds() {
        let report = ValidationReport::new();
        assert!(report.is_success());
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn warnings_do_not_fail_the_report() {
        let mut report = ValidationReport::new();
        report.add_warning("project_specs.json not found");
        assert!(report.is_success());
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn errors_fail_the_report() {
        let mut report = ValidationReport::new();
        report.add_error_with_context("institution_id", "no element files found");
        assert!(!report.is_success());
        let err = report.errors().next().unwrap();
        assert_eq!(err.context.as_deref(), Some("institution_id"));
    }

    #[test]
    fn merge_keeps_order_and_sums_counters() {
        let mut a = ValidationReport::new();
        a.add_error("first");
        a.collections_checked = 2;
        let mut b = ValidationReport::new();
        b.add_warning("second");
        b.collections_checked = 3;
        b.orphan_directories = 1;

        a.merge(b);
        let messages: Vec<_> = a.issues().iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
        assert_eq!(a.collections_checked, 5);
        assert_eq!(a.orphan_directories, 1);
    }

    #[test]
    fn issue_display_includes_context() {
        let issue = Issue::error("missing '@context' field").with_context("era-5.json");
        assert_eq!(issue.to_string(), "ERROR [era-5.json] missing '@context' field");
        assert_eq!(Issue::warning("hm").to_string(), "WARN hm");
    }

    #[test]
    fn report_serializes_severity_lowercase() {
        let mut report = ValidationReport::new();
        report.add_warning("w");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["issues"][0]["severity"], "warning");
        assert!(json["issues"][0].get("context").is_none());
    }
}
