//! # Structure Subcommand
//!
//! Offline repository structure validation (no vocabulary service).

use anyhow::{Context, Result};
use clap::Args;

use crate::GlobalOpts;

/// Arguments for `cv-validate structure`.
#[derive(Args, Debug, Default)]
pub struct StructureArgs {
    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the structure subcommand.
///
/// Returns exit code: 0 on success, 1 if any error was recorded.
pub fn run_structure(args: &StructureArgs, opts: &GlobalOpts) -> Result<u8> {
    let report = cvrepo_schema::validate_repository(&opts.root).with_context(|| {
        format!("cannot scan repository at {}", opts.root.display())
    })?;
    crate::output::print_report("Repository structure", &report, args.json)?;
    Ok(crate::exit_code(&report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn repo_with_element(element: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let coll = dir.path().join("frequency");
        fs::create_dir_all(&coll).unwrap();
        fs::write(
            coll.join("000_context.jsonld"),
            r#"{"@context": {"id": "@id", "type": "@type", "@base": "https://example.org/frequency/"}}"#,
        )
        .unwrap();
        fs::write(coll.join("mon.json"), element).unwrap();
        dir
    }

    #[test]
    fn valid_repository_exits_zero() {
        let dir = repo_with_element(r#"{"id": "mon", "type": "frequency", "@context": "000_context.jsonld"}"#);
        let code = run_structure(&StructureArgs::default(), &GlobalOpts::new(dir.path())).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn invalid_element_exits_one() {
        let dir = repo_with_element(r#"{"type": "frequency"}"#);
        let code = run_structure(&StructureArgs { json: true }, &GlobalOpts::new(dir.path())).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn missing_root_is_an_operational_error() {
        let opts = GlobalOpts::new("/tmp/cvrepo-cli-no-such-root");
        assert!(run_structure(&StructureArgs::default(), &opts).is_err());
    }
}
