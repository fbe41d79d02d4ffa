//! # cvrepo-cli: `cv-validate`
//!
//! CI entry point for a controlled-vocabulary repository.
//!
//! ## Subcommands
//!
//! - `cv-validate configure`: point the vocabulary service at the branch
//!   under test (`TEST_BRANCH`, `REPO_URL`) and synchronize it.
//! - `cv-validate test`: cross-check the checkout against the service,
//!   then validate the repository structure. Exit code 1 on any error.
//! - `cv-validate structure`: structure validation only, no network.
//! - `cv-validate cross-check`: service cross-check only.
//!
//! ```bash
//! TEST_BRANCH=my-branch REPO_URL=https://github.com/org/cvs cv-validate configure
//! cv-validate test --project obs4REF
//! ```
//!
//! Handlers return the process exit code (`0` success, `1` failure);
//! operational errors bubble up as `anyhow::Error` and also exit with `1`.

pub mod configure;
pub mod crosscheck;
pub mod output;
pub mod structure;
pub mod suite;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cvrepo_core::ValidationReport;
use cvrepo_vocab_client::{ServiceSettings, VocabApiConfig, VocabClient};

/// Project cross-checked when `--project` is not given.
pub const DEFAULT_PROJECT: &str = "obs4REF";

/// Settings file written by `configure`, relative to the repository root.
pub const DEFAULT_SETTINGS_PATH: &str = ".cv-validate/settings.json";

/// Options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalOpts {
    /// Repository checkout to validate.
    pub root: PathBuf,
    /// Explicit settings file, if given on the command line.
    pub settings: Option<PathBuf>,
}

impl GlobalOpts {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            settings: None,
        }
    }

    /// Settings file location: `--settings` if given (relative to the root
    /// when it exists there), else [`DEFAULT_SETTINGS_PATH`] under the root.
    pub fn settings_path(&self) -> PathBuf {
        match &self.settings {
            Some(path) => resolve_path(path, &self.root),
            None => self.root.join(DEFAULT_SETTINGS_PATH),
        }
    }
}

/// Resolve a path that may be relative to the repository root.
///
/// Absolute paths are returned as-is. A relative path that exists under
/// `repo_root` resolves there; otherwise it is taken relative to the
/// current directory.
pub fn resolve_path(path: &Path, repo_root: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let repo_relative = repo_root.join(path);
    if repo_relative.exists() {
        repo_relative
    } else {
        path.to_path_buf()
    }
}

/// Client configuration for `test`/`cross-check`.
///
/// `ESGVOC_API_URL` wins; otherwise the URL recorded by `configure` in the
/// settings file; otherwise the built-in default.
pub fn load_vocab_config(settings_path: &Path) -> Result<VocabApiConfig> {
    let config = if settings_path.is_file() {
        let settings = ServiceSettings::load(settings_path)?;
        tracing::debug!(
            settings = %settings_path.display(),
            api_url = %settings.api_url,
            "using service settings"
        );
        VocabApiConfig::from_env_or(&settings.api_url)?
    } else {
        VocabApiConfig::from_env()?
    };
    Ok(config)
}

/// Build the HTTP client for the vocabulary service.
pub fn vocab_client(opts: &GlobalOpts) -> Result<VocabClient> {
    let config = load_vocab_config(&opts.settings_path())?;
    tracing::info!(api_url = %config.api_url, "connecting to vocabulary service");
    VocabClient::new(config).context("failed to build vocabulary client")
}

/// Single-threaded runtime; requests are issued one at a time.
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")
}

/// Exit code for a finished report.
pub fn exit_code(report: &ValidationReport) -> u8 {
    if report.is_success() {
        0
    } else {
        1
    }
}
