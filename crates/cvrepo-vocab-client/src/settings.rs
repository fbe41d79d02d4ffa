//! # Service Settings
//!
//! Describes what the vocabulary service should load: the shared
//! "universe" repository plus one entry per project repository. The CI
//! `configure` step points a throwaway project at the branch under test,
//! writes the settings next to the checkout, and hands them to the service.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Repository holding the universe of terms shared by all projects.
pub const DEFAULT_UNIVERSE_REPO: &str = "https://github.com/WCRP-CMIP/WCRP-universe";

/// Branch of the universe repository the service tracks.
pub const DEFAULT_UNIVERSE_BRANCH: &str = "esgvoc";

/// Project name used for the branch under test.
pub const TEST_PROJECT_NAME: &str = "test_cv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseSettings {
    pub github_repo: String,
    pub branch: String,
}

impl Default for UniverseSettings {
    fn default() -> Self {
        Self {
            github_repo: DEFAULT_UNIVERSE_REPO.to_string(),
            branch: DEFAULT_UNIVERSE_BRANCH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSettings {
    pub project_name: String,
    pub github_repo: String,
    pub branch: String,
}

/// Full service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Where the service is reachable.
    pub api_url: String,
    pub universe: UniverseSettings,
    /// Projects keyed by project name.
    pub projects: BTreeMap<String, ProjectSettings>,
    /// Service library branch in use, recorded for the CI log.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_branch: Option<String>,
}

impl ServiceSettings {
    /// Settings that load a single test project from `repo_url` at `branch`
    /// on top of the default universe.
    pub fn for_test_branch(
        api_url: impl Into<String>,
        repo_url: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        let project = ProjectSettings {
            project_name: TEST_PROJECT_NAME.to_string(),
            github_repo: repo_url.into(),
            branch: branch.into(),
        };
        Self {
            api_url: api_url.into(),
            universe: UniverseSettings::default(),
            projects: BTreeMap::from([(project.project_name.clone(), project)]),
            library_branch: None,
        }
    }

    pub fn with_library_branch(mut self, branch: Option<String>) -> Self {
        self.library_branch = branch;
        self
    }

    pub fn project(&self, name: &str) -> Option<&ProjectSettings> {
        self.projects.get(name)
    }

    /// Read settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let io_err = |source: std::io::Error| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json + "\n").map_err(io_err)?;
        tracing::debug!(path = %path.display(), "wrote service settings");
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot access settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
