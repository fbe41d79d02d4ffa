//! # Configure Subcommand
//!
//! Points the vocabulary service at the branch under test and asks it to
//! synchronize. Reads `TEST_BRANCH` and `REPO_URL` (required) and
//! `ESGVOC_LIBRARY_BRANCH` (optional) from the environment.

use anyhow::{bail, Context, Result};
use clap::Args;
use cvrepo_vocab_client::{ServiceSettings, VocabApiConfig, VocabClient, VocabularyService};

use crate::GlobalOpts;

/// Arguments for `cv-validate configure`.
#[derive(Args, Debug, Default)]
pub struct ConfigureArgs {
    /// Service URL to use and record in the settings (overrides
    /// `ESGVOC_API_URL`).
    #[arg(long)]
    pub api_url: Option<String>,

    /// Write the settings file without contacting the service.
    #[arg(long)]
    pub skip_sync: bool,
}

/// Environment consumed by `configure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureEnv {
    pub test_branch: String,
    pub repo_url: String,
    pub library_branch: Option<String>,
}

impl ConfigureEnv {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let Some(test_branch) = get("TEST_BRANCH") else {
            bail!("TEST_BRANCH environment variable must be set");
        };
        let Some(repo_url) = get("REPO_URL") else {
            bail!("REPO_URL environment variable must be set");
        };
        Ok(Self {
            test_branch,
            repo_url,
            library_branch: get("ESGVOC_LIBRARY_BRANCH"),
        })
    }

    pub fn settings(&self, api_url: &str) -> ServiceSettings {
        ServiceSettings::for_test_branch(api_url, &self.repo_url, &self.test_branch)
            .with_library_branch(self.library_branch.clone())
    }
}

/// Execute the configure subcommand.
pub fn run_configure(args: &ConfigureArgs, opts: &GlobalOpts) -> Result<u8> {
    let env = ConfigureEnv::from_env()?;
    configure(args, opts, &env)
}

fn configure(args: &ConfigureArgs, opts: &GlobalOpts, env: &ConfigureEnv) -> Result<u8> {
    let mut config = VocabApiConfig::from_env()?;
    if let Some(url) = &args.api_url {
        config.api_url = url
            .parse()
            .with_context(|| format!("invalid --api-url '{url}'"))?;
    }
    let settings = env.settings(config.api_url.as_str());

    let path = opts.settings_path();
    settings
        .save(&path)
        .with_context(|| format!("cannot write settings to {}", path.display()))?;

    println!("Configured project '{}'", cvrepo_vocab_client::settings::TEST_PROJECT_NAME);
    println!("  repository: {}", env.repo_url);
    println!("  branch:     {}", env.test_branch);
    if let Some(branch) = &env.library_branch {
        println!("  library:    {branch}");
    }
    println!("  settings:   {}", path.display());

    if args.skip_sync {
        tracing::info!("synchronization skipped");
        return Ok(0);
    }

    let client = VocabClient::new(config).context("failed to build vocabulary client")?;
    crate::runtime()?
        .block_on(client.synchronize(&settings))
        .context("vocabulary service synchronization failed")?;
    println!("Vocabulary service synchronized");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_requires_test_branch() {
        let err = ConfigureEnv::from_lookup(lookup(&[("REPO_URL", "https://github.com/org/cvs")]))
            .unwrap_err();
        assert!(err.to_string().contains("TEST_BRANCH"));
    }

    #[test]
    fn env_requires_repo_url() {
        let err = ConfigureEnv::from_lookup(lookup(&[("TEST_BRANCH", "main"), ("REPO_URL", " ")]))
            .unwrap_err();
        assert!(err.to_string().contains("REPO_URL"));
    }

    #[test]
    fn env_library_branch_is_optional() {
        let env = ConfigureEnv::from_lookup(lookup(&[
            ("TEST_BRANCH", "feature"),
            ("REPO_URL", "https://github.com/org/cvs"),
        ]))
        .unwrap();
        assert_eq!(env.library_branch, None);

        let settings = env.settings("http://127.0.0.1:9999/");
        let project = settings.project("test_cv").unwrap();
        assert_eq!(project.branch, "feature");
        assert_eq!(project.github_repo, "https://github.com/org/cvs");
        assert_eq!(settings.universe.branch, "esgvoc");
    }

    #[test]
    fn configure_without_sync_writes_settings() {
        let dir = tempfile::tempdir().unwrap();
        let opts = GlobalOpts::new(dir.path());
        let env = ConfigureEnv {
            test_branch: "feature".into(),
            repo_url: "https://github.com/org/cvs".into(),
            library_branch: Some("dev".into()),
        };
        let args = ConfigureArgs {
            api_url: Some("http://127.0.0.1:18080".into()),
            skip_sync: true,
        };

        assert_eq!(configure(&args, &opts, &env).unwrap(), 0);
        let saved = ServiceSettings::load(&opts.settings_path()).unwrap();
        assert_eq!(saved.api_url, "http://127.0.0.1:18080/");
        assert_eq!(saved.library_branch.as_deref(), Some("dev"));
        assert_eq!(saved.project("test_cv").unwrap().branch, "feature");
    }
}
