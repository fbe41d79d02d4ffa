//! # cv-validate entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cvrepo_cli::configure::{run_configure, ConfigureArgs};
use cvrepo_cli::crosscheck::{run_cross_check, CrossCheckArgs};
use cvrepo_cli::structure::{run_structure, StructureArgs};
use cvrepo_cli::suite::{run_test, TestArgs};
use cvrepo_cli::GlobalOpts;

/// Validate a controlled-vocabulary repository.
///
/// Checks the directory/file structure of the checkout and cross-checks its
/// collections and terms against the vocabulary service.
#[derive(Parser, Debug)]
#[command(name = "cv-validate", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Repository checkout to validate.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Service settings file (default: .cv-validate/settings.json under the root).
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Point the vocabulary service at the branch under test and synchronize it.
    Configure(ConfigureArgs),

    /// Cross-check against the vocabulary service, then validate the structure.
    Test(TestArgs),

    /// Validate the repository structure only.
    Structure(StructureArgs),

    /// Cross-check collections and terms against the vocabulary service only.
    #[command(name = "cross-check")]
    CrossCheck(CrossCheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let opts = GlobalOpts {
        root: cli.root,
        settings: cli.settings,
    };
    tracing::debug!(root = %opts.root.display(), "cv-validate starting");

    let result = match cli.command {
        Commands::Configure(args) => run_configure(&args, &opts),
        Commands::Test(args) => run_test(&args, &opts),
        Commands::Structure(args) => run_structure(&args, &opts),
        Commands::CrossCheck(args) => run_cross_check(&args, &opts),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
