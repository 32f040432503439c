//! asset_sweep CLI - report unused, undeclared and missing project assets.
//!
//! Usage: asset_sweep unused --project-dir <DIR>

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use asset_sweep::config::ProjectConfig;
use asset_sweep::report::{Severity, render_summary};
use asset_sweep::{AssetAuditor, AuditContext, AuditOutcome};

/// Static audit of declared, referenced and on-disk assets
#[derive(Parser, Debug)]
#[command(name = "asset_sweep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find unused, undeclared and missing assets and write a JSON report
    Unused {
        /// Project directory containing the manifest
        #[arg(short = 'd', long = "project-dir")]
        project_dir: PathBuf,

        /// Configuration file overriding the project layout
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Unused {
            project_dir,
            config,
        } => run_unused(&project_dir, config.as_deref()),
    }
}

fn run_unused(project_dir: &Path, config: Option<&Path>) -> Result<()> {
    let config = match config {
        Some(path) => ProjectConfig::load_required(path)?,
        None => ProjectConfig::discover(project_dir),
    };
    let auditor = AssetAuditor::new(AuditContext::new(project_dir, config.into_layout()));
    let context = auditor.context();

    info!("Checking assets in {}", project_dir.display());
    let report = auditor
        .run()
        .with_context(|| format!("asset audit of {} failed", project_dir.display()))?;

    for warning in &report.warnings {
        warn!("{warning}");
    }

    match report.outcome {
        AuditOutcome::NothingDeclared => {
            info!(
                "No assets declared in {}; nothing to compare",
                context.layout.manifest_file
            );
        }
        AuditOutcome::NothingFound => {
            info!(
                "No asset files found in {}; nothing to compare",
                context.asset_dir().display()
            );
        }
        AuditOutcome::Completed {
            result,
            report_path,
        } => {
            for line in render_summary(&result, &context.layout.manifest_file, &report_path) {
                match line.severity {
                    Severity::Info => info!("{}", line.text),
                    Severity::Warning => warn!("{}", line.text),
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn project_dir_is_required() {
        let err = Cli::try_parse_from(["asset_sweep", "unused"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn parses_unused_command() {
        let cli = Cli::try_parse_from(["asset_sweep", "-v", "unused", "-d", "app"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Unused {
                project_dir,
                config,
            } => {
                assert_eq!(project_dir, PathBuf::from("app"));
                assert!(config.is_none());
            }
        }
    }
}
