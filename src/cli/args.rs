//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::launch::LaunchRequest;

use super::{resolve_config_path, LaunchProfile};

/// What the run is going to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// Print server, database and branch status.
    Status,
    /// Branch housekeeping; never launches anything.
    Cli(CliCommand),
    /// Configure and start the server.
    Launch(LaunchRequest),
}

/// Auxiliary branch commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    ListBranches,
    CleanBranches,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "start-odoo",
    author,
    version,
    about = "Start a local Odoo server with the right addons path, database checks and test flags",
    long_about = None,
    after_help = "Arguments after `--` are passed to odoo-bin unchanged, e.g. `start-odoo -e -- -u sale`."
)]
pub struct LaunchArgs {
    /// Activate enterprise addons.
    #[arg(short = 'e', long)]
    pub enterprise: bool,
    /// Run tests.
    #[arg(short = 't', long)]
    pub test: bool,
    /// Run the web test suite (implies --test).
    #[arg(short = 'w', long)]
    pub web: bool,
    /// Drop the database before starting.
    #[arg(short = 'd', long)]
    pub drop_db: bool,
    /// Show Odoo version and current branches.
    #[arg(short = 's', long)]
    pub status: bool,
    /// List all git branches of both checkouts.
    #[arg(short = 'l', long)]
    pub list_branches: bool,
    /// Interactively delete git branches that are not checked out.
    #[arg(long)]
    pub clean_branches: bool,
    /// Path to start-odoo.toml (overrides START_ODOO_CONFIG).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Arguments forwarded verbatim to odoo-bin.
    #[arg(last = true, allow_hyphen_values = true, value_name = "ODOO_ARGS")]
    pub odoo_args: Vec<String>,
}

impl LaunchArgs {
    /// Status wins over branch commands, which win over launching.
    pub fn command(&self) -> ParsedCommand {
        if self.status {
            return ParsedCommand::Status;
        }
        if self.clean_branches {
            return ParsedCommand::Cli(CliCommand::CleanBranches);
        }
        if self.list_branches {
            return ParsedCommand::Cli(CliCommand::ListBranches);
        }
        ParsedCommand::Launch(self.request())
    }

    pub fn request(&self) -> LaunchRequest {
        LaunchRequest::builder()
            .enterprise(self.enterprise)
            .test_mode(self.test)
            .web_test_mode(self.web)
            .drop_db(self.drop_db)
            .status(self.status)
            .passthrough_args(self.odoo_args.iter().cloned())
            .build()
    }

    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn into_profile(self) -> Result<LaunchProfile> {
        let command = self.command();
        let (config_path, config_source) = resolve_config_path(self.config_override)?;
        Ok(LaunchProfile {
            config_path,
            config_source,
            command,
        })
    }
}
