//! CLI entrypoint module structure.
use std::io::Write;

use anyhow::Result;

use crate::{
    branches::{clean_branches, BranchInventory},
    config::WorkspaceSection,
    inspect::VcsInspector,
    lib::prompt::Confirm,
};

pub mod args;
pub mod profile;

pub use args::{CliCommand, LaunchArgs, ParsedCommand};
pub use profile::{resolve_config_path, LaunchProfile};

/// Execute a branch command, writing its user-facing output to `out`.
pub fn execute_cli_command<V, C, W>(
    command: CliCommand,
    workspace: &WorkspaceSection,
    vcs: &V,
    confirm: &C,
    out: &mut W,
) -> Result<()>
where
    V: VcsInspector,
    C: Confirm,
    W: Write,
{
    match command {
        CliCommand::ListBranches => {
            let inventory = BranchInventory::collect(vcs, workspace)?;
            if !inventory.is_empty() {
                writeln!(out, "{}", inventory.render_table())?;
            }
        }
        CliCommand::CleanBranches => {
            let summary = clean_branches(vcs, confirm, workspace, out)?;
            tracing::debug!(
                target: "start_odoo::branches",
                removed = summary.removed.len(),
                kept = summary.kept.len(),
                skipped = summary.skipped.len(),
                "Branch cleaning finished"
            );
        }
    }
    Ok(())
}
