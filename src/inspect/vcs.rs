//! Git checkout inspection.

use std::{fmt, path::Path};

use crate::lib::{errors::CommandError, shell::run_command};

/// Marker appended to a branch name when the checkout has uncommitted changes.
pub const DIRTY_MARKER: &str = " (*)";

/// Current branch of one checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchObservation {
    pub name: String,
    pub dirty: bool,
}

impl fmt::Display for BranchObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.dirty {
            f.write_str(DIRTY_MARKER)?;
        }
        Ok(())
    }
}

/// One line of `git branch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedBranch {
    pub name: String,
    pub current: bool,
}

/// Read-mostly access to a git checkout.
pub trait VcsInspector {
    fn current_branch(&self, checkout: &Path) -> Result<String, CommandError>;
    fn is_dirty(&self, checkout: &Path) -> Result<bool, CommandError>;
    fn list_branches(&self, checkout: &Path) -> Result<Vec<ListedBranch>, CommandError>;
    /// Force-delete `branch`, returning the tool's report.
    fn delete_branch(&self, checkout: &Path, branch: &str) -> Result<String, CommandError>;

    /// Current branch together with the dirty flag.
    fn observe(&self, checkout: &Path) -> Result<BranchObservation, CommandError> {
        Ok(BranchObservation {
            name: self.current_branch(checkout)?,
            dirty: self.is_dirty(checkout)?,
        })
    }
}

/// Inspector backed by the `git` binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitInspector;

impl VcsInspector for GitInspector {
    fn current_branch(&self, checkout: &Path) -> Result<String, CommandError> {
        run_command("git", &["branch", "--show-current"], checkout)
    }

    fn is_dirty(&self, checkout: &Path) -> Result<bool, CommandError> {
        let porcelain = run_command("git", &["status", "--porcelain"], checkout)?;
        Ok(!porcelain.is_empty())
    }

    fn list_branches(&self, checkout: &Path) -> Result<Vec<ListedBranch>, CommandError> {
        let stdout = run_command("git", &["branch"], checkout)?;
        Ok(parse_branch_listing(&stdout))
    }

    fn delete_branch(&self, checkout: &Path, branch: &str) -> Result<String, CommandError> {
        run_command("git", &["branch", "-D", branch], checkout)
    }
}

/// Parse `git branch` output. The first two columns hold the `* ` current-branch marker.
pub fn parse_branch_listing(stdout: &str) -> Vec<ListedBranch> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| ListedBranch {
            current: line.starts_with("* "),
            name: line.get(2..).unwrap_or_default().trim().to_string(),
        })
        .collect()
}
