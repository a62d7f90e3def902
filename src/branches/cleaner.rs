//! Interactive removal of branches that are not checked out anywhere.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    config::WorkspaceSection,
    inspect::VcsInspector,
    lib::{prompt::Confirm, style},
};

use super::BranchInventory;

/// What the cleaner did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanSummary {
    pub skipped: Vec<String>,
    pub removed: Vec<String>,
    pub kept: Vec<String>,
}

/// Walk the inventory and force-delete each branch the user confirms, in every checkout holding it.
pub fn clean_branches<V, C, W>(
    vcs: &V,
    confirm: &C,
    workspace: &WorkspaceSection,
    out: &mut W,
) -> Result<CleanSummary>
where
    V: VcsInspector,
    C: Confirm,
    W: Write,
{
    let inventory = BranchInventory::collect(vcs, workspace)?;
    let mut summary = CleanSummary::default();

    writeln!(out, "Branch cleaner tool")?;
    writeln!(out, "-------------------")?;
    writeln!(out, "Found {} branches\n", inventory.len())?;

    for entry in inventory.entries() {
        let name = style::ident(&entry.name);
        if entry.is_current() {
            writeln!(out, "skipping '{name}' (currently in use)")?;
            summary.skipped.push(entry.name.clone());
            continue;
        }

        out.flush()?;
        let prompt = format!("remove '{name}' ({})?", entry.checkouts().join(", "));
        if !confirm.confirm(&prompt, false) {
            summary.kept.push(entry.name.clone());
            continue;
        }

        for checkout in entry.checkouts() {
            let dir = if checkout == "community" {
                &workspace.community
            } else {
                &workspace.enterprise
            };
            let report = vcs
                .delete_branch(dir, &entry.name)
                .with_context(|| format!("failed to delete {} in {}", entry.name, dir.display()))?;
            writeln!(out, "{report}")?;
            info!(
                target: "start_odoo::branches",
                branch = %entry.name,
                checkout,
                "Deleted branch"
            );
        }
        summary.removed.push(entry.name.clone());
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        collections::HashMap,
        path::{Path, PathBuf},
    };

    use crate::{inspect::ListedBranch, lib::errors::CommandError};

    use super::*;

    #[derive(Default)]
    struct RepoFake {
        branches: HashMap<PathBuf, Vec<ListedBranch>>,
        deleted: RefCell<Vec<(PathBuf, String)>>,
    }

    impl RepoFake {
        fn with(mut self, checkout: &str, names: &[(&str, bool)]) -> Self {
            self.branches.insert(
                PathBuf::from(checkout),
                names
                    .iter()
                    .map(|(name, current)| ListedBranch {
                        name: (*name).into(),
                        current: *current,
                    })
                    .collect(),
            );
            self
        }
    }

    impl VcsInspector for RepoFake {
        fn current_branch(&self, _checkout: &Path) -> Result<String, CommandError> {
            unreachable!("cleaner only lists and deletes")
        }

        fn is_dirty(&self, _checkout: &Path) -> Result<bool, CommandError> {
            unreachable!("cleaner only lists and deletes")
        }

        fn list_branches(&self, checkout: &Path) -> Result<Vec<ListedBranch>, CommandError> {
            Ok(self.branches.get(checkout).cloned().unwrap_or_default())
        }

        fn delete_branch(&self, checkout: &Path, branch: &str) -> Result<String, CommandError> {
            self.deleted
                .borrow_mut()
                .push((checkout.to_path_buf(), branch.to_string()));
            Ok(format!("Deleted branch {branch} (was abc1234)."))
        }
    }

    struct AnswerFor(&'static str);

    impl Confirm for AnswerFor {
        fn confirm(&self, prompt: &str, default: bool) -> bool {
            assert!(!default, "removal must default to no");
            prompt.contains(self.0)
        }
    }

    #[test]
    fn confirmed_branch_is_deleted_everywhere_and_current_is_skipped() {
        colored::control::set_override(false);
        let vcs = RepoFake::default()
            .with("community", &[("17.0", true), ("17.0-old", false)])
            .with("enterprise", &[("17.0", true), ("17.0-old", false), ("wip", false)]);
        let mut out = Vec::new();

        let summary = clean_branches(
            &vcs,
            &AnswerFor("17.0-old"),
            &WorkspaceSection::default(),
            &mut out,
        )
        .expect("cleaning should succeed");

        assert_eq!(summary.skipped, ["17.0"]);
        assert_eq!(summary.removed, ["17.0-old"]);
        assert_eq!(summary.kept, ["wip"]);
        assert_eq!(
            *vcs.deleted.borrow(),
            vec![
                (PathBuf::from("community"), "17.0-old".to_string()),
                (PathBuf::from("enterprise"), "17.0-old".to_string()),
            ]
        );

        let printed = String::from_utf8(out).expect("utf-8 output");
        assert!(printed.starts_with("Branch cleaner tool\n-------------------\nFound 3 branches\n\n"));
        assert!(printed.contains("skipping '17.0' (currently in use)"));
        assert!(printed.contains("Deleted branch 17.0-old (was abc1234)."));
    }

    #[test]
    fn declining_everything_deletes_nothing() {
        let vcs = RepoFake::default()
            .with("community", &[("main", true), ("topic", false)])
            .with("enterprise", &[("main", true)]);
        let mut out = Vec::new();

        let summary = clean_branches(
            &vcs,
            &AnswerFor("no branch has this name"),
            &WorkspaceSection::default(),
            &mut out,
        )
        .expect("cleaning should succeed");

        assert!(summary.removed.is_empty());
        assert_eq!(summary.kept, ["topic"]);
        assert!(vcs.deleted.borrow().is_empty());
    }
}
