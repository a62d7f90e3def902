//! Merged view of the local branches of both checkouts.

use anyhow::{Context, Result};

use crate::{
    config::WorkspaceSection,
    inspect::{ListedBranch, VcsInspector},
};

/// One branch name and where it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchEntry {
    pub name: String,
    pub in_community: bool,
    pub in_enterprise: bool,
    pub current_in_community: bool,
    pub current_in_enterprise: bool,
}

impl BranchEntry {
    fn new(name: String) -> Self {
        Self {
            name,
            in_community: false,
            in_enterprise: false,
            current_in_community: false,
            current_in_enterprise: false,
        }
    }

    /// Checked out in at least one checkout.
    pub fn is_current(&self) -> bool {
        self.current_in_community || self.current_in_enterprise
    }

    pub fn checkouts(&self) -> Vec<&'static str> {
        let mut checkouts = Vec::with_capacity(2);
        if self.in_community {
            checkouts.push("community");
        }
        if self.in_enterprise {
            checkouts.push("enterprise");
        }
        checkouts
    }

    /// `X*` style presence columns: `X` exists, `*` checked out.
    pub fn status_columns(&self) -> String {
        let column = |present: bool, current: bool| {
            format!(
                "{}{}",
                if present { 'X' } else { ' ' },
                if current { '*' } else { ' ' }
            )
        };
        format!(
            "{} {}",
            column(self.in_community, self.current_in_community),
            column(self.in_enterprise, self.current_in_enterprise)
        )
    }
}

/// Branches ordered by first appearance: community listing first, then enterprise-only ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchInventory {
    entries: Vec<BranchEntry>,
}

impl BranchInventory {
    pub fn merge(community: Vec<ListedBranch>, enterprise: Vec<ListedBranch>) -> Self {
        let mut inventory = Self::default();
        for branch in community {
            let entry = inventory.entry(branch.name);
            entry.in_community = true;
            entry.current_in_community |= branch.current;
        }
        for branch in enterprise {
            let entry = inventory.entry(branch.name);
            entry.in_enterprise = true;
            entry.current_in_enterprise |= branch.current;
        }
        inventory
    }

    /// List both checkouts; any git failure aborts.
    pub fn collect<V: VcsInspector>(vcs: &V, workspace: &WorkspaceSection) -> Result<Self> {
        let community = vcs.list_branches(&workspace.community).with_context(|| {
            format!(
                "failed to list branches in {}",
                workspace.community.display()
            )
        })?;
        let enterprise = vcs.list_branches(&workspace.enterprise).with_context(|| {
            format!(
                "failed to list branches in {}",
                workspace.enterprise.display()
            )
        })?;
        Ok(Self::merge(community, enterprise))
    }

    pub fn entries(&self) -> &[BranchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One `XX XX | name` row per branch.
    pub fn render_table(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{} | {}", entry.status_columns(), entry.name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn entry(&mut self, name: String) -> &mut BranchEntry {
        let index = match self.entries.iter().position(|entry| entry.name == name) {
            Some(index) => index,
            None => {
                self.entries.push(BranchEntry::new(name));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index]
    }
}
