//! Environment-driven inspector standing in for `git` and `psql`.
//!
//! Selected with `START_ODOO_PROBE=env`; used by the integration tests.

use std::{env, path::Path};

use crate::{
    config::WorkspaceSection,
    lib::errors::CommandError,
};

use super::{
    db::{DbInspector, DbObservation},
    vcs::{ListedBranch, VcsInspector},
};

pub const COMMUNITY_BRANCH_ENV: &str = "START_ODOO_COMMUNITY_BRANCH";
pub const ENTERPRISE_BRANCH_ENV: &str = "START_ODOO_ENTERPRISE_BRANCH";
pub const DIRTY_ENV: &str = "START_ODOO_DIRTY";
pub const DB_VERSION_ENV: &str = "START_ODOO_DB_VERSION";
pub const DB_ENTERPRISE_ENV: &str = "START_ODOO_DB_ENTERPRISE";
pub const DROP_FAIL_ENV: &str = "START_ODOO_DROP_FAIL";

#[derive(Debug, Clone)]
pub struct EnvInspector {
    workspace: WorkspaceSection,
}

impl EnvInspector {
    pub fn new(workspace: WorkspaceSection) -> Self {
        Self { workspace }
    }

    fn checkout_name(&self, checkout: &Path) -> Result<&'static str, CommandError> {
        if checkout == self.workspace.community {
            Ok("community")
        } else if checkout == self.workspace.enterprise {
            Ok("enterprise")
        } else {
            Err(CommandError::Probe {
                name: "env",
                message: format!("{} is not a configured checkout", checkout.display()),
            })
        }
    }

    fn branch_var(&self, checkout: &Path) -> Result<&'static str, CommandError> {
        Ok(match self.checkout_name(checkout)? {
            "community" => COMMUNITY_BRANCH_ENV,
            _ => ENTERPRISE_BRANCH_ENV,
        })
    }
}

impl VcsInspector for EnvInspector {
    fn current_branch(&self, checkout: &Path) -> Result<String, CommandError> {
        let var = self.branch_var(checkout)?;
        env::var(var).map_err(|_| CommandError::Probe {
            name: "env",
            message: format!("{var} is not set"),
        })
    }

    fn is_dirty(&self, checkout: &Path) -> Result<bool, CommandError> {
        let name = self.checkout_name(checkout)?;
        Ok(env::var(DIRTY_ENV)
            .unwrap_or_default()
            .split(',')
            .any(|entry| entry.trim() == name))
    }

    fn list_branches(&self, checkout: &Path) -> Result<Vec<ListedBranch>, CommandError> {
        Ok(vec![ListedBranch {
            name: self.current_branch(checkout)?,
            current: true,
        }])
    }

    fn delete_branch(&self, checkout: &Path, branch: &str) -> Result<String, CommandError> {
        self.checkout_name(checkout)?;
        Ok(format!("Deleted branch {branch}"))
    }
}

impl DbInspector for EnvInspector {
    fn flavor(&self, _database: &str) -> DbObservation {
        match env::var(DB_VERSION_ENV) {
            Ok(version) if !version.trim().is_empty() => DbObservation::Known {
                version,
                enterprise: matches!(
                    env::var(DB_ENTERPRISE_ENV)
                        .unwrap_or_default()
                        .to_lowercase()
                        .as_str(),
                    "1" | "true" | "yes"
                ),
            },
            _ => DbObservation::Unknown,
        }
    }

    fn drop_database(&self, database: &str) -> Result<(), CommandError> {
        if env::var_os(DROP_FAIL_ENV).is_some() {
            return Err(CommandError::Failed {
                command: format!("dropdb {database}"),
                exit_code: Some(1),
                stderr: format!("dropdb: error: database \"{database}\" does not exist"),
            });
        }
        Ok(())
    }
}
