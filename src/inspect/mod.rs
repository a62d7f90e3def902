//! Collaborators that observe the environment: git checkouts, the database, the server release.
mod env;

pub mod db;
pub mod release;
pub mod vcs;

use std::env as std_env;

pub use db::{DbInspector, DbObservation, PsqlInspector};
pub use env::EnvInspector;
pub use release::{ReleaseFile, ReleaseInspector};
pub use vcs::{BranchObservation, GitInspector, ListedBranch, VcsInspector};

pub const PROBE_ENV: &str = "START_ODOO_PROBE";

/// Which inspector implementation a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMode {
    System,
    Env,
}

impl ProbeMode {
    pub fn from_env() -> Self {
        match std_env::var(PROBE_ENV).ok().as_deref() {
            Some("env") | Some("mock") => ProbeMode::Env,
            _ => ProbeMode::System,
        }
    }
}
