//! PostgreSQL inspection through `psql` / `dropdb`.

use std::{fmt, path::Path};

use tracing::warn;

use crate::lib::{errors::CommandError, shell::run_command};

/// Module whose installed state marks an enterprise database.
pub const ENTERPRISE_MARKER_MODULE: &str = "web_enterprise";

const VERSION_QUERY: &str = "SELECT latest_version FROM ir_module_module WHERE name='base'";
const ENTERPRISE_QUERY: &str = "SELECT count(*) FROM ir_module_module \
     WHERE name='web_enterprise' AND state='installed'";

/// Shown in place of a version the inspector could not determine.
pub const UNKNOWN_VERSION: &str = "?";

/// What the database says about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbObservation {
    Known { version: String, enterprise: bool },
    /// The database could not be queried or answered something unparsable.
    Unknown,
}

impl DbObservation {
    /// `Unknown` counts as not enterprise.
    pub fn is_enterprise(&self) -> bool {
        matches!(
            self,
            DbObservation::Known {
                enterprise: true,
                ..
            }
        )
    }
}

impl fmt::Display for DbObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbObservation::Known {
                version,
                enterprise: true,
            } => write!(f, "{version} (enterprise)"),
            DbObservation::Known { version, .. } => f.write_str(version),
            DbObservation::Unknown => f.write_str(UNKNOWN_VERSION),
        }
    }
}

pub trait DbInspector {
    /// Never fails: any problem is reported as [`DbObservation::Unknown`].
    fn flavor(&self, database: &str) -> DbObservation;
    fn drop_database(&self, database: &str) -> Result<(), CommandError>;
}

/// Inspector backed by the PostgreSQL client tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct PsqlInspector;

impl PsqlInspector {
    fn query(&self, database: &str, sql: &str) -> Result<String, CommandError> {
        run_command("psql", &[database, "-tA", "-c", sql], Path::new("."))
    }

    fn try_flavor(&self, database: &str) -> Result<DbObservation, CommandError> {
        let version =
            parse_version_output(&self.query(database, VERSION_QUERY)?).ok_or_else(|| {
                CommandError::Probe {
                    name: "psql",
                    message: "base module has no latest_version".into(),
                }
            })?;
        let installed =
            parse_count_output(&self.query(database, ENTERPRISE_QUERY)?).ok_or_else(|| {
                CommandError::Probe {
                    name: "psql",
                    message: format!("unexpected count for {ENTERPRISE_MARKER_MODULE}"),
                }
            })?;
        Ok(DbObservation::Known {
            version,
            enterprise: installed > 0,
        })
    }
}

impl DbInspector for PsqlInspector {
    fn flavor(&self, database: &str) -> DbObservation {
        self.try_flavor(database).unwrap_or_else(|err| {
            warn!(
                target: "start_odoo::inspect",
                database,
                exit_code = err.exit_code(),
                reason = %err,
                "Database flavor unknown; treating it as not enterprise"
            );
            DbObservation::Unknown
        })
    }

    fn drop_database(&self, database: &str) -> Result<(), CommandError> {
        run_command("dropdb", &[database], Path::new(".")).map(|_| ())
    }
}

/// Reduce `latest_version` (e.g. `17.0.1.3`) to the server series (`17.0`).
pub fn parse_version_output(stdout: &str) -> Option<String> {
    let line = stdout.lines().map(str::trim).find(|line| !line.is_empty())?;
    let series: Vec<&str> = line.split('.').take(2).collect();
    if series.len() < 2 || series.iter().any(|part| part.is_empty()) {
        return None;
    }
    Some(series.join("."))
}

pub fn parse_count_output(stdout: &str) -> Option<u64> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())?
        .parse()
        .ok()
}
