//! Reconcile the request with the checkouts and the database, then decide how to launch.

use tracing::{debug, info, warn};

use crate::{
    config::LauncherConfig,
    inspect::{DbInspector, ReleaseInspector, VcsInspector},
    lib::{
        errors::ConfigureError,
        prompt::Confirm,
        style,
        telemetry::{self, RequestTelemetry},
    },
};

use super::{
    assemble::build_server_arg_string, LaunchDecision, LaunchRequest, StatusReport,
};

pub const CONTINUE_PROMPT: &str = "do you want to continue?";

/// Decides, once per run, whether and how the server is started.
pub struct LaunchConfigurator<'a, V, D, C> {
    config: &'a LauncherConfig,
    vcs: &'a V,
    db: &'a D,
    confirm: &'a C,
}

impl<'a, V, D, C> LaunchConfigurator<'a, V, D, C>
where
    V: VcsInspector,
    D: DbInspector,
    C: Confirm,
{
    pub fn new(config: &'a LauncherConfig, vcs: &'a V, db: &'a D, confirm: &'a C) -> Self {
        Self {
            config,
            vcs,
            db,
            confirm,
        }
    }

    /// Read-only snapshot of server, database and branches. Touches nothing.
    pub fn status<R: ReleaseInspector>(&self, release: &R) -> Result<StatusReport, ConfigureError> {
        let workspace = &self.config.workspace;
        let community_branch =
            self.vcs
                .observe(&workspace.community)
                .map_err(|source| ConfigureError::Branch {
                    checkout: "community",
                    source,
                })?;
        let enterprise_branch =
            self.vcs
                .observe(&workspace.enterprise)
                .map_err(|source| ConfigureError::Branch {
                    checkout: "enterprise",
                    source,
                })?;

        Ok(StatusReport {
            server_version: release.server_version(),
            database_name: self.config.database.name.clone(),
            db: self.db.flavor(&self.config.database.name),
            community_branch,
            enterprise_branch,
        })
    }

    /// Drop the database if asked, run the consistency checks, and assemble the arguments.
    ///
    /// A status request touches nothing and is answered with [`LaunchDecision::ShowStatus`];
    /// the caller then renders [`Self::status`].
    pub fn decide(&self, request: &LaunchRequest) -> Result<LaunchDecision, ConfigureError> {
        if request.status_requested() {
            debug!(target: "start_odoo::launch", "Status requested; skipping launch checks");
            return Ok(LaunchDecision::ShowStatus);
        }

        telemetry::emit_request(&RequestTelemetry {
            enterprise: request.enterprise_requested(),
            test_mode: request.test_mode(),
            web_test_mode: request.web_test_mode(),
            drop_db: request.drop_db_requested(),
            passthrough_args: request.passthrough_args(),
        });

        let database = &self.config.database.name;
        if request.drop_db_requested() {
            self.db.drop_database(database).map_err(|source| {
                warn!(
                    target: "start_odoo::launch",
                    database = %database,
                    exit_code = source.exit_code(),
                    "Dropping the database failed"
                );
                ConfigureError::DropDatabase {
                    database: database.clone(),
                    source,
                }
            })?;
            info!(target: "start_odoo::launch", database = %database, "Dropped database");
        }

        if request.enterprise_requested() && !self.branches_confirmed()? {
            return Ok(LaunchDecision::user_cancelled());
        }

        // A dropped database no longer says anything about the requested flavor.
        if !request.drop_db_requested() {
            let observation = self.db.flavor(database);
            let db_is_enterprise = observation.is_enterprise();
            if db_is_enterprise != request.enterprise_requested() {
                warn!(
                    target: "start_odoo::launch",
                    database = %database,
                    db = %observation,
                    enterprise_requested = request.enterprise_requested(),
                    "Requested flavor does not match the database"
                );
                return Ok(LaunchDecision::flavor_mismatch(db_is_enterprise));
            }
        }

        let args = build_server_arg_string(request, &self.config.database);
        debug!(target: "start_odoo::launch", args = %args, "Assembled server arguments");
        Ok(LaunchDecision::Proceed { args })
    }

    /// Warn and ask when the two checkouts are on different branches.
    fn branches_confirmed(&self) -> Result<bool, ConfigureError> {
        let workspace = &self.config.workspace;
        let community = self
            .vcs
            .current_branch(&workspace.community)
            .map_err(|source| ConfigureError::Branch {
                checkout: "community",
                source,
            })?;
        let enterprise = self
            .vcs
            .current_branch(&workspace.enterprise)
            .map_err(|source| ConfigureError::Branch {
                checkout: "enterprise",
                source,
            })?;

        if community == enterprise {
            return Ok(true);
        }

        warn!(
            target: "start_odoo::launch",
            community = %community,
            enterprise = %enterprise,
            "Community and enterprise branches differ"
        );
        println!("{}", branch_mismatch_warning(&community, &enterprise));
        Ok(self.confirm.confirm(CONTINUE_PROMPT, true))
    }
}

pub fn branch_mismatch_warning(community: &str, enterprise: &str) -> String {
    format!(
        "{} community and enterprise branches do not match: {} != {}",
        style::warning("Warning:"),
        style::ident(community),
        style::ident(enterprise)
    )
}
