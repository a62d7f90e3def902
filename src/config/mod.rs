//! Load and validate the launcher configuration.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::error;

use crate::lib::errors::ConfigError;

pub mod database;
pub mod server;
pub mod telemetry;
pub mod workspace;

pub use database::{
    parse_database_section, DatabaseSection, RawDatabaseSection, DEFAULT_DB_NAME,
    DEFAULT_DB_PASSWORD, DEFAULT_DB_USER,
};
pub use server::{
    parse_server_section, RawServerSection, ServerSection, DEFAULT_RELEASE_FILE,
    DEFAULT_SERVER_COMMAND, DEFAULT_SHELL,
};
pub use workspace::{
    parse_workspace_section, RawWorkspaceSection, WorkspaceSection, DEFAULT_COMMUNITY_DIR,
    DEFAULT_ENTERPRISE_DIR,
};

pub const CONFIG_ENV_KEY: &str = "START_ODOO_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "start-odoo.toml";

/// Where the configuration path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    Env,
    Default,
}

impl ConfigSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigSource::Cli => "cli",
            ConfigSource::Env => "env",
            ConfigSource::Default => "default",
        }
    }

    /// Only explicitly requested files must exist.
    pub const fn is_required(&self) -> bool {
        !matches!(self, ConfigSource::Default)
    }
}

/// Immutable launcher configuration, built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub database: DatabaseSection,
    pub workspace: WorkspaceSection,
    pub server: ServerSection,
    pub source_path: PathBuf,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            database: DatabaseSection::default(),
            workspace: WorkspaceSection::default(),
            server: ServerSection::default(),
            source_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawLauncherConfig {
    database: Option<RawDatabaseSection>,
    workspace: Option<RawWorkspaceSection>,
    server: Option<RawServerSection>,
}

impl LauncherConfig {
    /// Load configuration from `path`; a missing file is an error only for explicit sources.
    pub fn load_from_path(path: PathBuf, source: ConfigSource) -> Result<Self, ConfigError> {
        telemetry::log_source(&path, source);

        let builder = config::Config::builder().add_source(
            config::File::from(path.clone())
                .format(config::FileFormat::Toml)
                .required(source.is_required()),
        );
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "start_odoo::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "start_odoo::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "start_odoo::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawLauncherConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let database = parse_database_section(raw.database, &path)?;
        let workspace = parse_workspace_section(raw.workspace, &path)?;
        let server = parse_server_section(raw.server, &path)?;

        Ok(Self {
            database,
            workspace,
            server,
            source_path: path,
        })
    }
}
