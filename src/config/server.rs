use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_SERVER_COMMAND: &str = "source env15/bin/activate;cd community;./odoo-bin";
pub const DEFAULT_SHELL: &str = "/bin/bash";
pub const DEFAULT_RELEASE_FILE: &str = "community/odoo/release.py";

/// How the Odoo server is started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSection {
    /// Shell snippet the assembled arguments are appended to.
    pub command: String,
    pub shell: PathBuf,
    /// `release.py` holding the server's `version_info`.
    pub release_file: PathBuf,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            command: DEFAULT_SERVER_COMMAND.into(),
            shell: PathBuf::from(DEFAULT_SHELL),
            release_file: PathBuf::from(DEFAULT_RELEASE_FILE),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawServerSection {
    pub command: Option<String>,
    pub shell: Option<PathBuf>,
    pub release_file: Option<PathBuf>,
}

pub fn parse_server_section(
    raw: Option<RawServerSection>,
    path: &Path,
) -> Result<ServerSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let command = raw
        .command
        .unwrap_or_else(|| DEFAULT_SERVER_COMMAND.to_string());
    if command.trim().is_empty() {
        return Err(ConfigError::MissingField {
            path: path.to_path_buf(),
            field: "server.command",
        });
    }

    let shell = raw.shell.unwrap_or_else(|| PathBuf::from(DEFAULT_SHELL));
    if shell.as_os_str().is_empty() {
        return Err(ConfigError::MissingField {
            path: path.to_path_buf(),
            field: "server.shell",
        });
    }

    let release_file = raw
        .release_file
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RELEASE_FILE));

    Ok(ServerSection {
        command,
        shell,
        release_file,
    })
}
