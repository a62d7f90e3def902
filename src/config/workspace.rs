use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_COMMUNITY_DIR: &str = "community";
pub const DEFAULT_ENTERPRISE_DIR: &str = "enterprise";

/// Locations of the two git checkouts, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceSection {
    pub community: PathBuf,
    pub enterprise: PathBuf,
}

impl Default for WorkspaceSection {
    fn default() -> Self {
        Self {
            community: PathBuf::from(DEFAULT_COMMUNITY_DIR),
            enterprise: PathBuf::from(DEFAULT_ENTERPRISE_DIR),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawWorkspaceSection {
    pub community: Option<PathBuf>,
    pub enterprise: Option<PathBuf>,
}

pub fn parse_workspace_section(
    raw: Option<RawWorkspaceSection>,
    path: &Path,
) -> Result<WorkspaceSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let community = raw
        .community
        .unwrap_or_else(|| PathBuf::from(DEFAULT_COMMUNITY_DIR));
    let enterprise = raw
        .enterprise
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENTERPRISE_DIR));

    for (field, dir) in [
        ("workspace.community", &community),
        ("workspace.enterprise", &enterprise),
    ] {
        if dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                path: path.to_path_buf(),
                field,
            });
        }
    }

    Ok(WorkspaceSection {
        community,
        enterprise,
    })
}
