//! LaunchProfile and config path resolution.
use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use crate::config::{ConfigSource, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

use super::ParsedCommand;

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub config_path: PathBuf,
    pub config_source: ConfigSource,
    pub command: ParsedCommand,
}

/// Resolve config path in the order: CLI override → env var → default.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<(PathBuf, ConfigSource)> {
    let (path, source) = match override_path {
        Some(path) => (path, ConfigSource::Cli),
        None => match env::var_os(CONFIG_ENV_KEY).filter(|value| !value.is_empty()) {
            Some(value) => (PathBuf::from(value), ConfigSource::Env),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), ConfigSource::Default),
        },
    };

    if path.is_absolute() {
        return Ok((path, source));
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok((cwd.join(path), source))
}
