use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating the launcher configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into the raw sections.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required field is missing or blank.
    #[error("Configuration file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failure of an external tool (`git`, `psql`, `dropdb`) run through [`crate::lib::shell`].
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Failed to run `{program}` in {cwd}: {source}")]
    Spawn {
        program: String,
        cwd: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` exited abnormally (exit={exit_code:?}): {stderr}")]
    Failed {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },
    #[error("Probe `{name}` failed: {message}")]
    Probe { name: &'static str, message: String },
}

impl CommandError {
    /// Exit code reported by the tool, if it ran at all.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CommandError::Failed { exit_code, .. } => *exit_code,
            _ => None,
        }
    }
}

/// The server process could not be started.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Failed to start `{shell}` for the server command: {source}")]
    Spawn {
        shell: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Fatal failures raised while deciding how to launch.
#[derive(Debug, Error)]
pub enum ConfigureError {
    #[error("Failed to drop database `{database}`")]
    DropDatabase {
        database: String,
        #[source]
        source: CommandError,
    },
    #[error("Failed to read the current branch of the {checkout} checkout")]
    Branch {
        checkout: &'static str,
        #[source]
        source: CommandError,
    },
}
