use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_DB_NAME: &str = "testdb";
pub const DEFAULT_DB_USER: &str = "odoo";
pub const DEFAULT_DB_PASSWORD: &str = "odoo";

/// Database the launched server works on, with the credentials passed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSection {
    pub name: String,
    pub user: String,
    pub password: String,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            name: DEFAULT_DB_NAME.into(),
            user: DEFAULT_DB_USER.into(),
            password: DEFAULT_DB_PASSWORD.into(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawDatabaseSection {
    pub name: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

pub fn parse_database_section(
    raw: Option<RawDatabaseSection>,
    path: &Path,
) -> Result<DatabaseSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let name = raw.name.unwrap_or_else(|| DEFAULT_DB_NAME.to_string());
    let user = raw.user.unwrap_or_else(|| DEFAULT_DB_USER.to_string());
    let password = raw
        .password
        .unwrap_or_else(|| DEFAULT_DB_PASSWORD.to_string());

    validate_identifier(&name, "database.name", path)?;
    validate_identifier(&user, "database.user", path)?;

    Ok(DatabaseSection {
        name,
        user,
        password,
    })
}

fn validate_identifier(value: &str, field: &'static str, path: &Path) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField {
            path: path.to_path_buf(),
            field,
        });
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "must not contain whitespace".into(),
        });
    }
    Ok(())
}
