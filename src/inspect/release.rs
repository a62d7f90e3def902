//! Server identity read from Odoo's `release.py`.

use std::{fs, path::PathBuf};

use tracing::warn;

pub trait ReleaseInspector {
    /// Display version such as `17.0` or `saas~17.1`, `None` when unknown.
    fn server_version(&self) -> Option<String>;
}

/// Reads `version_info` from a `release.py` on disk.
#[derive(Debug, Clone)]
pub struct ReleaseFile {
    path: PathBuf,
}

impl ReleaseFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ReleaseInspector for ReleaseFile {
    fn server_version(&self) -> Option<String> {
        let source = match fs::read_to_string(&self.path) {
            Ok(source) => source,
            Err(err) => {
                warn!(
                    target: "start_odoo::inspect",
                    path = %self.path.display(),
                    reason = %err,
                    "Failed to read release file"
                );
                return None;
            }
        };
        let version = parse_release_version(&source);
        if version.is_none() {
            warn!(
                target: "start_odoo::inspect",
                path = %self.path.display(),
                "release file has no parsable version_info"
            );
        }
        version
    }
}

/// Render `version_info = (major, minor, micro, level, serial[, suffix])` the way Odoo does:
/// `major.minor` + level tag + serial (when non-zero) + suffix.
pub fn parse_release_version(source: &str) -> Option<String> {
    let line = source
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("version_info") && line.contains('='))?;
    let tuple = line.split_once('(')?.1.split_once(')')?.0;
    let parts: Vec<&str> = tuple.split(',').map(|part| unquote(part.trim())).collect();
    if parts.len() < 5 {
        return None;
    }

    let level = match parts[3] {
        "FINAL" | "final" => "",
        "ALPHA" | "alpha" => "alpha",
        "BETA" | "beta" => "beta",
        "RELEASE_CANDIDATE" | "candidate" | "rc" => "rc",
        _ => return None,
    };
    let serial = match parts[4] {
        "0" | "" => "",
        other => other,
    };
    let suffix = parts.get(5).copied().unwrap_or_default();

    Some(format!("{}.{}{level}{serial}{suffix}", parts[0], parts[1]))
}

fn unquote(value: &str) -> &str {
    value.trim_matches(|c| c == '\'' || c == '"')
}
