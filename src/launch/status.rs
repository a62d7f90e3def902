//! Read-only status report: server release, database flavor and checkout branches.

use crate::inspect::{db::UNKNOWN_VERSION, BranchObservation, DbObservation};

const LABEL_WIDTH: usize = 18;

/// Snapshot printed by `--status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub server_version: Option<String>,
    pub database_name: String,
    pub db: DbObservation,
    pub community_branch: BranchObservation,
    pub enterprise_branch: BranchObservation,
}

impl StatusReport {
    /// Four left-aligned `label value` lines.
    pub fn render(&self) -> String {
        let server = self
            .server_version
            .clone()
            .unwrap_or_else(|| UNKNOWN_VERSION.to_string());
        [
            line("Odoo server:", &server),
            line(&format!("{} version:", self.database_name), &self.db.to_string()),
            line("Community branch:", &self.community_branch.to_string()),
            line("Enterprise branch:", &self.enterprise_branch.to_string()),
        ]
        .join("\n")
    }
}

fn line(label: &str, value: &str) -> String {
    format!("{label:<LABEL_WIDTH$} {value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_aligns_values() {
        let report = StatusReport {
            server_version: Some("17.0".into()),
            database_name: "testdb".into(),
            db: DbObservation::Known {
                version: "17.0".into(),
                enterprise: true,
            },
            community_branch: BranchObservation {
                name: "17.0".into(),
                dirty: true,
            },
            enterprise_branch: BranchObservation {
                name: "17.0".into(),
                dirty: false,
            },
        };

        assert_eq!(
            report.render(),
            "Odoo server:       17.0\n\
             testdb version:    17.0 (enterprise)\n\
             Community branch:  17.0 (*)\n\
             Enterprise branch: 17.0"
        );
    }

    #[test]
    fn unknown_values_render_as_question_mark() {
        let report = StatusReport {
            server_version: None,
            database_name: "testdb".into(),
            db: DbObservation::Unknown,
            community_branch: BranchObservation {
                name: "master".into(),
                dirty: false,
            },
            enterprise_branch: BranchObservation {
                name: "master".into(),
                dirty: false,
            },
        };

        let rendered = report.render();
        assert!(rendered.starts_with("Odoo server:       ?\n"), "{rendered}");
        assert!(rendered.contains("testdb version:    ?\n"), "{rendered}");
    }
}
