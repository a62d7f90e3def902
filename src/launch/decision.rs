//! Outcome of the launch configurator and the abort vocabulary.

/// Exit code used when the user declines a confirmation.
pub const USER_ABORT_EXIT_CODE: u8 = 0;
/// Exit code for a requested/database flavor mismatch.
pub const CONSISTENCY_EXIT_CODE: u8 = 1;

pub const USER_CANCELLED: &str = "user cancelled";
pub const ENTERPRISE_DB_NOT_REQUESTED: &str =
    "no enterprise addons requested, but current db is enterprise";
pub const ENTERPRISE_REQUESTED_DB_COMMUNITY: &str =
    "enterprise addons requested, but current db is not enterprise";

/// Outcome of the launch configurator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchDecision {
    /// Start the server with these arguments.
    Proceed { args: String },
    /// Stop without launching.
    Abort {
        kind: AbortKind,
        reason: String,
        exit_code: u8,
    },
    /// Status was requested: answer with a status report, touch nothing.
    ShowStatus,
}

/// Why a launch was aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortKind {
    UserAbort,
    Consistency,
}

impl LaunchDecision {
    pub fn user_cancelled() -> Self {
        LaunchDecision::Abort {
            kind: AbortKind::UserAbort,
            reason: USER_CANCELLED.into(),
            exit_code: USER_ABORT_EXIT_CODE,
        }
    }

    /// Mismatch between what was requested and what the database holds.
    pub fn flavor_mismatch(db_is_enterprise: bool) -> Self {
        let reason = if db_is_enterprise {
            ENTERPRISE_DB_NOT_REQUESTED
        } else {
            ENTERPRISE_REQUESTED_DB_COMMUNITY
        };
        LaunchDecision::Abort {
            kind: AbortKind::Consistency,
            reason: reason.into(),
            exit_code: CONSISTENCY_EXIT_CODE,
        }
    }

    pub fn abort_kind(&self) -> Option<AbortKind> {
        match self {
            LaunchDecision::Abort { kind, .. } => Some(*kind),
            LaunchDecision::Proceed { .. } | LaunchDecision::ShowStatus => None,
        }
    }
}
