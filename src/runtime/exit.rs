use std::process::{ExitCode, ExitStatus};

use anyhow::Error;

use crate::lib::style;

/// Bundles a user-facing message with the exit code of the run.
#[derive(Debug)]
pub struct RunExit {
    message: String,
    exit_code: u8,
}

impl RunExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: 1,
        }
    }

    /// Consistency failure reported as a red `Error: <reason>` line.
    pub fn consistency(reason: &str, exit_code: u8) -> Self {
        Self {
            message: style::error(&format!("Error: {reason}")).to_string(),
            exit_code,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        ExitCode::from(self.exit_code)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

/// Exit code of the server process; 1 when it was killed by a signal.
pub fn exit_code_of(status: ExitStatus) -> u8 {
    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(1)
}
