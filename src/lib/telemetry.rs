//! Telemetry initialization and launch span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset; console output stays the primary UI.
const DEFAULT_FILTER: &str = "warn";

/// Initialize `tracing` and format developer logs on stderr.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of the server process.
pub struct LaunchSpan {
    span: Span,
    started_at: Instant,
}

impl LaunchSpan {
    /// Start a launch span for `database`.
    pub fn start(database: &str, test_mode: bool) -> Self {
        let span = info_span!(
            target: "start_odoo::launch",
            "odoo_server",
            database,
            test_mode
        );
        Self {
            span,
            started_at: Instant::now(),
        }
    }

    /// Close the span while recording the exit code of the server.
    pub fn finish(self, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "start_odoo::launch",
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Odoo server exited"
        );
    }
}

/// Structured summary of a launch request, logged before any collaborator runs.
#[derive(Debug)]
pub struct RequestTelemetry<'a> {
    pub enterprise: bool,
    pub test_mode: bool,
    pub web_test_mode: bool,
    pub drop_db: bool,
    pub passthrough_args: &'a [String],
}

/// Emit the launch request to `tracing`.
pub fn emit_request(telemetry: &RequestTelemetry<'_>) {
    info!(
        target: "start_odoo::launch",
        enterprise = telemetry.enterprise,
        test_mode = telemetry.test_mode,
        web_test_mode = telemetry.web_test_mode,
        drop_db = telemetry.drop_db,
        passthrough_args = ?telemetry.passthrough_args,
        "Resolved launch request"
    );
}
