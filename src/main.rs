//! Entry point for start-odoo.
use std::process::ExitCode;

use clap::Parser;
use start_odoo::{
    cli::LaunchArgs,
    lib::telemetry,
    runtime::{self, RunExit},
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<ExitCode, RunExit> {
    telemetry::init_tracing().map_err(RunExit::from_error)?;
    let args = LaunchArgs::parse();
    let profile = args.into_profile().map_err(RunExit::from_error)?;
    runtime::run(profile)
}
