//! Run dispatch: status, branch commands or a server launch.
mod exit;

use std::{io::Write, process::ExitCode};

use tracing::info;

use crate::{
    cli::{execute_cli_command, LaunchProfile, ParsedCommand},
    config::LauncherConfig,
    inspect::{
        DbInspector, EnvInspector, GitInspector, ProbeMode, PsqlInspector, ReleaseFile,
        ReleaseInspector, VcsInspector,
    },
    launch::{AbortKind, LaunchConfigurator, LaunchDecision, ProcessLauncher, ShellLauncher},
    lib::{
        prompt::{Confirm, TerminalConfirm},
        telemetry::LaunchSpan,
    },
};

pub use exit::{exit_code_of, RunExit};

/// Capabilities a run is wired with.
pub struct Collaborators<'a, V, D, C, L, R> {
    pub vcs: &'a V,
    pub db: &'a D,
    pub confirm: &'a C,
    pub launcher: &'a L,
    pub release: &'a R,
}

/// Load the configuration and run the parsed command with the system or env-driven inspectors.
pub fn run(profile: LaunchProfile) -> Result<ExitCode, RunExit> {
    let config = LauncherConfig::load_from_path(profile.config_path, profile.config_source)
        .map_err(RunExit::from_error)?;
    let confirm = TerminalConfirm;
    let launcher = ShellLauncher::new(config.server.clone());
    let release = ReleaseFile::new(config.server.release_file.clone());
    let mut stdout = std::io::stdout();

    let code = match ProbeMode::from_env() {
        ProbeMode::System => execute(
            &config,
            profile.command,
            Collaborators {
                vcs: &GitInspector,
                db: &PsqlInspector,
                confirm: &confirm,
                launcher: &launcher,
                release: &release,
            },
            &mut stdout,
        ),
        ProbeMode::Env => {
            let probe = EnvInspector::new(config.workspace.clone());
            execute(
                &config,
                profile.command,
                Collaborators {
                    vcs: &probe,
                    db: &probe,
                    confirm: &confirm,
                    launcher: &launcher,
                    release: &release,
                },
                &mut stdout,
            )
        }
    }?;
    Ok(ExitCode::from(code))
}

/// Run one command and return the process exit code.
pub fn execute<V, D, C, L, R, W>(
    config: &LauncherConfig,
    command: ParsedCommand,
    with: Collaborators<'_, V, D, C, L, R>,
    out: &mut W,
) -> Result<u8, RunExit>
where
    V: VcsInspector,
    D: DbInspector,
    C: Confirm,
    L: ProcessLauncher,
    R: ReleaseInspector,
    W: Write,
{
    let configurator = LaunchConfigurator::new(config, with.vcs, with.db, with.confirm);

    let request = match command {
        ParsedCommand::Status => return write_status(&configurator, with.release, out),
        ParsedCommand::Cli(command) => {
            execute_cli_command(command, &config.workspace, with.vcs, with.confirm, out)
                .map_err(RunExit::from_error)?;
            return Ok(0);
        }
        ParsedCommand::Launch(request) => request,
    };

    let decision = configurator
        .decide(&request)
        .map_err(RunExit::from_error)?;
    match decision {
        LaunchDecision::ShowStatus => write_status(&configurator, with.release, out),
        LaunchDecision::Abort {
            kind: AbortKind::UserAbort,
            reason,
            exit_code,
        } => {
            info!(target: "start_odoo::launch", reason = %reason, "Launch cancelled");
            Ok(exit_code)
        }
        LaunchDecision::Abort {
            kind: AbortKind::Consistency,
            reason,
            exit_code,
        } => Err(RunExit::consistency(&reason, exit_code)),
        LaunchDecision::Proceed { args } => {
            out.flush().map_err(RunExit::from_error)?;
            let span = LaunchSpan::start(&config.database.name, request.test_mode());
            let status = with.launcher.launch(&args).map_err(RunExit::from_error)?;
            span.finish(status.code());
            Ok(exit_code_of(status))
        }
    }
}

fn write_status<V, D, C, R, W>(
    configurator: &LaunchConfigurator<'_, V, D, C>,
    release: &R,
    out: &mut W,
) -> Result<u8, RunExit>
where
    V: VcsInspector,
    D: DbInspector,
    C: Confirm,
    R: ReleaseInspector,
    W: Write,
{
    let report = configurator.status(release).map_err(RunExit::from_error)?;
    writeln!(out, "{}", report.render()).map_err(RunExit::from_error)?;
    Ok(0)
}
