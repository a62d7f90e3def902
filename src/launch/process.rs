//! Start the Odoo server through a shell, inheriting the terminal.

use std::{
    path::Path,
    process::{Command, ExitStatus},
};

use tracing::info;

use crate::{config::ServerSection, lib::errors::LaunchError};

pub trait ProcessLauncher {
    /// Run the server with `args` and wait for it to exit.
    fn launch(&self, args: &str) -> Result<ExitStatus, LaunchError>;
}

/// Launcher running `<shell> -c "<command> <args>"`.
#[derive(Debug, Clone)]
pub struct ShellLauncher {
    server: ServerSection,
}

impl ShellLauncher {
    pub fn new(server: ServerSection) -> Self {
        Self { server }
    }
}

impl ProcessLauncher for ShellLauncher {
    fn launch(&self, args: &str) -> Result<ExitStatus, LaunchError> {
        let mut command = build_server_command(&self.server.shell, &self.server.command, args);

        info!(
            target: "start_odoo::launch",
            shell = %self.server.shell.display(),
            command = %self.server.command,
            "Starting Odoo server"
        );

        command.status().map_err(|source| LaunchError::Spawn {
            shell: self.server.shell.clone(),
            source,
        })
    }
}

/// Build the shell invocation; stdio is inherited.
pub fn build_server_command(shell: &Path, server_command: &str, args: &str) -> Command {
    let mut command = Command::new(shell);
    command.arg("-c").arg(shell_script(server_command, args));
    command
}

fn shell_script(server_command: &str, args: &str) -> String {
    if args.is_empty() {
        server_command.to_string()
    } else {
        format!("{server_command} {args}")
    }
}
