//! Run external tools and capture their standard output.

use std::{path::Path, process::Command};

use tracing::debug;

use super::errors::CommandError;

/// Run `program` with `args` inside `cwd` and return stdout with trailing newlines removed.
///
/// A non-zero exit status is an error carrying the tool's stderr.
pub fn run_command(program: &str, args: &[&str], cwd: &Path) -> Result<String, CommandError> {
    debug!(
        target: "start_odoo::inspect",
        program,
        args = ?args,
        cwd = %cwd.display(),
        "Running external command"
    );

    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|source| CommandError::Spawn {
            program: program.to_string(),
            cwd: cwd.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        return Err(CommandError::Failed {
            command: render_command(program, args),
            exit_code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .trim_end_matches('\n')
        .to_string())
}

fn render_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
