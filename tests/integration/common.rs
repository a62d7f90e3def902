use std::{
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_start-odoo");

pub fn fixture(relative: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join(relative).display().to_string()
}

/// Binary wired to the env-driven inspector, run from `cwd` with a closed stdin.
pub fn launcher(cwd: &Path, config_fixture: &str) -> Command {
    let mut command = Command::new(BINARY_PATH);
    command
        .current_dir(cwd)
        .arg("--config")
        .arg(fixture(config_fixture))
        .env("START_ODOO_PROBE", "env")
        .env("START_ODOO_COMMUNITY_BRANCH", "17.0")
        .env("START_ODOO_ENTERPRISE_BRANCH", "17.0")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("START_ODOO_CONFIG")
        .env_remove("START_ODOO_DIRTY")
        .env_remove("START_ODOO_DB_VERSION")
        .env_remove("START_ODOO_DB_ENTERPRISE")
        .env_remove("START_ODOO_DROP_FAIL")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    command
}

pub fn run(command: &mut Command) -> Output {
    command.output().expect("start-odoo should spawn")
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
