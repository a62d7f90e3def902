use std::{fs, process::Command};

use tempfile::tempdir;

use crate::common::{launcher, run, stderr_text, stdout_lines, BINARY_PATH};

#[test]
fn help_lists_every_flag() {
    let output = Command::new(BINARY_PATH)
        .arg("--help")
        .output()
        .expect("start-odoo should spawn");

    assert!(output.status.success());
    let help = String::from_utf8_lossy(&output.stdout);
    for flag in [
        "--enterprise",
        "--test",
        "--web",
        "--drop-db",
        "--status",
        "--list-branches",
        "--clean-branches",
        "--config",
    ] {
        assert!(help.contains(flag), "help should mention {flag}: {help}");
    }
}

#[test]
fn unknown_flag_fails_before_anything_runs() {
    let temp = tempdir().expect("can create temp directory");
    let output = run(launcher(temp.path(), "tests/fixtures/config_printf.toml").arg("--bogus"));

    assert!(!output.status.success());
    assert!(stdout_lines(&output).is_empty());
}

#[test]
fn status_reports_release_database_and_branches() {
    let temp = tempdir().expect("can create temp directory");
    fs::write(
        temp.path().join("release.py"),
        "version_info = (17, 0, 0, FINAL, 0, '')\n",
    )
    .expect("can write release.py");

    let output = run(launcher(temp.path(), "tests/fixtures/config_printf.toml")
        .args(["-s", "-e", "-d"])
        .env("START_ODOO_ENTERPRISE_BRANCH", "17.0-fix-tax")
        .env("START_ODOO_DIRTY", "enterprise")
        .env("START_ODOO_DB_VERSION", "17.0")
        .env("START_ODOO_DB_ENTERPRISE", "1")
        .env("START_ODOO_DROP_FAIL", "1"));

    assert_eq!(output.status.code(), Some(0), "{}", stderr_text(&output));
    assert_eq!(
        stdout_lines(&output),
        [
            "Odoo server:       17.0",
            "testdb version:    17.0 (enterprise)",
            "Community branch:  17.0",
            "Enterprise branch: 17.0-fix-tax (*)",
        ]
    );
}

#[test]
fn status_without_release_file_shows_unknown() {
    let temp = tempdir().expect("can create temp directory");

    let output = run(launcher(temp.path(), "tests/fixtures/config_printf.toml").arg("--status"));

    assert_eq!(output.status.code(), Some(0), "{}", stderr_text(&output));
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "Odoo server:       ?");
    assert_eq!(lines[1], "testdb version:    ?");
}

#[test]
fn list_branches_prints_one_row_per_branch() {
    let temp = tempdir().expect("can create temp directory");

    let output = run(launcher(temp.path(), "tests/fixtures/config_printf.toml")
        .arg("-l")
        .env("START_ODOO_ENTERPRISE_BRANCH", "17.0-ent"));

    assert_eq!(output.status.code(), Some(0), "{}", stderr_text(&output));
    assert_eq!(stdout_lines(&output), ["X*    | 17.0", "   X* | 17.0-ent"]);
}

#[test]
fn missing_explicit_config_is_reported() {
    let temp = tempdir().expect("can create temp directory");

    let output = run(&mut launcher(temp.path(), "tests/fixtures/does_not_exist.toml"));

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("does_not_exist.toml"));
}
