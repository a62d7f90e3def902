use tempfile::tempdir;

use crate::common::{launcher, run, stderr_text, stdout_lines};

const PRINTF_CONFIG: &str = "tests/fixtures/config_printf.toml";

#[test]
fn community_launch_passes_base_args_then_passthrough() {
    let temp = tempdir().expect("can create temp directory");

    let output = run(launcher(temp.path(), PRINTF_CONFIG)
        .args(["--", "-u", "sale", "--log-level=debug"])
        .env("START_ODOO_DB_VERSION", "17.0"));

    assert_eq!(output.status.code(), Some(0), "{}", stderr_text(&output));
    assert_eq!(
        stdout_lines(&output),
        [
            "-r",
            "odoo",
            "-w",
            "odoo",
            "-d",
            "testdb",
            "--db-filter=testdb",
            "--dev=all",
            "--addons-path",
            "addons",
            "-u",
            "sale",
            "--log-level=debug",
        ]
    );
}

#[test]
fn web_tests_on_enterprise_db_add_test_flags() {
    let temp = tempdir().expect("can create temp directory");

    let output = run(launcher(temp.path(), PRINTF_CONFIG)
        .args(["-e", "-w"])
        .env("START_ODOO_DB_VERSION", "17.0")
        .env("START_ODOO_DB_ENTERPRISE", "true"));

    assert_eq!(output.status.code(), Some(0), "{}", stderr_text(&output));
    let lines = stdout_lines(&output);
    assert_eq!(
        &lines[9..],
        [
            "addons,../enterprise",
            "--stop-after-init",
            "--test-enable",
            "--test-tags",
            "/web:WebSuite",
        ]
    );
}

#[test]
fn enterprise_request_on_community_db_exits_one() {
    let temp = tempdir().expect("can create temp directory");

    let output = run(launcher(temp.path(), PRINTF_CONFIG)
        .arg("-e")
        .env("START_ODOO_DB_VERSION", "17.0"));

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_lines(&output).is_empty(), "server must not start");
    assert!(stderr_text(&output)
        .contains("Error: enterprise addons requested, but current db is not enterprise"));
}

#[test]
fn unreachable_db_counts_as_community() {
    let temp = tempdir().expect("can create temp directory");

    let output = run(launcher(temp.path(), PRINTF_CONFIG).arg("--enterprise"));

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("current db is not enterprise"));
}

#[test]
fn branch_mismatch_without_terminal_cancels_quietly() {
    let temp = tempdir().expect("can create temp directory");

    let output = run(launcher(temp.path(), PRINTF_CONFIG)
        .arg("-e")
        .env("START_ODOO_ENTERPRISE_BRANCH", "16.0")
        .env("START_ODOO_DB_VERSION", "17.0")
        .env("START_ODOO_DB_ENTERPRISE", "1"));

    assert_eq!(output.status.code(), Some(0), "{}", stderr_text(&output));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1, "only the warning is printed: {lines:?}");
    assert_eq!(
        lines[0],
        "Warning: community and enterprise branches do not match: 17.0 != 16.0"
    );
}

#[test]
fn drop_skips_flavor_check() {
    let temp = tempdir().expect("can create temp directory");

    let output = run(launcher(temp.path(), PRINTF_CONFIG)
        .args(["-e", "-d"])
        .env("START_ODOO_DB_VERSION", "17.0"));

    assert_eq!(output.status.code(), Some(0), "{}", stderr_text(&output));
    assert!(stdout_lines(&output).contains(&"addons,../enterprise".to_string()));
}

#[test]
fn failed_drop_stops_the_run() {
    let temp = tempdir().expect("can create temp directory");

    let output = run(launcher(temp.path(), PRINTF_CONFIG)
        .arg("-d")
        .env("START_ODOO_DROP_FAIL", "1"));

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_lines(&output).is_empty(), "server must not start");
    assert!(stderr_text(&output).contains("testdb"));
}

#[test]
fn server_exit_code_is_propagated() {
    let temp = tempdir().expect("can create temp directory");

    let output = run(launcher(temp.path(), "tests/fixtures/config_exit_code.toml")
        .env("START_ODOO_DB_VERSION", "17.0"));

    assert_eq!(output.status.code(), Some(7), "{}", stderr_text(&output));
}
