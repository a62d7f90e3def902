//! Build the odoo-bin argument string.

use crate::config::DatabaseSection;

use super::LaunchRequest;

pub const COMMUNITY_ADDONS_PATH: &str = "addons";
pub const ENTERPRISE_ADDONS_PATH: &str = "addons,../enterprise";
pub const DEV_MODE_FLAG: &str = "--dev=all";
pub const STOP_AFTER_INIT_FLAG: &str = "--stop-after-init";
pub const TEST_ENABLE_FLAG: &str = "--test-enable";
pub const WEB_SUITE_TEST_TAGS: &str = "/web:WebSuite";

pub fn addons_path(enterprise: bool) -> &'static str {
    if enterprise {
        ENTERPRISE_ADDONS_PATH
    } else {
        COMMUNITY_ADDONS_PATH
    }
}

/// Arguments in launch order; passthrough arguments always come last.
pub fn build_server_args(request: &LaunchRequest, database: &DatabaseSection) -> Vec<String> {
    let mut args = vec![
        "-r".to_string(),
        database.user.clone(),
        "-w".to_string(),
        database.password.clone(),
        "-d".to_string(),
        database.name.clone(),
        format!("--db-filter={}", database.name),
        DEV_MODE_FLAG.to_string(),
        "--addons-path".to_string(),
        addons_path(request.enterprise_requested()).to_string(),
    ];

    if request.test_mode() {
        args.push(STOP_AFTER_INIT_FLAG.to_string());
        args.push(TEST_ENABLE_FLAG.to_string());
        if request.web_test_mode() {
            args.push("--test-tags".to_string());
            args.push(WEB_SUITE_TEST_TAGS.to_string());
        }
    }

    args.extend(request.passthrough_args().iter().cloned());
    args
}

/// Single-space joined form handed to the shell.
pub fn build_server_arg_string(request: &LaunchRequest, database: &DatabaseSection) -> String {
    build_server_args(request, database).join(" ")
}
