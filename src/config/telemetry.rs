use tracing::{debug, info};

use super::{ConfigSource, LauncherConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_source(path: &std::path::Path, source: ConfigSource) {
    match source {
        ConfigSource::Cli | ConfigSource::Env => info!(
            target: "start_odoo::config",
            path = %path.display(),
            source = source.as_str(),
            "Loading configuration from explicit path"
        ),
        ConfigSource::Default => debug!(
            target: "start_odoo::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "No configuration path given; using optional start-odoo.toml"
        ),
    }
}

pub fn log_loaded(config: &LauncherConfig) {
    info!(
        target: "start_odoo::config",
        path = %config.source_path.display(),
        database = %config.database.name,
        community = %config.workspace.community.display(),
        enterprise = %config.workspace.enterprise.display(),
        shell = %config.server.shell.display(),
        "Configuration loaded"
    );
}
