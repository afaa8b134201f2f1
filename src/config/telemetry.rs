use tracing::{debug, info};

use super::{LauncherConfig, OVERRIDES_SUFFIX};

pub fn log_defaults(path: &std::path::Path) {
    debug!(
        target: "l1_launcher::config",
        path = %path.display(),
        suffix = OVERRIDES_SUFFIX,
        "No overrides file found; using built-in defaults"
    );
}

pub fn log_loaded(config: &LauncherConfig) {
    let path = config
        .source_path
        .as_deref()
        .map(|path| path.display().to_string())
        .unwrap_or_default();
    info!(
        target: "l1_launcher::config",
        path = %path,
        default_port = %config.driver.default_port,
        env_prefix = %config.driver.env_prefix,
        entry_script = %config.driver.entry_script,
        interpreter = %config.driver.interpreter,
        logs_dir = %config.driver.logs_dir,
        "Overrides file loaded successfully"
    );
}
