//! Load and validate the optional per-driver overrides file.
use std::path::PathBuf;

use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod driver;
pub mod telemetry;

pub use driver::{
    parse_driver_section, DriverSection, RawDriverSection, DEFAULT_ENTRY_SCRIPT,
    DEFAULT_ENV_PREFIX, DEFAULT_INTERPRETER, DEFAULT_LOGS_DIR, DEFAULT_PORT,
};

/// Suffix appended to the driver name to locate its overrides file.
pub const OVERRIDES_SUFFIX: &str = ".launcher.toml";

/// Launcher configuration: built-in defaults, optionally overridden from disk.
#[derive(Debug, Clone, Default)]
pub struct LauncherConfig {
    pub driver: DriverSection,
    /// Overrides file that was read, if any.
    pub source_path: Option<PathBuf>,
}

impl LauncherConfig {
    /// Read `path` if it exists; otherwise fall back to built-in defaults.
    pub fn load_optional(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.is_file() {
            telemetry::log_defaults(&path);
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    /// Load overrides from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "l1_launcher::config",
            path = %path.display(),
            "Starting overrides load"
        );

        let builder = config::Config::builder()
            .add_source(config::File::from(path.clone()).format(config::FileFormat::Toml));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "l1_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to read overrides file"
            );
            error
        })?;

        let raw: RawDriverSection = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "l1_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse overrides file"
            );
            error
        })?;

        let driver = parse_driver_section(raw, &path).map_err(|err| {
            error!(
                target: "l1_launcher::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate overrides file"
            );
            err
        })?;

        let config = Self {
            driver,
            source_path: Some(path),
        };
        telemetry::log_loaded(&config);
        Ok(config)
    }
}
