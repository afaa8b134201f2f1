use std::path::Path;

use serde::Deserialize;

use crate::lib::{errors::ConfigError, paths};

pub const DEFAULT_PORT: &str = "4000";
pub const DEFAULT_ENV_PREFIX: &str = "cloudshell-L1-";
pub const DEFAULT_ENTRY_SCRIPT: &str = "main.py";
pub const DEFAULT_LOGS_DIR: &str = "Logs";
#[cfg(windows)]
pub const DEFAULT_INTERPRETER: &str = "Scripts\\python.exe";
#[cfg(not(windows))]
pub const DEFAULT_INTERPRETER: &str = "bin/python";

/// Driver layout settings, defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSection {
    pub default_port: String,
    pub env_prefix: String,
    pub entry_script: String,
    pub interpreter: String,
    pub logs_dir: String,
}

impl Default for DriverSection {
    fn default() -> Self {
        Self {
            default_port: DEFAULT_PORT.to_string(),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            entry_script: DEFAULT_ENTRY_SCRIPT.to_string(),
            interpreter: DEFAULT_INTERPRETER.to_string(),
            logs_dir: DEFAULT_LOGS_DIR.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawDriverSection {
    pub default_port: Option<String>,
    pub env_prefix: Option<String>,
    pub entry_script: Option<String>,
    pub interpreter: Option<String>,
    pub logs_dir: Option<String>,
}

pub fn parse_driver_section(
    raw: RawDriverSection,
    path: &Path,
) -> Result<DriverSection, ConfigError> {
    let defaults = DriverSection::default();

    let default_port = non_blank(raw.default_port, "default_port", path)?
        .unwrap_or(defaults.default_port);
    let env_prefix = non_blank(raw.env_prefix, "env_prefix", path)?.unwrap_or(defaults.env_prefix);
    let entry_script = relative(raw.entry_script, "entry_script", path)?
        .unwrap_or(defaults.entry_script);
    let interpreter =
        relative(raw.interpreter, "interpreter", path)?.unwrap_or(defaults.interpreter);
    let logs_dir = relative(raw.logs_dir, "logs_dir", path)?.unwrap_or(defaults.logs_dir);

    Ok(DriverSection {
        default_port,
        env_prefix,
        entry_script,
        interpreter,
        logs_dir,
    })
}

fn non_blank(
    value: Option<String>,
    field: &'static str,
    path: &Path,
) -> Result<Option<String>, ConfigError> {
    match value {
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "must not be blank".into(),
        }),
        other => Ok(other),
    }
}

fn relative(
    value: Option<String>,
    field: &'static str,
    path: &Path,
) -> Result<Option<String>, ConfigError> {
    let value = non_blank(value, field, path)?;
    if let Some(candidate) = value.as_deref() {
        if paths::is_rooted(candidate) {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field,
                message: format!("`{candidate}` must be a relative path"),
            });
        }
    }
    Ok(value)
}
