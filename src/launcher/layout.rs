//! Driver deployment layout derived from the launcher's own path.
//!
//! A launcher named `foo.exe` living in `<root>/drivers/` expects:
//!
//! ```text
//! <root>/Logs/
//! <root>/drivers/foo.exe
//! <root>/drivers/cloudshell-L1-foo/main.py
//! <root>/drivers/cloudshell-L1-foo/<interpreter>
//! ```
//!
//! Everything is string assembly; nothing here touches the filesystem.

use std::path::{PathBuf, MAIN_SEPARATOR};

use crate::{
    config::{DriverSection, OVERRIDES_SUFFIX},
    lib::paths,
};

/// The executable path split into the pieces the layout is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableParts {
    /// Directory holding the launcher, including its trailing separator.
    pub drivers_dir: String,
    /// File name up to its last `.`.
    pub driver_name: String,
    /// Separator character used for every derived path.
    pub separator: char,
}

impl ExecutableParts {
    pub fn split(executable_path: &str) -> Self {
        let name_start = paths::file_name_start(executable_path);
        let separator = paths::detect_separator(executable_path);

        let drivers_dir = if name_start == 0 {
            format!(".{MAIN_SEPARATOR}")
        } else {
            executable_path[..name_start].to_string()
        };

        let file_name = &executable_path[name_start..];
        let driver_name = match file_name.rfind('.') {
            Some(dot) => &file_name[..dot],
            None => file_name,
        };

        Self {
            drivers_dir,
            driver_name: driver_name.to_string(),
            separator,
        }
    }

    /// Location of the optional `<name>.launcher.toml` overrides file.
    pub fn overrides_path(&self) -> PathBuf {
        PathBuf::from(format!(
            "{}{}{OVERRIDES_SUFFIX}",
            self.drivers_dir, self.driver_name
        ))
    }
}

/// Fully derived paths for one driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverLayout {
    pub driver_name: String,
    pub drivers_dir: String,
    pub env_dir: String,
    pub interpreter: String,
    pub entry_script: String,
    pub log_dir: String,
}

impl DriverLayout {
    /// Derive the layout from the executable path with built-in defaults.
    pub fn from_executable(executable_path: &str) -> Self {
        Self::resolve(
            ExecutableParts::split(executable_path),
            &DriverSection::default(),
        )
    }

    pub fn resolve(parts: ExecutableParts, driver: &DriverSection) -> Self {
        let sep = parts.separator;
        let server_dir = format!("{}..", parts.drivers_dir);
        let log_dir = paths::join_with(&server_dir, &driver.logs_dir, sep);
        let env_dir = format!(
            "{}{}{}",
            parts.drivers_dir, driver.env_prefix, parts.driver_name
        );
        let entry_script = paths::join_with(&env_dir, &driver.entry_script, sep);
        let interpreter = paths::join_with(&env_dir, &driver.interpreter, sep);

        Self {
            driver_name: parts.driver_name,
            drivers_dir: parts.drivers_dir,
            env_dir,
            interpreter,
            entry_script,
            log_dir,
        }
    }
}
