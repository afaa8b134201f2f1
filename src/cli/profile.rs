//! LaunchProfile and executable-path/port resolution.
use std::{env, ffi::OsString};

use anyhow::Result;

use crate::lib::errors::LaunchError;

/// Where the port came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortSource {
    Cli,
    Default,
}

impl PortSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PortSource::Cli => "cli",
            PortSource::Default => "default",
        }
    }
}

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub executable_path: String,
    pub port: OsString,
    pub port_source: PortSource,
}

/// Resolve the launcher's path: `argv[0]` as the OS passed it, else `current_exe()`.
pub fn resolve_executable_path() -> Result<String> {
    let from_argv = env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned());
    Ok(executable_path_or_current(from_argv)?)
}

fn executable_path_or_current(from_argv: Option<String>) -> Result<String, LaunchError> {
    if let Some(path) = from_argv.filter(|path| !path.is_empty()) {
        return Ok(path);
    }
    let current = env::current_exe().map_err(|source| LaunchError::CurrentExe { source })?;
    let current = current.to_string_lossy().into_owned();
    if current.is_empty() {
        return Err(LaunchError::EmptyExecutablePath);
    }
    Ok(current)
}

/// Resolve port in the order: CLI argument → default.
pub fn resolve_port(cli_port: Option<OsString>, default_port: &str) -> (OsString, PortSource) {
    match cli_port {
        Some(port) => (port, PortSource::Cli),
        None => (OsString::from(default_port), PortSource::Default),
    }
}
