//! Command-line assembly for the driver process.

use std::ffi::{OsStr, OsString};

use super::layout::DriverLayout;

/// Shell program and the flag that makes it run a single command string.
#[cfg(windows)]
pub const SHELL: (&str, &str) = ("cmd", "/C");
#[cfg(not(windows))]
pub const SHELL: (&str, &str) = ("sh", "-c");

/// A ready-to-run driver command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub driver_name: String,
    pub port: OsString,
    line: OsString,
}

impl LaunchCommand {
    /// Assemble `<interpreter> <entry-script> <port> <log-dir>`, paths quoted
    /// for the host shell.
    ///
    /// The port is inserted as given, bytes and all.
    pub fn new(layout: &DriverLayout, port: impl AsRef<OsStr>) -> Self {
        let port = port.as_ref();
        let mut line = OsString::new();
        line.push(quote(&layout.interpreter));
        line.push(" ");
        line.push(quote(&layout.entry_script));
        line.push(" ");
        line.push(port);
        line.push(" ");
        line.push(quote(&layout.log_dir));
        Self {
            driver_name: layout.driver_name.clone(),
            port: port.to_os_string(),
            line,
        }
    }

    pub fn line(&self) -> &OsStr {
        &self.line
    }

    /// The string handed to the shell.
    ///
    /// `cmd /C` strips the first and last quote of a line that starts with
    /// one, so the line gets an extra outer pair there.
    pub fn shell_line(&self) -> OsString {
        if cfg!(windows) {
            let mut wrapped = OsString::from("\"");
            wrapped.push(&self.line);
            wrapped.push("\"");
            wrapped
        } else {
            self.line.clone()
        }
    }

    /// The shell line as printed to the user.
    pub fn display(&self) -> String {
        self.shell_line().to_string_lossy().into_owned()
    }
}

/// Quote one path so `cmd` sees it as a single word.
#[cfg(windows)]
pub fn quote(value: &str) -> String {
    format!("\"{value}\"")
}

/// Quote one path so `sh` passes it through literally: single quotes, with
/// embedded `'` written as `'\''`.
#[cfg(not(windows))]
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
