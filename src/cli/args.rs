//! CLI argument definitions and `LaunchProfile` construction.
use std::{ffi::OsString, iter};

use clap::Parser;
use tracing::debug;

use super::{resolve_port, LaunchProfile};

/// Command-line arguments.
///
/// The launcher has no flags: the first argument is the port whatever it
/// looks like, and the rest are ignored.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Start a CloudShell L1 driver from its adjacent Python environment",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct LauncherArgs {
    /// Port the driver listens on, then anything else (ignored).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub raw: Vec<OsString>,
}

impl LauncherArgs {
    /// Parse the process arguments without interpreting any of them.
    pub fn parse_verbatim() -> Self {
        Self::try_parse_verbatim(std::env::args_os()).unwrap_or_else(|err| err.exit())
    }

    /// Parse `args` (binary name first) treating every argument as a value.
    ///
    /// An explicit `--` is inserted after the binary name so a literal `--`,
    /// `-h` or `--version` in the first position still reaches the port.
    pub fn try_parse_verbatim<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let binary = args.next().unwrap_or_default();
        Self::try_parse_from(
            iter::once(binary)
                .chain(iter::once(OsString::from("--")))
                .chain(args),
        )
    }

    pub fn port(&self) -> Option<&OsString> {
        self.raw.first()
    }

    /// Build a `LaunchProfile` from CLI args and the process's own path.
    ///
    /// `default_port` is used when no port argument was given.
    pub fn build(self, executable_path: String, default_port: &str) -> LaunchProfile {
        let mut raw = self.raw.into_iter();
        let port = raw.next();
        let ignored: Vec<OsString> = raw.collect();
        if !ignored.is_empty() {
            debug!(
                target: "l1_launcher::launch",
                ignored = ?ignored,
                "Ignoring extra arguments"
            );
        }
        let (port, port_source) = resolve_port(port, default_port);
        LaunchProfile {
            executable_path,
            port,
            port_source,
        }
    }
}
