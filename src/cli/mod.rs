//! CLI entrypoint module structure.
pub mod args;
pub mod profile;

pub use args::LauncherArgs;
pub use profile::{resolve_executable_path, resolve_port, LaunchProfile, PortSource};
