//! Driver layout derivation, command assembly, and shell execution.
pub mod command;
pub mod executor;
pub mod layout;

pub use command::{LaunchCommand, SHELL};
pub use executor::{build_shell_command, exit_code_from_status, run};
pub use layout::{DriverLayout, ExecutableParts};
