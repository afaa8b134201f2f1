use std::process::ExitStatus;

use tokio::process::Command;
use tracing::{debug, info};

use crate::lib::errors::LaunchError;

use super::command::{LaunchCommand, SHELL};

/// Build the shell invocation for `command`. Standard streams are inherited.
pub fn build_shell_command(command: &LaunchCommand) -> Command {
    let (shell, flag) = SHELL;
    let mut process = Command::new(shell);
    process.arg(flag);
    #[cfg(windows)]
    process.raw_arg(command.shell_line());
    #[cfg(not(windows))]
    process.arg(command.shell_line());
    process
}

/// Run `command` through the shell and wait for it, however long it takes.
///
/// Returns the exit code the launcher should report.
pub async fn run(command: &LaunchCommand) -> Result<u8, LaunchError> {
    let (shell, _) = SHELL;
    info!(
        target: "l1_launcher::launch",
        driver_name = %command.driver_name,
        port = %command.port.to_string_lossy(),
        shell,
        "Spawning driver through shell"
    );

    let status = build_shell_command(command)
        .status()
        .await
        .map_err(|source| LaunchError::Spawn {
            shell: shell.to_string(),
            source,
        })?;

    debug!(target: "l1_launcher::launch", status = %status, "Shell returned");
    Ok(exit_code_from_status(status))
}

/// Map a child's status to the launcher's own exit code.
///
/// Codes outside `0..=255` collapse to 1; a signal `n` becomes `128 + n`.
pub fn exit_code_from_status(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code).unwrap_or(1);
    }
    signal_exit_code(&status).unwrap_or(1)
}

#[cfg(unix)]
fn signal_exit_code(status: &ExitStatus) -> Option<u8> {
    use std::os::unix::process::ExitStatusExt;

    status
        .signal()
        .and_then(|signal| u8::try_from(128 + signal).ok())
}

#[cfg(not(unix))]
fn signal_exit_code(_status: &ExitStatus) -> Option<u8> {
    None
}
