use std::process::ExitCode;

use anyhow::Error;

use crate::{
    cli::{resolve_executable_path, LauncherArgs},
    config::LauncherConfig,
    launcher::{self, DriverLayout, ExecutableParts, LaunchCommand},
    lib::telemetry::LaunchSpan,
};

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Derive the driver layout, print the command, and run it to completion.
///
/// Returns the driver's exit code.
pub async fn run_launcher(args: LauncherArgs) -> Result<u8, RuntimeExit> {
    let executable_path = resolve_executable_path().map_err(RuntimeExit::from_error)?;
    let parts = ExecutableParts::split(&executable_path);
    let config =
        LauncherConfig::load_optional(parts.overrides_path()).map_err(RuntimeExit::from_error)?;
    let profile = args.build(executable_path, &config.driver.default_port);

    tracing::debug!(
        target: "l1_launcher::launch",
        executable_path = %profile.executable_path,
        port = %profile.port.to_string_lossy(),
        port_source = profile.port_source.as_str(),
        "Resolved launch profile"
    );

    let layout = DriverLayout::resolve(parts, &config.driver);
    let command = LaunchCommand::new(&layout, &profile.port);

    println!("Starting driver {}", command.driver_name);
    println!("{}", command.display());

    let span = LaunchSpan::start(&command.driver_name);
    tracing::debug!(
        target: "l1_launcher::launch",
        launch_id = %span.launch_id(),
        env_dir = %layout.env_dir,
        log_dir = %layout.log_dir,
        "Derived driver layout"
    );
    let exit_code = launcher::run(&command)
        .await
        .map_err(RuntimeExit::from_error)?;
    span.finish(exit_code);
    Ok(exit_code)
}
