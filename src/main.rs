//! Entry point for the L1 driver launcher.
use std::process::ExitCode;

use l1_launcher::{
    cli::LauncherArgs,
    lib::telemetry,
    runtime::{self, RuntimeExit},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(code) => ExitCode::from(code),
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<u8, RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LauncherArgs::parse_verbatim();
    runtime::run_launcher(args).await
}
