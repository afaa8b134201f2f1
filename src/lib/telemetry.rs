//! Telemetry initialization and launch span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` and format developer logs.
///
/// Logs go to stderr so the driver's own stdout stays clean. The default
/// filter is `warn`; set `RUST_LOG` for more.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a driver launch.
pub struct LaunchSpan {
    span: Span,
    started_at: Instant,
    launch_id: Uuid,
}

impl LaunchSpan {
    /// Start a launch span.
    pub fn start(driver_name: &str) -> Self {
        let launch_id = Uuid::new_v4();
        let span = info_span!(
            target: "l1_launcher::launch",
            "driver_launch",
            %launch_id,
            driver_name
        );
        Self {
            span,
            started_at: Instant::now(),
            launch_id,
        }
    }

    pub fn launch_id(&self) -> Uuid {
        self.launch_id
    }

    /// Close the span while recording exit code and elapsed time.
    pub fn finish(self, exit_code: u8) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "l1_launcher::launch",
            launch_id = %self.launch_id,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Driver process exited"
        );
    }
}
