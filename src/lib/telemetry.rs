//! Logging setup and structured launch events.

use tracing::{debug, Dispatch};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter directive for a given `-d` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Build the logging handle for one run.
///
/// `RUST_LOG` takes precedence; otherwise the level follows `verbosity`.
/// The returned dispatch is meant to be scoped with
/// [`tracing::dispatcher::with_default`] rather than installed globally.
pub fn build_dispatch(verbosity: u8) -> Dispatch {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));
    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    Dispatch::new(subscriber)
}

/// Payload describing the command about to run.
#[derive(Debug)]
pub struct LaunchTelemetry<'a> {
    pub mode: &'a str,
    pub server_name: &'a str,
    pub command: &'a [String],
}

/// Emit the final command line to `tracing`.
pub fn emit_launch(telemetry: &LaunchTelemetry<'_>) {
    debug!(
        target: "nvr::launch",
        mode = telemetry.mode,
        server_name = telemetry.server_name,
        command = ?telemetry.command,
        "running cmd line"
    );
}
