use tracing::debug;

use crate::{cli::ServerName, lib::nvim::build_probe_command};

/// Liveness check against a server name.
pub trait ServerProbe {
    /// Returns true if a server answered on `server_name`.
    fn is_alive(&self, client: &str, server_name: &ServerName) -> bool;
}

/// Probe that asks the real client binary to evaluate `version` remotely.
///
/// Only the exit status decides; output is logged and otherwise ignored.
pub struct SystemServerProbe;

impl ServerProbe for SystemServerProbe {
    fn is_alive(&self, client: &str, server_name: &ServerName) -> bool {
        let output = match build_probe_command(client, server_name.as_str()).output() {
            Ok(output) => output,
            Err(err) => {
                debug!(
                    target: "nvr::probe",
                    client,
                    server_name = %server_name,
                    reason = %err,
                    "Failed to run probe"
                );
                return false;
            }
        };

        debug!(
            target: "nvr::probe",
            client,
            server_name = %server_name,
            exit_code = output.status.code(),
            stdout = %String::from_utf8_lossy(&output.stdout).trim(),
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "remote version"
        );
        output.status.success()
    }
}
