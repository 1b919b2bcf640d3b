//! Shared helpers for building `nvim` remote-control commands.

use std::process::{Command, Stdio};

/// Default binary used to start a server and to talk to one.
pub const DEFAULT_NVIM_BINARY: &str = "nvim";
/// Start a server listening on an address.
pub const LISTEN_FLAG: &str = "--listen";
/// Connect to a server as a client.
pub const SERVER_FLAG: &str = "--server";
/// Forward file arguments to the connected server.
pub const REMOTE_FLAG: &str = "--remote";
/// Evaluate an expression on the connected server.
pub const REMOTE_EXPR_FLAG: &str = "--remote-expr";
/// Expression used as a liveness check.
pub const PROBE_EXPRESSION: &str = "version";

/// Build the liveness probe: `<client> --server <name> --remote-expr version`.
pub fn build_probe_command(client: &str, server_name: &str) -> Command {
    let mut command = Command::new(client);
    command
        .arg(SERVER_FLAG)
        .arg(server_name)
        .arg(REMOTE_EXPR_FLAG)
        .arg(PROBE_EXPRESSION)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    command
}

/// Flags appended after the client binary when attaching.
pub fn attach_flags(server_name: &str) -> [String; 3] {
    [
        SERVER_FLAG.to_string(),
        server_name.to_string(),
        REMOTE_FLAG.to_string(),
    ]
}

/// Flags appended after the editor command when starting a server.
pub fn listen_flags(server_name: &str) -> [String; 2] {
    [LISTEN_FLAG.to_string(), server_name.to_string()]
}
