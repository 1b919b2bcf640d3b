/// How the final command talks to Neovim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// Forward files to an already-running server.
    Attach,
    /// Start a new server listening on the requested name.
    Start,
}

impl LaunchMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LaunchMode::Attach => "attach",
            LaunchMode::Start => "start",
        }
    }
}

/// Outcome of the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Launch(LaunchMode),
    /// No server, and starting one was disallowed.
    Abort,
}

pub fn decide_mode(probe_ok: bool, no_start: bool) -> Decision {
    match (probe_ok, no_start) {
        (true, _) => Decision::Launch(LaunchMode::Attach),
        (false, false) => Decision::Launch(LaunchMode::Start),
        (false, true) => Decision::Abort,
    }
}
