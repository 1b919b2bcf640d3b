use std::{env, process::ExitCode};

use anyhow::Error;
use tracing::{error, info};

use crate::{
    cli::{resolve_server_name, LaunchProfile, ServerName, SERVER_NAME_ENV},
    lib::{
        errors::LaunchError,
        paths::normalize_additional_args,
        telemetry::{emit_launch, LaunchTelemetry},
    },
};

use super::{
    build_editor_invocation, decide_mode, CommandLine, Decision, LaunchMode, ServerProbe,
    SystemServerProbe,
};

/// Bundles a fatal error message with the exit code it maps to.
#[derive(Debug)]
pub struct LaunchExit {
    message: String,
    kind: &'static str,
    exit_code: ExitCode,
}

impl LaunchExit {
    pub fn from_launch_error(err: LaunchError) -> Self {
        Self {
            message: err.to_string(),
            kind: err.kind(),
            exit_code: err.exit_code(),
        }
    }

    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            kind: "internal",
            exit_code: ExitCode::FAILURE,
        }
    }

    /// Log the failure at error level and hand back the exit code.
    pub fn report(self) -> ExitCode {
        error!(target: "nvr::launch", kind = self.kind, "{}", self.message);
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl From<LaunchError> for LaunchExit {
    fn from(value: LaunchError) -> Self {
        Self::from_launch_error(value)
    }
}

/// Everything decided before the final process runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub mode: LaunchMode,
    pub server_name: ServerName,
    pub command: CommandLine,
}

/// Resolves, probes, and builds the command for one run.
pub struct Launcher<P> {
    probe: P,
    server_name_env: Option<String>,
}

impl Launcher<SystemServerProbe> {
    /// Launcher wired to the real probe and the process environment.
    pub fn system() -> Self {
        Self::new(SystemServerProbe)
    }
}

impl<P: ServerProbe> Launcher<P> {
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            server_name_env: env::var(SERVER_NAME_ENV).ok(),
        }
    }

    /// Replace the `NVIM_LISTEN_ADDRESS` value captured at construction.
    pub fn with_server_name_env(mut self, value: Option<String>) -> Self {
        self.server_name_env = value;
        self
    }

    /// Run every step up to, but not including, execution.
    pub fn plan(&self, profile: &LaunchProfile) -> Result<LaunchPlan, LaunchError> {
        let (server_name, source) = resolve_server_name(
            profile.server_name.as_deref(),
            self.server_name_env.as_deref(),
        )?;

        let alive = self.probe.is_alive(&profile.client, &server_name);
        let mode = match decide_mode(alive, profile.no_start) {
            Decision::Launch(mode) => mode,
            Decision::Abort => {
                return Err(LaunchError::ServerUnavailable {
                    server_name: server_name.to_string(),
                })
            }
        };
        info!(
            target: "nvr::launch",
            server_name = %server_name,
            source = ?source,
            mode = mode.as_str(),
            "Selected launch mode"
        );

        let invocation =
            build_editor_invocation(mode, &profile.editor, &profile.client, &server_name);
        let files = normalize_additional_args(&profile.files).collect::<Result<Vec<_>, _>>()?;
        let command = CommandLine::assemble(invocation, files)?;

        Ok(LaunchPlan {
            mode,
            server_name,
            command,
        })
    }
}

/// Run the planned command in the foreground and return its exit code.
pub fn execute(plan: &LaunchPlan) -> Result<ExitCode, LaunchError> {
    emit_launch(&LaunchTelemetry {
        mode: plan.mode.as_str(),
        server_name: plan.server_name.as_str(),
        command: plan.command.as_slice(),
    });

    let status = plan
        .command
        .to_command()
        .status()
        .map_err(|source| LaunchError::Execution {
            program: plan.command.program().to_string(),
            source,
        })?;

    info!(
        target: "nvr::launch",
        exit_code = status.code(),
        "Editor exited"
    );
    Ok(ExitCode::from(exit_status_code(status)))
}

fn exit_status_code(status: std::process::ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code).unwrap_or(1);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from(128 + signal).unwrap_or(1);
        }
    }

    1
}
