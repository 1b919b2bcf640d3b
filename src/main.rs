//! Entry point for nvr.
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use nvr::{
    cli::LaunchProfileArgs,
    config::FileConfig,
    launcher::{self, LaunchExit, LaunchPlan, Launcher},
    lib::{
        errors::{LaunchError, EXIT_USAGE},
        telemetry,
    },
};
use serde_json::json;
use tracing::debug;

fn main() -> ExitCode {
    let args = match LaunchProfileArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // help and version go to stdout and are not failures
            return if err.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let dispatch = telemetry::build_dispatch(args.debug);
    tracing::dispatcher::with_default(&dispatch, || match bootstrap(args) {
        Ok(code) => code,
        Err(exit) => exit.report(),
    })
}

fn bootstrap(args: LaunchProfileArgs) -> Result<ExitCode, LaunchExit> {
    let file_config = FileConfig::load(args.config_override.clone()).map_err(LaunchError::from)?;
    let profile = args.build(file_config)?;
    debug!(target: "nvr::config", ?profile, "Resolved launch profile");

    let plan = Launcher::system().plan(&profile)?;
    if profile.dry_run {
        print_plan(&plan).map_err(LaunchExit::from_error)?;
        return Ok(ExitCode::SUCCESS);
    }

    Ok(launcher::execute(&plan)?)
}

fn print_plan(plan: &LaunchPlan) -> anyhow::Result<()> {
    let payload = json!({
        "mode": plan.mode.as_str(),
        "server_name": plan.server_name.as_str(),
        "command": plan.command.as_slice(),
    });
    let rendered =
        serde_json::to_string_pretty(&payload).context("failed to render launch plan")?;
    println!("{rendered}");
    Ok(())
}
