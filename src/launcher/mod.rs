//! Attach-or-start decision and the final editor invocation.

mod command;
mod mode;
mod probe;
mod runtime;

pub use command::{build_editor_invocation, CommandLine};
pub use mode::{decide_mode, Decision, LaunchMode};
pub use probe::{ServerProbe, SystemServerProbe};
pub use runtime::{execute, LaunchExit, LaunchPlan, Launcher};
