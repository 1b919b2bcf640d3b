//! CLI entrypoint module structure.

pub mod args;
pub mod profile;

pub use args::LaunchProfileArgs;
pub use profile::{
    resolve_server_name, LaunchProfile, ServerName, ServerNameSource, SERVER_NAME_ENV,
};
