use std::process::Command;

use crate::{
    cli::ServerName,
    lib::{
        errors::LaunchError,
        nvim::{attach_flags, listen_flags},
    },
};

use super::LaunchMode;

/// Final argument vector. The first element is the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine(Vec<String>);

impl CommandLine {
    /// Join the editor invocation with the normalized file arguments.
    pub fn assemble(
        invocation: Vec<String>,
        files: impl IntoIterator<Item = String>,
    ) -> Result<Self, LaunchError> {
        if invocation.is_empty() {
            return Err(LaunchError::InvalidOption {
                option: "--editor",
                message: "command must not be empty".into(),
            });
        }
        let mut parts = invocation;
        parts.extend(files);
        Ok(Self(parts))
    }

    pub fn program(&self) -> &str {
        &self.0[0]
    }

    pub fn args(&self) -> &[String] {
        &self.0[1..]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Process builder with stdio inherited and no shell in between.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args());
        command
    }
}

/// Build the editor part of the command line.
///
/// Start mode splits `editor` on whitespace. Quoted arguments are not
/// supported: `nvim -c "set nu"` becomes four tokens.
pub fn build_editor_invocation(
    mode: LaunchMode,
    editor: &str,
    client: &str,
    server_name: &ServerName,
) -> Vec<String> {
    match mode {
        LaunchMode::Start => editor
            .split_whitespace()
            .map(str::to_string)
            .chain(listen_flags(server_name.as_str()))
            .collect(),
        LaunchMode::Attach => std::iter::once(client.to_string())
            .chain(attach_flags(server_name.as_str()))
            .collect(),
    }
}
