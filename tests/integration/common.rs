use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_nvr");
pub const SERVER_NAME: &str = "/tmp/nvr-integration.sock";

/// Shell script standing in for `nvim` in start mode: records its arguments
/// one per line and exits with `FAKE_NVIM_EXIT`.
const FAKE_EDITOR_SCRIPT: &str = r#"printf '%s\n' "$@" > "$FAKE_NVIM_LOG"
exit "${FAKE_NVIM_EXIT:-0}"
"#;

/// Isolated working directory with a fake editor and no user config.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("failed to create sandbox")?;
        fs::write(dir.path().join("fake-nvim.sh"), FAKE_EDITOR_SCRIPT)
            .context("failed to write fake editor")?;
        fs::create_dir(dir.path().join("xdg")).context("failed to create xdg dir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `--editor` value that runs the fake editor through `sh`.
    pub fn fake_editor(&self) -> String {
        format!("sh {}", self.path().join("fake-nvim.sh").display())
    }

    pub fn log_path(&self) -> PathBuf {
        self.path().join("editor.log")
    }

    pub fn touch(&self, name: &str) -> Result<String> {
        let path = self.path().join(name);
        fs::write(&path, name).with_context(|| format!("failed to write {}", path.display()))?;
        let canonical = fs::canonicalize(&path)
            .with_context(|| format!("failed to canonicalize {}", path.display()))?;
        Ok(canonical.display().to_string())
    }

    pub fn recorded_args(&self) -> Result<Vec<String>> {
        let log = fs::read_to_string(self.log_path()).context("fake editor did not run")?;
        Ok(log.lines().map(str::to_string).collect())
    }

    /// `nvr` with a scrubbed environment rooted in the sandbox.
    pub fn command(&self) -> Command {
        let mut command = Command::new(BINARY_PATH);
        command
            .current_dir(self.path())
            .env_remove("NVIM_LISTEN_ADDRESS")
            .env_remove("NVR_CONFIG_PATH")
            .env_remove("RUST_LOG")
            .env("XDG_CONFIG_HOME", self.path().join("xdg"))
            .env("FAKE_NVIM_LOG", self.log_path())
            .stdin(Stdio::null());
        command
    }
}

pub fn run(mut command: Command) -> Result<Output> {
    command.output().context("failed to run nvr")
}

pub fn stdout_json(output: &Output) -> Result<Value> {
    serde_json::from_slice(&output.stdout).with_context(|| {
        format!(
            "stdout is not JSON: {}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}
