use std::fs;

use anyhow::Result;
use serde_json::json;

use crate::common::{run, stdout_json, Sandbox, SERVER_NAME};

#[test]
fn missing_server_name_exits_with_configuration_status() -> Result<()> {
    let sandbox = Sandbox::new()?;
    let mut command = sandbox.command();
    command.args([
        "--client",
        "true",
        "--editor",
        sandbox.fake_editor().as_str(),
        "a.txt",
    ]);

    let output = run(command)?;

    assert_eq!(output.status.code(), Some(1), "{output:?}");
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("unable to find server name"),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(!sandbox.log_path().exists(), "editor must not run");
    Ok(())
}

#[test]
fn no_start_without_server_exits_with_unavailable_status() -> Result<()> {
    let sandbox = Sandbox::new()?;
    let mut command = sandbox.command();
    command.args([
        "--server-name",
        SERVER_NAME,
        "--client",
        "false",
        "--editor",
        sandbox.fake_editor().as_str(),
        "--no-start",
        "a.txt",
    ]);

    let output = run(command)?;

    assert_eq!(output.status.code(), Some(2), "{output:?}");
    assert!(!sandbox.log_path().exists(), "editor must not run");
    Ok(())
}

#[test]
fn unreachable_server_starts_editor_and_propagates_status() -> Result<()> {
    let sandbox = Sandbox::new()?;
    let file = sandbox.touch("a.txt")?;
    let mut command = sandbox.command();
    command
        .env("FAKE_NVIM_EXIT", "5")
        .args([
            "--server-name",
            SERVER_NAME,
            "--client",
            "false",
            "--editor",
            sandbox.fake_editor().as_str(),
            "+10",
            "a.txt",
        ]);

    let output = run(command)?;

    assert_eq!(output.status.code(), Some(5), "{output:?}");
    assert_eq!(
        sandbox.recorded_args()?,
        vec![
            "--listen".to_string(),
            SERVER_NAME.to_string(),
            "+10".to_string(),
            file
        ]
    );
    Ok(())
}

#[test]
fn reachable_server_plans_remote_attach() -> Result<()> {
    let sandbox = Sandbox::new()?;
    let file = sandbox.touch("a.txt")?;
    let mut command = sandbox.command();
    command.args([
        "--server-name",
        SERVER_NAME,
        "--client",
        "true",
        "--dry-run",
        "+10",
        "a.txt",
    ]);

    let output = run(command)?;

    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        stdout_json(&output)?,
        json!({
            "mode": "attach",
            "server_name": SERVER_NAME,
            "command": ["true", "--server", SERVER_NAME, "--remote", "+10", file],
        })
    );
    assert!(!sandbox.log_path().exists(), "dry-run must not execute");
    Ok(())
}

#[test]
fn environment_supplies_server_name() -> Result<()> {
    let sandbox = Sandbox::new()?;
    let mut command = sandbox.command();
    command
        .env("NVIM_LISTEN_ADDRESS", "127.0.0.1:6789")
        .args(["--client", "true", "--dry-run"]);

    let output = run(command)?;

    assert!(output.status.success(), "{output:?}");
    let plan = stdout_json(&output)?;
    assert_eq!(plan["server_name"], "127.0.0.1:6789");
    assert_eq!(
        plan["command"],
        json!(["true", "--server", "127.0.0.1:6789", "--remote"])
    );
    Ok(())
}

#[test]
fn config_file_supplies_client_and_no_start() -> Result<()> {
    let sandbox = Sandbox::new()?;
    let config_path = sandbox.path().join("nvr.toml");
    fs::write(&config_path, "client = \"false\"\nno_start = true\n")?;
    let mut command = sandbox.command();
    command
        .env("NVR_CONFIG_PATH", &config_path)
        .args(["--server-name", SERVER_NAME, "a.txt"]);

    let output = run(command)?;

    assert_eq!(output.status.code(), Some(2), "{output:?}");
    Ok(())
}

#[test]
fn default_config_location_is_read() -> Result<()> {
    let sandbox = Sandbox::new()?;
    let config_dir = sandbox.path().join("xdg").join("nvr");
    fs::create_dir_all(&config_dir)?;
    fs::write(
        config_dir.join("config.toml"),
        format!("editor = \"{}\"\nclient = \"false\"\n", sandbox.fake_editor()),
    )?;
    let mut command = sandbox.command();
    command.args(["--server-name", SERVER_NAME]);

    let output = run(command)?;

    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        sandbox.recorded_args()?,
        vec!["--listen".to_string(), SERVER_NAME.to_string()]
    );
    Ok(())
}

#[test]
fn missing_explicit_config_exits_with_configuration_status() -> Result<()> {
    let sandbox = Sandbox::new()?;
    let mut command = sandbox.command();
    command.args([
        "--config",
        "does-not-exist.toml",
        "--server-name",
        SERVER_NAME,
    ]);

    let output = run(command)?;

    assert_eq!(output.status.code(), Some(1), "{output:?}");
    Ok(())
}
