//! End-to-end tests that run the compiled `kubewrap` binary.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn kubewrap() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("kubewrap"));
    cmd.env_remove("COMMAND")
        .env_remove("OUTPUT_FILE")
        .env_remove("GPTSCRIPT_WORKSPACE_DIR")
        .env_remove("KUBEWRAP_LOG");
    cmd
}

#[test]
fn missing_prefix_is_usage_error() {
    let assert = kubewrap().env("COMMAND", "get pods").assert().code(2);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("Usage"), "stderr was: {stderr}");
}

#[test]
fn missing_command_is_config_error() {
    kubewrap()
        .arg("kubewrap-definitely-not-a-real-binary")
        .assert()
        .code(1)
        .stdout("COMMAND is not set, it is required.\n");
}

#[test]
fn empty_command_is_config_error() {
    kubewrap()
        .arg("kubewrap-definitely-not-a-real-binary")
        .env("COMMAND", "")
        .assert()
        .code(1);
}

#[test]
fn launch_failure_exits_zero() {
    kubewrap()
        .arg("kubewrap-definitely-not-a-real-binary")
        .env("COMMAND", "get pods")
        .assert()
        .success();
}

#[cfg(unix)]
#[test]
fn success_prints_stdout_exactly() {
    kubewrap()
        .arg("printf")
        .env("COMMAND", r"'NAME\npod-a\n'")
        .assert()
        .success()
        .stdout("NAME\npod-a\n");
}

#[cfg(unix)]
#[test]
fn command_failure_exits_zero_with_stderr() {
    kubewrap()
        .args(["sh", "-c"])
        .env("COMMAND", "'echo denied >&2; exit 7'")
        .assert()
        .success()
        .stdout("An error occurred when executing the command:\ndenied\n\n");
}

#[cfg(unix)]
#[test]
fn output_file_goes_to_workspace_dir() {
    let workspace = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();

    kubewrap()
        .current_dir(cwd.path())
        .arg("printf")
        .env("COMMAND", "'%s' pods")
        .env("OUTPUT_FILE", "out.txt")
        .env("GPTSCRIPT_WORKSPACE_DIR", workspace.path())
        .assert()
        .success()
        .stdout("Output has been saved to out.txt in the workspace files directory.\n");

    assert_eq!(
        fs::read_to_string(workspace.path().join("files/out.txt")).unwrap(),
        "pods"
    );
    assert!(!cwd.path().join("out.txt").exists());
}

#[cfg(unix)]
#[test]
fn output_file_without_workspace_falls_back_to_local() {
    let cwd = TempDir::new().unwrap();

    kubewrap()
        .current_dir(cwd.path())
        .arg("printf")
        .env("COMMAND", "'%s' pods")
        .env("OUTPUT_FILE", "out.txt")
        .assert()
        .success()
        .stdout("Failed to save to workspace, saving to local file instead.\n");

    assert_eq!(
        fs::read_to_string(cwd.path().join("out.txt")).unwrap(),
        "pods"
    );
}

#[cfg(unix)]
#[test]
fn failed_local_fallback_exits_three() {
    let cwd = TempDir::new().unwrap();

    let assert = kubewrap()
        .current_dir(cwd.path())
        .arg("printf")
        .env("COMMAND", "x")
        .env("OUTPUT_FILE", "no-such-dir/out.txt")
        .assert()
        .code(3);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(
        stderr.contains("Error: failed to write output to 'no-such-dir/out.txt'"),
        "stderr was: {stderr}"
    );
}
