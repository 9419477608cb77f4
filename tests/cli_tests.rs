//! CLI argument parsing integration tests

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary in `cwd` with no GitHub credentials in the environment
fn run_cli(args: &[&str], cwd: &Path) -> Output {
    run_cli_with_env(args, cwd, &[])
}

/// Like [`run_cli`], with `vars` set on top of the cleaned environment
fn run_cli_with_env(args: &[&str], cwd: &Path, vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_repo-creator"))
        .args(args)
        .current_dir(cwd)
        .env_remove("GITHUB_TOKEN")
        .env_remove("GITHUB_USERNAME")
        .env_remove("GITHUB_API_URL")
        .env_remove("RUST_LOG")
        .envs(vars.iter().copied())
        .output()
        .expect("Failed to execute repo-creator")
}

#[test]
fn test_cli_help_lists_commands() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli(&["--help"], temp_dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    for command in ["create", "from-template", "protect", "create-branch", "protect-safe", "test", "setup"] {
        assert!(stdout.contains(command), "missing {command}");
    }
}

#[test]
fn test_cli_invalid_subcommand() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli(&["invalid-command"], temp_dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unrecognized subcommand") || stderr.contains("invalid"));
}

#[test]
fn test_create_without_token_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli(&["create", "demo"], temp_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GITHUB_TOKEN is required"));
    // Nothing is written before the credential check
    assert!(!temp_dir.path().join("README.md").exists());
}

#[test]
fn test_create_rejects_invalid_repository_name() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli(&["create", "bad name"], temp_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid value 'bad name'"));
}

#[test]
fn test_create_with_missing_files_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli(&["create", "demo", "--files", "missing.json"], temp_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("file not found"));
}

#[test]
fn test_from_template_missing_path_fails_before_connecting() {
    let temp_dir = TempDir::new().unwrap();
    // Nothing listens on the discard port, so any request would be a transport error
    let output = run_cli_with_env(
        &["from-template", "demo", "nonexistent"],
        temp_dir.path(),
        &[("GITHUB_TOKEN", "dummy"), ("GITHUB_API_URL", "http://127.0.0.1:9")],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"), "stderr: {stderr}");
    assert!(!stderr.contains("GitHub request failed"));
}

#[test]
fn test_protect_rejects_unknown_type() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli(&["protect", "demo", "--type", "other"], temp_dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value"));
}

#[test]
fn test_from_template_requires_path() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli(&["from-template", "demo"], temp_dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("required"));
}

#[test]
fn test_setup_creates_env_file_from_template() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("env.example"), "GITHUB_TOKEN=\n").unwrap();

    let output = run_cli(&["setup"], temp_dir.path());

    assert!(output.status.success());
    assert!(temp_dir.path().join(".env").exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created .env file from template"));
    assert!(stdout.contains("Configuration error"));
}

#[test]
fn test_setup_without_template_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli(&["setup"], temp_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("env.example file not found"));
}
