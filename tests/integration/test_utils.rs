//! Shared helpers for running the installed binary in isolation.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary with a scrubbed environment rooted in `home`.
///
/// Only HOME, XDG_CONFIG_HOME and PATH survive, so no user config file,
/// `.env` file, or provider key leaks into the run.
pub fn run_isolated(home: &Path, args: &[&str]) -> Output {
    run_with_env(home, &[], args)
}

/// Like [`run_isolated`], with extra environment variables set.
pub fn run_with_env(home: &Path, envs: &[(&str, &str)], args: &[&str]) -> Output {
    let config_home = home.join("config");
    std::fs::create_dir_all(&config_home).unwrap();

    let mut command = Command::new(env!("CARGO_BIN_EXE_aech-cli-translator"));
    command
        .env_clear()
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", &config_home)
        .current_dir(home)
        .envs(envs.iter().copied())
        .args(args);
    if let Some(path) = std::env::var_os("PATH") {
        command.env("PATH", path);
    }
    command.output().unwrap()
}

/// Run the binary in a fresh temporary home.
pub fn run(args: &[&str]) -> Output {
    let temp_dir = TempDir::new().unwrap();
    run_isolated(temp_dir.path(), args)
}

/// True when stdout parses as a JSON object.
pub fn stdout_is_json_object(output: &Output) -> bool {
    serde_json::from_slice::<serde_json::Value>(&output.stdout)
        .map(|value| value.is_object())
        .unwrap_or(false)
}
