//! Integration tests for configuration layering on the delegated path.

use super::test_utils::{run_isolated, run_with_env};
use aech_cli_translator::config::ConfigLoader;
use aech_cli_translator::provider::ModelProvider;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_input(dir: &Path) -> PathBuf {
    let input = dir.join("notes.md");
    std::fs::write(&input, "# Notes").unwrap();
    input
}

fn translate_args<'a>(input: &'a Path, out_dir: &'a Path) -> Vec<&'a str> {
    vec![
        "translate",
        input.to_str().unwrap(),
        "de",
        "-o",
        out_dir.to_str().unwrap(),
    ]
}

#[test]
fn test_explicit_config_file_selects_provider() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("translator.toml");
    std::fs::write(
        &config_file,
        r#"
[provider]
model = "ollama:llama3"
endpoint = "http://10.0.0.5:11434/v1"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    match config.provider.to_model_provider().unwrap() {
        ModelProvider::Ollama { model, base_url } => {
            assert_eq!(model, "llama3");
            assert_eq!(base_url.as_deref(), Some("http://10.0.0.5:11434/v1"));
        }
        other => panic!("expected ollama provider, got {:?}", other),
    }
}

#[test]
fn test_model_env_var_overrides_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path());
    let out_dir = temp_dir.path().join("out");

    let output = run_with_env(
        temp_dir.path(),
        &[("AECH_LLM_MODEL", "anthropic:claude-sonnet-4")],
        &translate_args(&input, &out_dir),
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ANTHROPIC_API_KEY"), "stderr={}", stderr);
}

#[test]
fn test_log_output_to_stdout_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path());
    let out_dir = temp_dir.path().join("out");
    let config_file = temp_dir.path().join("translator.toml");
    std::fs::write(&config_file, "[logging]\noutput = \"stdout\"\n").unwrap();

    let mut args = vec!["--config", config_file.to_str().unwrap()];
    args.extend(translate_args(&input, &out_dir));
    let output = run_isolated(temp_dir.path(), &args);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_file_logging_captures_command_failure() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path());
    let out_dir = temp_dir.path().join("out");
    let log_file = temp_dir.path().join("logs").join("translator.log");
    let config_file = temp_dir.path().join("translator.toml");
    std::fs::write(
        &config_file,
        format!(
            "[logging]\noutput = \"file\"\nfile = \"{}\"\n",
            log_file.display()
        ),
    )
    .unwrap();

    let mut args = vec!["--config", config_file.to_str().unwrap()];
    args.extend(translate_args(&input, &out_dir));
    let output = run_isolated(temp_dir.path(), &args);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let logged = std::fs::read_to_string(&log_file).unwrap();
    assert!(logged.contains("Command failed"), "log={}", logged);
}

#[test]
fn test_missing_explicit_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path());
    let out_dir = temp_dir.path().join("out");
    let missing = temp_dir.path().join("absent.toml");

    let mut args = vec!["--config", missing.to_str().unwrap()];
    args.extend(translate_args(&input, &out_dir));
    let output = run_isolated(temp_dir.path(), &args);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration error"), "stderr={}", stderr);
}

#[test]
fn test_invalid_settings_fail_before_translation() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path());
    let out_dir = temp_dir.path().join("out");
    let config_file = temp_dir.path().join("translator.toml");
    std::fs::write(
        &config_file,
        "[provider]\nmodel = \"ollama:llama3\"\nendpoint = \"ftp://x\"\n\n[logging]\nlevel = \"loud\"\n",
    )
    .unwrap();

    let mut args = vec!["--config", config_file.to_str().unwrap()];
    args.extend(translate_args(&input, &out_dir));
    let output = run_isolated(temp_dir.path(), &args);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration validation failed"), "stderr={}", stderr);
    assert!(stderr.contains("ftp://x"), "stderr={}", stderr);
    assert!(!out_dir.exists());
}
