//! End-to-end invocations of the installed binary.
//!
//! Covers both branches of the entry point: bare help tokens print the
//! manifest, everything else reaches the clap-driven CLI.

use super::test_utils::{run, run_isolated, stdout_is_json_object};
use aech_cli_translator::manifest::{translator_manifest, Manifest};
use tempfile::TempDir;

#[test]
fn test_long_help_prints_manifest() {
    let output = run(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with('{'));
    assert!(stdout.contains("\"type\": \"cli\""));
    assert!(stdout.ends_with('\n'));

    let parsed = Manifest::from_json(&stdout).unwrap();
    assert_eq!(&parsed, translator_manifest());
}

#[test]
fn test_short_help_prints_same_manifest() {
    let long = run(&["--help"]);
    let short = run(&["-h"]);

    assert_eq!(short.status.code(), Some(0));
    assert_eq!(long.stdout, short.stdout);
}

#[test]
fn test_manifest_is_byte_identical_across_runs() {
    let first = run(&["--help"]);
    let second = run(&["--help"]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_manifest_mode_writes_nothing_to_stderr() {
    let output = run(&["-h"]);
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {:?}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_manifest_ignores_broken_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let app_dir = temp_dir.path().join("config").join("aech-translator");
    std::fs::create_dir_all(&app_dir).unwrap();
    std::fs::write(app_dir.join("config.toml"), "this is [not toml").unwrap();

    let output = run_isolated(temp_dir.path(), &["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_is_json_object(&output));
}

#[cfg(target_os = "linux")]
#[test]
fn test_unwritable_stdout_exits_with_io_error() {
    use aech_cli_translator::emit::EXIT_WRITE_FAILED;
    use std::fs::OpenOptions;
    use std::process::{Command, Stdio};

    let full = OpenOptions::new().write(true).open("/dev/full").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_aech-cli-translator"))
        .arg("--help")
        .stdin(Stdio::null())
        .stdout(Stdio::from(full))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(EXIT_WRITE_FAILED));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to write manifest"), "stderr={}", stderr);
    assert!(!stderr.contains("\"type\""));
}

#[test]
fn test_subcommand_help_is_human_readable() {
    let output = run(&["translate", "--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout_is_json_object(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("--output-dir"));
}

#[test]
fn test_no_arguments_is_not_manifest() {
    let output = run(&[]);

    assert!(!output.status.success());
    assert!(!stdout_is_json_object(&output));
}

#[test]
fn test_help_with_extra_argument_is_not_manifest() {
    let output = run(&["--help", "--extra"]);
    assert!(!stdout_is_json_object(&output));
}

#[test]
fn test_near_miss_help_tokens_are_not_manifest() {
    for args in [&["-h", "-h"][..], &["--HELP"], &["-help"], &["help"]] {
        let output = run(args);
        assert!(!stdout_is_json_object(&output), "args {:?} printed JSON", args);
    }
}

#[test]
fn test_translate_without_api_key_fails_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("blog.md");
    std::fs::write(&input, "# Hello").unwrap();
    let out_dir = temp_dir.path().join("out");

    let output = run_isolated(
        temp_dir.path(),
        &[
            "translate",
            input.to_str().unwrap(),
            "es",
            "--output-dir",
            out_dir.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Provider not configured"), "stderr={}", stderr);
    assert!(!out_dir.exists());
}

#[test]
fn test_translate_missing_output_dir_is_usage_error() {
    let output = run(&["translate", "blog.md", "es"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
