//! The declared manifest must mirror the clap command tree.
//!
//! Adding a sub-command or flag without updating the manifest fails here.

use aech_cli_translator::cli::Cli;
use aech_cli_translator::manifest::consistency::{
    check_against_command, global_flags, visible_subcommands,
};
use aech_cli_translator::manifest::{translator_manifest, Manifest, ManifestError, ParameterKind};
use clap::CommandFactory;

#[test]
fn test_manifest_matches_command_tree() {
    let command = Cli::command();
    if let Err(errors) = check_against_command(translator_manifest(), &command) {
        panic!("manifest drifted from CLI: {:#?}", errors);
    }
}

#[test]
fn test_manifest_is_well_formed() {
    if let Err(errors) = translator_manifest().validate() {
        panic!("manifest invalid: {:#?}", errors);
    }
}

#[test]
fn test_manifest_command_is_binary_name() {
    let command = Cli::command();
    assert_eq!(translator_manifest().command, command.get_name());
}

#[test]
fn test_every_visible_subcommand_is_described() {
    let manifest = translator_manifest();
    let names: Vec<&str> = manifest.actions.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(visible_subcommands(&Cli::command()), names);
}

#[test]
fn test_translate_parameters() {
    let translate = translator_manifest().find_action("translate").unwrap();
    let summary: Vec<(&str, ParameterKind, bool)> = translate
        .parameters
        .iter()
        .map(|p| (p.name.as_str(), p.kind, p.required))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("input-file", ParameterKind::Argument, true),
            ("target-lang", ParameterKind::Argument, true),
            ("context", ParameterKind::Option, false),
            ("output-dir", ParameterKind::Option, true),
        ]
    );
}

#[test]
fn test_drift_is_detected() {
    let mut manifest: Manifest = translator_manifest().clone();
    manifest.actions[0].parameters.retain(|p| p.name != "context");
    let errors = check_against_command(&manifest, &Cli::command()).unwrap_err();
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_root_options_are_described() {
    assert_eq!(
        global_flags(&Cli::command()),
        vec!["--config", "--verbose", "--quiet", "--log-level", "--log-format"]
    );
    let text = translator_manifest().to_json_pretty().unwrap();
    for flag in global_flags(&Cli::command()) {
        assert!(text.contains(&flag), "{} missing from manifest", flag);
    }
}

#[test]
fn test_undescribed_root_option_is_detected() {
    let mut manifest: Manifest = translator_manifest().clone();
    if let Some(notes) = manifest
        .documentation
        .as_mut()
        .and_then(|d| d.notes.as_mut())
    {
        notes.retain(|note| !note.contains("--quiet"));
    }
    let errors = check_against_command(&manifest, &Cli::command()).unwrap_err();
    assert_eq!(
        errors,
        vec![ManifestError::GlobalOptionUndocumented("--quiet".to_string())]
    );
}

#[test]
fn test_serialized_manifest_round_trips() {
    let manifest = translator_manifest();
    let text = manifest.to_json_pretty().unwrap();
    let parsed = Manifest::from_json(&text).unwrap();
    assert_eq!(&parsed, manifest);
    assert_eq!(parsed.to_json_pretty().unwrap(), text);
}
