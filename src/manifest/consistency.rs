//! Cross-check a declared manifest against the live clap command tree.
//!
//! Used from tests and release tooling only; the runtime manifest path never
//! touches clap.

use super::{Manifest, ManifestError, ParameterKind};
use clap::{Arg, ArgAction, Command};

/// A parameter as the command tree sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandParameter {
    pub name: String,
    pub kind: ParameterKind,
    pub required: bool,
}

/// Visible sub-command names in declaration order.
pub fn visible_subcommands(command: &Command) -> Vec<String> {
    command
        .get_subcommands()
        .filter(|sub| !sub.is_hide_set())
        .map(|sub| sub.get_name().to_string())
        .collect()
}

/// Visible arguments, excluding clap's own help and version flags.
fn visible_args(command: &Command) -> impl Iterator<Item = &Arg> {
    command
        .get_arguments()
        .filter(|arg| !arg.is_hide_set())
        .filter(|arg| {
            !matches!(
                arg.get_action(),
                ArgAction::Help | ArgAction::HelpShort | ArgAction::HelpLong | ArgAction::Version
            )
        })
}

/// Visible parameters of one sub-command, excluding clap's own help and
/// version flags.
pub fn command_parameters(command: &Command) -> Vec<CommandParameter> {
    visible_args(command)
        .map(|arg| CommandParameter {
            name: parameter_name(arg),
            kind: if arg.is_positional() {
                ParameterKind::Argument
            } else {
                ParameterKind::Option
            },
            required: arg.is_required_set(),
        })
        .collect()
}

/// Flag text without leading dashes, or the declared id for positionals.
fn parameter_name(arg: &Arg) -> String {
    if arg.is_positional() {
        return arg.get_id().as_str().to_string();
    }
    arg.get_long()
        .map(str::to_string)
        .or_else(|| arg.get_short().map(|c| c.to_string()))
        .unwrap_or_else(|| arg.get_id().as_str().to_string())
}

/// Command-line spelling of each visible root-level argument: `--long`,
/// `-s`, or the id for positionals.
pub fn global_flags(command: &Command) -> Vec<String> {
    visible_args(command)
        .map(|arg| {
            if arg.is_positional() {
                arg.get_id().as_str().to_string()
            } else if let Some(long) = arg.get_long() {
                format!("--{}", long)
            } else if let Some(short) = arg.get_short() {
                format!("-{}", short)
            } else {
                arg.get_id().as_str().to_string()
            }
        })
        .collect()
}

/// True when `flag` appears in `note` as a whole token.
fn mentions_flag(note: &str, flag: &str) -> bool {
    let is_flag_char = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_';
    note.match_indices(flag).any(|(start, _)| {
        let before = note[..start].chars().next_back();
        let after = note[start + flag.len()..].chars().next();
        !before.is_some_and(is_flag_char) && !after.is_some_and(is_flag_char)
    })
}

/// Verify that `manifest` mirrors `command` exactly.
///
/// Every visible sub-command must have one action and every action must map
/// to a visible sub-command. Within an action, parameters must match by
/// name, type and requiredness in both directions. Root-level options have
/// no action to live in, so each must be named in `documentation.notes`.
pub fn check_against_command(
    manifest: &Manifest,
    command: &Command,
) -> Result<(), Vec<ManifestError>> {
    let mut errors = Vec::new();
    let visible = visible_subcommands(command);

    for name in &visible {
        if manifest.actions.iter().all(|a| &a.name != name) {
            errors.push(ManifestError::ActionMissing(name.clone()));
        }
    }

    for action in &manifest.actions {
        let Some(sub) = command
            .get_subcommands()
            .find(|sub| sub.get_name() == action.name && !sub.is_hide_set())
        else {
            errors.push(ManifestError::ActionNotInCli(action.name.clone()));
            continue;
        };

        let actual = command_parameters(sub);

        for param in &actual {
            match action.find_parameter(&param.name) {
                None => errors.push(ManifestError::ParameterMissing {
                    action: action.name.clone(),
                    parameter: param.name.clone(),
                }),
                Some(declared) => {
                    if declared.required != param.required {
                        errors.push(ManifestError::RequiredMismatch {
                            action: action.name.clone(),
                            parameter: param.name.clone(),
                            declared: declared.required,
                            actual: param.required,
                        });
                    }
                    if declared.kind != param.kind {
                        errors.push(ManifestError::ParameterTypeMismatch {
                            action: action.name.clone(),
                            parameter: param.name.clone(),
                            declared: declared.kind,
                            actual: param.kind,
                        });
                    }
                }
            }
        }

        for declared in &action.parameters {
            if actual.iter().all(|p| p.name != declared.name) {
                errors.push(ManifestError::ParameterNotInCli {
                    action: action.name.clone(),
                    parameter: declared.name.clone(),
                });
            }
        }
    }

    let notes: &[String] = manifest
        .documentation
        .as_ref()
        .and_then(|d| d.notes.as_deref())
        .unwrap_or(&[]);
    for flag in global_flags(command) {
        if !notes.iter().any(|note| mentions_flag(note, &flag)) {
            errors.push(ManifestError::GlobalOptionUndocumented(flag));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
