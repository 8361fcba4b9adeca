//! Capability manifest
//!
//! Machine-readable description of every public action and parameter the CLI
//! exposes. Installers and LLM agents read it instead of human help text.
//! The manifest is declared data, built once per process and never derived
//! from argv. Field order in the serialized JSON follows struct declaration
//! order, so output is stable across runs and versions.

use crate::cli::{
    COMMAND_NAME, CONFIG_FLAG, CONTEXT_FLAG, INPUT_FILE_ARG, LOG_FORMAT_FLAG, LOG_LEVEL_FLAG,
    OUTPUT_DIR_FLAG, QUIET_FLAG, TARGET_LANG_ARG, VERBOSE_FLAG,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;
use thiserror::Error;

pub mod consistency;

/// Top-level description of one CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ManifestKind,
    pub command: String,
    pub description: String,
    pub actions: Vec<Action>,
    pub available_in_sandbox: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Documentation>,
}

/// Manifest discriminator. Only CLIs are described today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestKind {
    Cli,
}

/// One sub-command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub description: String,
    pub parameters: Vec<Parameter>,
}

/// One flag or positional accepted by an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ParameterKind,
    pub required: bool,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Argument,
    Option,
}

/// Output-path templates and free-form notes for consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Documentation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
}

/// Contract violations in a manifest, or between a manifest and the CLI it
/// describes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    #[error("field '{field}' must not be empty ({location})")]
    EmptyField { location: String, field: &'static str },

    #[error("action '{0}' is declared more than once")]
    DuplicateAction(String),

    #[error("action '{action}' declares parameter '{parameter}' more than once")]
    DuplicateParameter { action: String, parameter: String },

    #[error("action '{action}' parameter '{parameter}' is not a bare hyphenated flag name")]
    InvalidParameterName { action: String, parameter: String },

    #[error("sub-command '{0}' has no action in the manifest")]
    ActionMissing(String),

    #[error("action '{0}' does not exist in the command tree (or is hidden)")]
    ActionNotInCli(String),

    #[error("action '{action}' is missing parameter '{parameter}'")]
    ParameterMissing { action: String, parameter: String },

    #[error("action '{action}' declares parameter '{parameter}' that the command does not accept")]
    ParameterNotInCli { action: String, parameter: String },

    #[error("action '{action}' parameter '{parameter}': manifest required={declared}, command required={actual}")]
    RequiredMismatch {
        action: String,
        parameter: String,
        declared: bool,
        actual: bool,
    },

    #[error("action '{action}' parameter '{parameter}': manifest type {declared:?}, command type {actual:?}")]
    ParameterTypeMismatch {
        action: String,
        parameter: String,
        declared: ParameterKind,
        actual: ParameterKind,
    },

    #[error("global option '{0}' is accepted by the command but not described in documentation.notes")]
    GlobalOptionUndocumented(String),
}

impl Manifest {
    /// Start a CLI manifest with no actions.
    pub fn cli(
        name: impl Into<String>,
        command: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: ManifestKind::Cli,
            command: command.into(),
            description: description.into(),
            actions: Vec::new(),
            available_in_sandbox: false,
            documentation: None,
        }
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn available_in_sandbox(mut self, available: bool) -> Self {
        self.available_in_sandbox = available;
        self
    }

    pub fn with_documentation(mut self, documentation: Documentation) -> Self {
        self.documentation = Some(documentation);
        self
    }

    pub fn find_action(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.name == name)
    }

    /// Canonical text form: two-space indented JSON with a trailing newline.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        let mut rendered = serde_json::to_string_pretty(self)?;
        rendered.push('\n');
        Ok(rendered)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Check the structural invariants of the manifest.
    ///
    /// Collects every violation rather than stopping at the first one.
    pub fn validate(&self) -> Result<(), Vec<ManifestError>> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("name", &self.name),
            ("command", &self.command),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                errors.push(ManifestError::EmptyField {
                    location: "manifest".to_string(),
                    field,
                });
            }
        }

        let mut action_names = HashSet::new();
        for action in &self.actions {
            if !action_names.insert(action.name.as_str()) {
                errors.push(ManifestError::DuplicateAction(action.name.clone()));
            }
            action.validate_into(&mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Action {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn find_parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    fn validate_into(&self, errors: &mut Vec<ManifestError>) {
        let location = format!("action '{}'", self.name);
        if self.name.trim().is_empty() {
            errors.push(ManifestError::EmptyField {
                location: location.clone(),
                field: "name",
            });
        }
        if self.description.trim().is_empty() {
            errors.push(ManifestError::EmptyField {
                location: location.clone(),
                field: "description",
            });
        }

        let mut seen = HashSet::new();
        for parameter in &self.parameters {
            if !seen.insert(parameter.name.as_str()) {
                errors.push(ManifestError::DuplicateParameter {
                    action: self.name.clone(),
                    parameter: parameter.name.clone(),
                });
            }
            if !is_flag_name(&parameter.name) {
                errors.push(ManifestError::InvalidParameterName {
                    action: self.name.clone(),
                    parameter: parameter.name.clone(),
                });
            }
            if parameter.description.trim().is_empty() {
                errors.push(ManifestError::EmptyField {
                    location: format!("{} parameter '{}'", location, parameter.name),
                    field: "description",
                });
            }
        }
    }
}

impl Parameter {
    /// A positional argument.
    pub fn argument(name: impl Into<String>, required: bool, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Argument,
            required,
            description: description.into(),
        }
    }

    /// A `--flag` style option.
    pub fn option(name: impl Into<String>, required: bool, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Option,
            required,
            description: description.into(),
        }
    }
}

/// Lowercase ASCII words joined by single hyphens; no leading dashes, no
/// underscores.
fn is_flag_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .split('-')
            .all(|word| !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()))
}

static TRANSLATOR_MANIFEST: OnceLock<Manifest> = OnceLock::new();

/// The manifest for this binary, built on first access.
pub fn translator_manifest() -> &'static Manifest {
    TRANSLATOR_MANIFEST.get_or_init(build_translator_manifest)
}

fn build_translator_manifest() -> Manifest {
    let translate = Action::new(
        "translate",
        "Translate a Markdown document into a target language, optionally applying \
         enterprise context. Input: a Markdown file and a target language. Output: two \
         files in `output-dir`: `<stem>_<target-lang>.md` with the translated Markdown and \
         `<stem>_translation_report.md` with QA from the back-translation (overall quality, \
         discrepancies, recommendations). Use whenever a document must be delivered in \
         another language with a verifiable quality check. Example: `translate proposal.md \
         fr --context brand-guide.md --output-dir build/locale`.",
    )
    .with_parameter(Parameter::argument(
        INPUT_FILE_ARG,
        true,
        "Path to the Markdown source document. The file must exist; its stem names both \
         output files.",
    ))
    .with_parameter(Parameter::argument(
        TARGET_LANG_ARG,
        true,
        "Target language as a code or name, e.g. `es`, `fr`, `de-CH`, `Japanese`. Used \
         verbatim in the translated file name.",
    ))
    .with_parameter(Parameter::option(
        CONTEXT_FLAG,
        false,
        "Path to a Markdown file with enterprise context such as a termbase, brand guide or \
         style guide (short form `-c`). Use when domain terminology or tone must be \
         preserved. A missing file is reported as a warning and translation proceeds \
         without context.",
    ))
    .with_parameter(Parameter::option(
        OUTPUT_DIR_FLAG,
        true,
        "Directory that receives both output files (short form `-o`). Created if it does \
         not exist; existing files with the same names are overwritten.",
    ));

    let mut outputs = BTreeMap::new();
    outputs.insert(
        "translated_file".to_string(),
        serde_json::Value::String("<output-dir>/<stem>_<target-lang>.md".to_string()),
    );
    outputs.insert(
        "report_file".to_string(),
        serde_json::Value::String("<output-dir>/<stem>_translation_report.md".to_string()),
    );

    Manifest::cli(
        "translator",
        COMMAND_NAME,
        "Run an end-to-end enterprise translation workflow. Given a Markdown source and \
         optional enterprise context, the CLI translates to the requested language, \
         back-translates for QA, and writes two files to the caller-provided output \
         directory: `<stem>_<lang>.md` containing the translated Markdown and \
         `<stem>_translation_report.md` summarizing QA (overall quality: Pass/Needs \
         Review/Fail, key discrepancies, recommendations). Automations should attach both \
         files and include a short QA summary in the response to the requester. Example: \
         `aech-cli-translator translate docs/blog.md es --context termbase.md --output-dir \
         out/translations`.",
    )
    .with_action(translate)
    .available_in_sandbox(true)
    .with_documentation(Documentation {
        outputs: Some(outputs),
        notes: Some(vec![
            "On success stdout carries a single JSON line: \
             {\"translated_file\": \"...\", \"report_file\": \"...\"}."
                .to_string(),
            "Progress messages and warnings are written to stderr.".to_string(),
            "The model is chosen with AECH_LLM_MODEL as provider:model \
             (default openai:gpt-4.1); the provider API key is read from the environment."
                .to_string(),
            "Global options go before the action name, e.g. \
             `aech-cli-translator --quiet translate doc.md es -o out`."
                .to_string(),
            format!(
                "Global option --{} <PATH>: TOML config file layered over \
                 $XDG_CONFIG_HOME/aech-translator/config.toml.",
                CONFIG_FLAG
            ),
            format!("Global option --{}: debug logging on stderr.", VERBOSE_FLAG),
            format!(
                "Global option --{}: disable logging; conflicts with --{}.",
                QUIET_FLAG, VERBOSE_FLAG
            ),
            format!(
                "Global option --{} <LEVEL>: trace, debug, info, warn, error or off.",
                LOG_LEVEL_FLAG
            ),
            format!("Global option --{} <FORMAT>: text or json.", LOG_FORMAT_FLAG),
            "--version (-V) prints the version and exits.".to_string(),
            "The manifest is only ever written to stdout. If stdout is closed when the \
             process starts, the manifest is discarded and the exit status is still 0; \
             capture stdout to read it."
                .to_string(),
        ]),
    })
}
