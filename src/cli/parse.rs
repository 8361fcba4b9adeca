//! CLI parse: clap types for the translator. No behavior; definitions only.
//!
//! Parameter ids and long flag names are shared with the manifest through the
//! constants below, so the two cannot drift apart silently.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Installed binary name.
pub const COMMAND_NAME: &str = "aech-cli-translator";

pub const INPUT_FILE_ARG: &str = "input-file";
pub const TARGET_LANG_ARG: &str = "target-lang";
pub const CONTEXT_FLAG: &str = "context";
pub const OUTPUT_DIR_FLAG: &str = "output-dir";

pub const CONFIG_FLAG: &str = "config";
pub const VERBOSE_FLAG: &str = "verbose";
pub const QUIET_FLAG: &str = "quiet";
pub const LOG_LEVEL_FLAG: &str = "log-level";
pub const LOG_FORMAT_FLAG: &str = "log-format";

/// Aech CLI Translator - enterprise translation with back-translation QA
#[derive(Parser, Debug)]
#[command(name = COMMAND_NAME)]
#[command(about = "Enterprise translation with back-translation QA")]
#[command(version)]
#[command(arg_required_else_help = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the global config)
    #[arg(long = CONFIG_FLAG, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long = VERBOSE_FLAG)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long = QUIET_FLAG, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long = LOG_LEVEL_FLAG, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long = LOG_FORMAT_FLAG, value_name = "FORMAT")]
    pub log_format: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a Markdown document with enterprise context and back-translation verification
    Translate(TranslateArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TranslateArgs {
    /// Input Markdown file
    #[arg(id = INPUT_FILE_ARG, value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Target language code
    #[arg(id = TARGET_LANG_ARG, value_name = "TARGET_LANG")]
    pub target_lang: String,

    /// Path to a markdown file containing enterprise context
    #[arg(short = 'c', long = CONTEXT_FLAG, value_name = "PATH")]
    pub context: Option<PathBuf>,

    /// Directory to save output
    #[arg(short = 'o', long = OUTPUT_DIR_FLAG, value_name = "DIR")]
    pub output_dir: PathBuf,
}
