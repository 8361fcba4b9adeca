//! CLI domain: parse, route, help, output, and presentation only.
//! Everything here sits behind the invocation classifier: none of it runs
//! when the manifest is requested.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::{error_line, map_error, EXIT_FAILURE};
pub use parse::{
    Cli, Commands, TranslateArgs, COMMAND_NAME, CONFIG_FLAG, CONTEXT_FLAG, INPUT_FILE_ARG,
    LOG_FORMAT_FLAG, LOG_LEVEL_FLAG, OUTPUT_DIR_FLAG, QUIET_FLAG, TARGET_LANG_ARG, VERBOSE_FLAG,
};
pub use presentation::{format_event, format_translation_outcome, ConsoleReporter};
pub use route::RunContext;
