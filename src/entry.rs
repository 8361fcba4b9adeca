//! Process entry point shared by the installed binary and embedders.
//!
//! The classifier runs first, on the raw argv. On the manifest path nothing
//! else is constructed: no config, no logger, no clap parser. On the
//! delegated path the untouched argv goes to clap.

use crate::classify::{classify, Invocation};
use crate::cli::{error_line, Cli, RunContext, EXIT_FAILURE};
use crate::config::ConfigLoader;
use crate::emit::emit_to_stdout;
use crate::logging::{init_logging, LoggingConfig};
use crate::manifest::translator_manifest;
use clap::Parser;
use std::ffi::OsString;
use std::io::IsTerminal;
use tracing::{debug, error};

/// Run one invocation and return the process exit status.
///
/// `argv` includes the program name, as `std::env::args_os()` yields it.
pub fn run<I, T>(argv: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let args = argv.get(1..).unwrap_or_default();

    match classify(args) {
        Invocation::EmitManifest => emit_to_stdout(translator_manifest()),
        Invocation::Delegate => delegate(argv),
    }
}

fn delegate(argv: Vec<OsString>) -> i32 {
    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(e) => {
            // clap owns help, version and usage output and their exit codes
            let _ = e.print();
            return e.exit_code();
        }
    };

    dotenvy::dotenv().ok();
    let color = std::io::stderr().is_terminal();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", error_line(&e, color));
            return EXIT_FAILURE;
        }
    };

    let logging_config = build_logging_config(&cli, &config.logging);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        return EXIT_FAILURE;
    }
    debug!(model = %config.provider.model, "Configuration loaded");

    let context = RunContext::new(config, color);
    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", error_line(&e, color));
            EXIT_FAILURE
        }
    }
}

/// Merge CLI logging flags over the configured logging section.
/// Precedence: CLI flags override config file override defaults.
pub fn build_logging_config(cli: &Cli, base: &LoggingConfig) -> LoggingConfig {
    let mut config = base.clone();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
