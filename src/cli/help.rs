//! Command-name contract for logging spans.

use crate::cli::parse::Commands;

/// Stable sub-command token, matching the manifest action name.
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Translate(_) => "translate",
    }
}
