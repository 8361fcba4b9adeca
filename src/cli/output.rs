//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::TranslatorError;
use owo_colors::OwoColorize;

/// Exit status for any failed delegated command.
pub const EXIT_FAILURE: i32 = 1;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &TranslatorError) -> String {
    match e {
        TranslatorError::InputNotFound(_) => e.to_string(),
        TranslatorError::ProviderNotConfigured(_) | TranslatorError::ProviderAuthFailed(_) => {
            format!("{} (check AECH_LLM_MODEL and the provider API key)", e)
        }
        _ => format!("Error during translation flow: {}", e),
    }
}

/// Render an error line for stderr, red when `color` is set.
pub fn error_line(e: &TranslatorError, color: bool) -> String {
    let message = map_error(e);
    if color {
        format!("{} {}", "error:".red().bold(), message)
    } else {
        format!("error: {}", message)
    }
}
