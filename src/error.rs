//! Error types for the translator CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised on the delegated (non-manifest) command path.
#[derive(Debug, Error)]
pub enum TranslatorError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Provider not configured: {0}")]
    ProviderNotConfigured(String),

    #[error("Provider request failed: {0}")]
    ProviderRequestFailed(String),

    #[error("Provider authentication failed: {0}")]
    ProviderAuthFailed(String),

    #[error("Provider rate limit exceeded: {0}")]
    ProviderRateLimit(String),

    #[error("Provider model not found: {0}")]
    ProviderModelNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TranslatorError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TranslatorError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for TranslatorError {
    fn from(err: config::ConfigError) -> Self {
        TranslatorError::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_message() {
        let err = TranslatorError::InputNotFound(PathBuf::from("docs/missing.md"));
        assert_eq!(err.to_string(), "Input file not found: docs/missing.md");
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = TranslatorError::io(
            "out/report.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("out/report.md"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: TranslatorError = config::ConfigError::Message("bad key".to_string()).into();
        assert!(matches!(err, TranslatorError::ConfigError(ref m) if m.contains("bad key")));
    }
}
