//! Configuration System
//!
//! Layered configuration for the translate workflow: compiled defaults, the
//! global config file, an explicit `--config` file, then environment
//! variables. The manifest path never loads configuration.

use crate::logging::LoggingConfig;
use crate::provider::ProviderConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TranslatorConfig {
    /// Model provider used by every workflow step
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Provider(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Provider(msg) => write!(f, "Provider: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl TranslatorConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        self.collect_errors(true)
    }

    /// Validate everything except provider credentials. Used on load; a
    /// missing key surfaces when the provider is resolved.
    pub fn validate_settings(&self) -> Result<(), Vec<ValidationError>> {
        self.collect_errors(false)
    }

    fn collect_errors(&self, require_credentials: bool) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let provider = if require_credentials {
            self.provider.validate()
        } else {
            self.provider.validate_settings()
        };
        if let Err(e) = provider {
            errors.push(ValidationError::Provider(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
