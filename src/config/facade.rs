//! Single entry point for loading configuration.

use super::merge::merge_policy;
use super::sources::{environment, global_file};
use super::{TranslatorConfig, ValidationError};
use crate::error::TranslatorError;
use config::File;
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the full layered configuration.
    ///
    /// Precedence (lowest to highest): defaults, global file, `explicit`
    /// file, `AECH__*` environment, `AECH_LLM_MODEL`. A missing API key is
    /// then filled from the provider's conventional variable, and every
    /// setting apart from credentials is validated.
    pub fn load(explicit: Option<&Path>) -> Result<TranslatorConfig, TranslatorError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        builder = global_file::add_to_builder(builder)?;
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = environment::add_to_builder(builder)?;

        let mut config: TranslatorConfig = builder.build()?.try_deserialize()?;
        environment::apply_api_key_fallback(&mut config, |var| std::env::var(var).ok());
        config.validate_settings().map_err(validation_failed)?;
        Ok(config)
    }

    /// Load defaults plus a single file, ignoring the global file and the
    /// environment.
    pub fn load_from_file(path: &Path) -> Result<TranslatorConfig, TranslatorError> {
        let config: TranslatorConfig = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()?;
        config.validate_settings().map_err(validation_failed)?;
        Ok(config)
    }
}

fn validation_failed(errors: Vec<ValidationError>) -> TranslatorError {
    let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    TranslatorError::ConfigError(format!(
        "Configuration validation failed: {}",
        error_msgs.join("; ")
    ))
}
