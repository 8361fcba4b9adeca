//! Environment variable source.
//!
//! `AECH__SECTION__KEY` maps onto nested keys (`AECH__PROVIDER__MODEL` sets
//! `provider.model`). `AECH_LLM_MODEL` is honoured as the model spec and
//! wins over everything else. Provider API keys fall back to the provider's
//! conventional variable (`OPENAI_API_KEY`, `ANTHROPIC_API_KEY`).

use crate::config::TranslatorConfig;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Legacy single-variable model selector.
pub const MODEL_ENV_VAR: &str = "AECH_LLM_MODEL";

/// Add environment overrides to the builder.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("AECH")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );
    match std::env::var(MODEL_ENV_VAR) {
        Ok(model) if !model.trim().is_empty() => builder.set_override("provider.model", model),
        _ => Ok(builder),
    }
}

/// Fill a missing API key from the provider's conventional variable.
///
/// `lookup` is injected so tests do not have to mutate the process
/// environment.
pub fn apply_api_key_fallback<F>(config: &mut TranslatorConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if config.provider.api_key.as_deref().map_or(false, |k| !k.is_empty()) {
        return;
    }
    let Ok(provider) = config.provider.provider_type() else {
        return;
    };
    if let Some(var) = provider.api_key_env_var() {
        if let Some(key) = lookup(var).filter(|k| !k.is_empty()) {
            config.provider.api_key = Some(key);
        }
    }
}
