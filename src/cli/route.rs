//! CLI route: single route table and run context for the delegated path.

use crate::cli::help::command_name;
use crate::cli::parse::{Commands, TranslateArgs};
use crate::cli::presentation::{format_translation_outcome, ConsoleReporter};
use crate::config::TranslatorConfig;
use crate::error::TranslatorError;
use crate::provider::ProviderFactory;
use crate::translation::{TranslationRequest, TranslationWorkflow};
use tracing::{info, info_span};

/// Runtime context for CLI execution: resolved configuration and console
/// preferences.
pub struct RunContext {
    config: TranslatorConfig,
    color: bool,
}

impl RunContext {
    pub fn new(config: TranslatorConfig, color: bool) -> Self {
        Self { config, color }
    }

    /// Execute a CLI command via the single route table. Returns the text to
    /// print on stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, TranslatorError> {
        let _span = info_span!("cli", command = command_name(command)).entered();
        match command {
            Commands::Translate(args) => self.handle_translate(args),
        }
    }

    fn handle_translate(&self, args: &TranslateArgs) -> Result<String, TranslatorError> {
        let provider = self.config.provider.to_model_provider()?;
        let client = ProviderFactory::create_client(&provider)?;
        info!(
            provider = client.provider_name(),
            model = client.model_name(),
            "Provider resolved"
        );

        let request = TranslationRequest {
            input_file: args.input_file.clone(),
            target_lang: args.target_lang.clone(),
            context_file: args.context.clone(),
            output_dir: args.output_dir.clone(),
        };
        let reporter = ConsoleReporter::new(self.color);
        let workflow = TranslationWorkflow::new(
            client.as_ref(),
            self.config.provider.completion_options(),
            &reporter,
        );

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| TranslatorError::ProviderError(format!("Failed to start runtime: {}", e)))?;
        let outcome = runtime.block_on(workflow.run(&request))?;

        format_translation_outcome(&outcome)
    }
}
