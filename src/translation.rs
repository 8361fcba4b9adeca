//! Translation workflow
//!
//! Translate a Markdown document, back-translate it, and have an auditor
//! compare the back-translation with the original. Produces two files in the
//! output directory: `<stem>_<lang>.md` and `<stem>_translation_report.md`.

use crate::error::TranslatorError;
use crate::provider::{ChatMessage, CompletionOptions, ModelProviderClient};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

pub const TRANSLATOR_SYSTEM_PROMPT: &str = "You are an expert enterprise translator. \
Translate the content accurately, preserving formatting (Markdown). \
Use the provided Enterprise Context to ensure correct terminology. \
Do not add conversational filler. Output ONLY the translated markdown.";

pub const BACK_TRANSLATOR_SYSTEM_PROMPT: &str = "You are an expert translator. \
Translate the text back to the original language (English/Source). \
Output ONLY the translated markdown.";

pub const AUDITOR_SYSTEM_PROMPT: &str = "You are a Translation Quality Assurance Auditor. \
Compare the Original Text and the Back-Translated Text. \
Identify any significant discrepancies in meaning, tone, or terminology. \
Ignore minor phrasing differences if the meaning is preserved. \
Output a Markdown report with: \
- Overall Quality Assessment (Pass/Fail/Needs Review) \
- Key Discrepancies (if any) \
- Recommendations";

/// Inputs of one translate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub input_file: PathBuf,
    pub target_lang: String,
    pub context_file: Option<PathBuf>,
    pub output_dir: PathBuf,
}

/// Paths written by a successful run; printed as JSON on stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationOutcome {
    pub translated_file: PathBuf,
    pub report_file: PathBuf,
}

/// Progress notifications, rendered by the CLI on stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationEvent {
    ContextMissing(PathBuf),
    Translating { file_name: String, target_lang: String },
    TranslationSaved(PathBuf),
    BackTranslating,
    GeneratingReport,
    ReportSaved(PathBuf),
}

pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: &TranslationEvent);
}

/// Reporter that drops every event.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: &TranslationEvent) {}
}

/// Source text and context, read before any provider call.
#[derive(Debug)]
struct PreparedInput {
    source_text: String,
    context_text: String,
    stem: String,
}

pub fn translated_file_name(stem: &str, target_lang: &str) -> String {
    format!("{}_{}.md", stem, target_lang)
}

pub fn report_file_name(stem: &str) -> String {
    format!("{}_translation_report.md", stem)
}

pub fn translation_prompt(target_lang: &str, context_text: &str, source_text: &str) -> String {
    format!(
        "Target Language: {target_lang}\n\n\
         Enterprise Context:\n{context_text}\n\n\
         Content to Translate:\n{source_text}\n"
    )
}

pub fn back_translation_prompt(target_lang: &str, translated_text: &str) -> String {
    format!(
        "Translate the following {target_lang} text back to the original language:\n\
         {translated_text}\n"
    )
}

pub fn report_prompt(source_text: &str, back_translated_text: &str) -> String {
    format!(
        "Original Text:\n{source_text}\n\n\
         Back-Translated Text:\n{back_translated_text}\n"
    )
}

/// Runs the three-step workflow against one provider client.
pub struct TranslationWorkflow<'a> {
    client: &'a dyn ModelProviderClient,
    options: CompletionOptions,
    reporter: &'a dyn ProgressReporter,
}

impl<'a> TranslationWorkflow<'a> {
    pub fn new(
        client: &'a dyn ModelProviderClient,
        options: CompletionOptions,
        reporter: &'a dyn ProgressReporter,
    ) -> Self {
        Self {
            client,
            options,
            reporter,
        }
    }

    #[instrument(skip(self), fields(provider = self.client.provider_name(), model = self.client.model_name()))]
    pub async fn run(&self, request: &TranslationRequest) -> Result<TranslationOutcome, TranslatorError> {
        let prepared = self.prepare(request)?;

        let file_name = request
            .input_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| prepared.stem.clone());
        self.reporter.report(&TranslationEvent::Translating {
            file_name,
            target_lang: request.target_lang.clone(),
        });
        let translated_text = self
            .ask(
                TRANSLATOR_SYSTEM_PROMPT,
                translation_prompt(&request.target_lang, &prepared.context_text, &prepared.source_text),
            )
            .await?;

        let translated_file = request
            .output_dir
            .join(translated_file_name(&prepared.stem, &request.target_lang));
        write_file(&translated_file, &translated_text)?;
        self.reporter
            .report(&TranslationEvent::TranslationSaved(translated_file.clone()));

        self.reporter.report(&TranslationEvent::BackTranslating);
        let back_translated_text = self
            .ask(
                BACK_TRANSLATOR_SYSTEM_PROMPT,
                back_translation_prompt(&request.target_lang, &translated_text),
            )
            .await?;

        self.reporter.report(&TranslationEvent::GeneratingReport);
        let report_text = self
            .ask(
                AUDITOR_SYSTEM_PROMPT,
                report_prompt(&prepared.source_text, &back_translated_text),
            )
            .await?;

        let report_file = request.output_dir.join(report_file_name(&prepared.stem));
        write_file(&report_file, &report_text)?;
        self.reporter
            .report(&TranslationEvent::ReportSaved(report_file.clone()));

        info!(translated = %translated_file.display(), report = %report_file.display(), "Translation complete");
        Ok(TranslationOutcome {
            translated_file,
            report_file,
        })
    }

    /// Create the output directory, then read the input and optional context.
    fn prepare(&self, request: &TranslationRequest) -> Result<PreparedInput, TranslatorError> {
        std::fs::create_dir_all(&request.output_dir)
            .map_err(|e| TranslatorError::io(&request.output_dir, e))?;

        if !request.input_file.exists() {
            return Err(TranslatorError::InputNotFound(request.input_file.clone()));
        }
        let source_text = std::fs::read_to_string(&request.input_file)
            .map_err(|e| TranslatorError::io(&request.input_file, e))?;

        let context_text = match &request.context_file {
            Some(path) if path.exists() => {
                std::fs::read_to_string(path).map_err(|e| TranslatorError::io(path, e))?
            }
            Some(path) => {
                self.reporter
                    .report(&TranslationEvent::ContextMissing(path.clone()));
                String::new()
            }
            None => String::new(),
        };

        let stem = request
            .input_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());

        Ok(PreparedInput {
            source_text,
            context_text,
            stem,
        })
    }

    async fn ask(&self, system_prompt: &str, prompt: String) -> Result<String, TranslatorError> {
        let response = self
            .client
            .complete(
                vec![ChatMessage::system(system_prompt), ChatMessage::user(prompt)],
                self.options.clone(),
            )
            .await?;
        debug!(
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "Completion received"
        );
        Ok(response.content)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), TranslatorError> {
    std::fs::write(path, contents).map_err(|e| TranslatorError::io(path, e))
}
