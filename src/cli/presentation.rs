//! CLI presentation: progress lines on stderr and the JSON result on stdout.

use crate::error::TranslatorError;
use crate::translation::{ProgressReporter, TranslationEvent, TranslationOutcome};
use owo_colors::OwoColorize;

/// Writes workflow progress to stderr, coloured when `color` is set.
pub struct ConsoleReporter {
    color: bool,
}

impl ConsoleReporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn render(&self, event: &TranslationEvent) -> String {
        let text = format_event(event);
        if !self.color {
            return text;
        }
        match event {
            TranslationEvent::ContextMissing(_) => text.yellow().to_string(),
            TranslationEvent::TranslationSaved(_) | TranslationEvent::ReportSaved(_) => {
                text.green().to_string()
            }
            _ => text.blue().to_string(),
        }
    }
}

impl ProgressReporter for ConsoleReporter {
    fn report(&self, event: &TranslationEvent) {
        eprintln!("{}", self.render(event));
    }
}

/// Plain text for one progress event.
pub fn format_event(event: &TranslationEvent) -> String {
    match event {
        TranslationEvent::ContextMissing(path) => format!(
            "Warning: Context file {} not found. Proceeding without context.",
            path.display()
        ),
        TranslationEvent::Translating {
            file_name,
            target_lang,
        } => format!("Translating {} to {}...", file_name, target_lang),
        TranslationEvent::TranslationSaved(path) => {
            format!("Translation saved to {}", path.display())
        }
        TranslationEvent::BackTranslating => "Back-translating for verification...".to_string(),
        TranslationEvent::GeneratingReport => "Generating Quality Report...".to_string(),
        TranslationEvent::ReportSaved(path) => format!("Report saved to {}", path.display()),
    }
}

/// Single-line JSON printed on stdout after a successful run.
pub fn format_translation_outcome(outcome: &TranslationOutcome) -> Result<String, TranslatorError> {
    Ok(serde_json::to_string(outcome)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_events() {
        assert_eq!(
            format_event(&TranslationEvent::Translating {
                file_name: "blog.md".to_string(),
                target_lang: "es".to_string(),
            }),
            "Translating blog.md to es..."
        );
        assert_eq!(
            format_event(&TranslationEvent::ContextMissing(PathBuf::from("ctx.md"))),
            "Warning: Context file ctx.md not found. Proceeding without context."
        );
    }

    #[test]
    fn test_uncoloured_render_is_plain() {
        let reporter = ConsoleReporter::new(false);
        assert_eq!(
            reporter.render(&TranslationEvent::BackTranslating),
            "Back-translating for verification..."
        );
    }

    #[test]
    fn test_coloured_render_wraps_in_escape_codes() {
        let reporter = ConsoleReporter::new(true);
        let rendered = reporter.render(&TranslationEvent::ReportSaved(PathBuf::from("r.md")));
        assert!(rendered.starts_with("\u{1b}["));
        assert!(rendered.contains("Report saved to r.md"));
    }

    #[test]
    fn test_outcome_is_one_line() {
        let outcome = TranslationOutcome {
            translated_file: PathBuf::from("out/blog_es.md"),
            report_file: PathBuf::from("out/blog_translation_report.md"),
        };
        let line = format_translation_outcome(&outcome).unwrap();
        assert!(!line.contains('\n'));
        let parsed: TranslationOutcome = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, outcome);
    }
}
