//! Validation of a whole pull request description.
//!
//! Runs extraction and classification for every configured section and folds
//! the outcomes into a single [`ValidationVerdict`].

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::quality::{classify, ClassificationOutcome};
use crate::report::ResultSink;
use crate::section::{ExtractionResult, SectionExtractor, SectionSpec};
use crate::source::DocumentSource;

/// Acknowledgment produced when every section passes.
pub const SUCCESS_MESSAGE: &str = "✅ PR description is valid.";

/// Outcome for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    pub label: String,
    pub outcome: ClassificationOutcome,
}

/// Result of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationVerdict {
    /// True when no diagnostics were produced
    pub passed: bool,
    /// Diagnostics in section order
    pub messages: Vec<String>,
    /// Per-section outcomes in section order
    pub sections: Vec<SectionReport>,
    /// Combined failure message, or the success acknowledgment
    pub summary: String,
}

/// Validates documents against an ordered list of section specs.
#[derive(Debug, Clone)]
pub struct Validator {
    specs: Vec<SectionSpec>,
    extractor: SectionExtractor,
}

impl Validator {
    pub fn new(specs: Vec<SectionSpec>) -> Self {
        let extractor = SectionExtractor::for_specs(&specs);
        Self { specs, extractor }
    }

    pub fn specs(&self) -> &[SectionSpec] {
        &self.specs
    }

    /// Validate a document. Never fails; bad input shows up as diagnostics.
    pub fn validate(&self, document: &str) -> ValidationVerdict {
        let mut messages = Vec::new();
        let mut sections = Vec::with_capacity(self.specs.len());

        for spec in &self.specs {
            let extracted = self.extractor.extract(document, &spec.label);
            let outcome = match (&extracted, spec.required) {
                (ExtractionResult::Missing, false) => ClassificationOutcome::Ok,
                _ => classify(&extracted, spec),
            };
            debug!(section = %spec.label, %outcome, "classified section");

            if let Some(message) = diagnostic(spec, outcome) {
                messages.push(message);
            }
            sections.push(SectionReport {
                label: spec.label.clone(),
                outcome,
            });
        }

        let passed = messages.is_empty();
        let summary = if passed {
            SUCCESS_MESSAGE.to_string()
        } else {
            failure_message(&self.specs, &messages)
        };

        ValidationVerdict {
            passed,
            messages,
            sections,
            summary,
        }
    }

    /// Read the document from `source`, validate it, and hand the verdict to `sink`.
    pub fn run(
        &self,
        source: &dyn DocumentSource,
        sink: &mut dyn ResultSink,
    ) -> Result<ValidationVerdict> {
        let document = source.read_document()?;
        info!(source = %source.describe(), bytes = document.len(), "validating description");

        let verdict = self.validate(&document);
        sink.report(&verdict)?;
        Ok(verdict)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(SectionSpec::defaults())
    }
}

/// Validate `document` against `specs`.
pub fn validate(document: &str, specs: &[SectionSpec]) -> ValidationVerdict {
    Validator::new(specs.to_vec()).validate(document)
}

/// Human-readable diagnostic for a failed section, `None` for `Ok`.
pub fn diagnostic(spec: &SectionSpec, outcome: ClassificationOutcome) -> Option<String> {
    let label = &spec.label;
    let message = match outcome {
        ClassificationOutcome::Ok => return None,
        ClassificationOutcome::Missing => format!("👀 {} section is missing.", label),
        ClassificationOutcome::Empty => format!("👀 {} section is empty.", label),
        ClassificationOutcome::RepetitiveNoise => {
            format!("👀 {} section contains low-quality repetitive content.", label)
        }
        ClassificationOutcome::MostlyEmojis => {
            format!("👀 {} section contains mostly emojis, which is not valid.", label)
        }
        ClassificationOutcome::TooShort => {
            let na_hint = if spec.allow_na { ", or use 'N/A'" } else { "" };
            format!(
                "👀 {} section is too short (minimum {} visible characters{}).",
                label, spec.min_length, na_hint
            )
        }
    };
    Some(message)
}

/// First line of the failure message, naming every required label.
pub fn failure_header(specs: &[SectionSpec]) -> String {
    let labels: Vec<String> = specs
        .iter()
        .map(|spec| format!("'{}:'", spec.label))
        .collect();

    let list = match labels.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    };

    format!(
        "❌ ERROR: The PR description must contain valid {} sections.",
        list
    )
}

/// The "Expected format" hint block.
pub fn expected_format(specs: &[SectionSpec]) -> String {
    let mut lines = vec!["💡 Expected format:".to_string()];
    lines.extend(specs.iter().map(SectionSpec::example_line));
    lines.join("\n")
}

fn failure_message(specs: &[SectionSpec], messages: &[String]) -> String {
    format!(
        "{}\n{}\n\n{}",
        failure_header(specs),
        messages.join("\n"),
        expected_format(specs)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOOTER: &str = "💡 Expected format:\nDescription: Short summary of the change...\nTask: https://gradiweb.monday.com/... or N/A\nDemo: Video link or N/A";

    fn run_default(doc: &str) -> ValidationVerdict {
        Validator::default().validate(doc)
    }

    #[test]
    fn test_valid_description_passes() {
        let verdict = run_default(
            "**Description:** This is a valid description with more than 30 characters.\n**Task:** https://x.com/1\n**Demo:** N/A",
        );
        assert!(verdict.passed, "{:?}", verdict.messages);
        assert!(verdict.messages.is_empty());
        assert_eq!(verdict.summary, SUCCESS_MESSAGE);
    }

    #[test]
    fn test_missing_description() {
        let verdict = run_default("**Task:** https://x.com/1\n**Demo:** N/A");
        assert!(!verdict.passed);
        assert_eq!(
            verdict.messages,
            vec!["👀 Description section is missing.".to_string()]
        );
        assert_eq!(verdict.sections[0].outcome, ClassificationOutcome::Missing);
    }

    #[test]
    fn test_empty_description() {
        let verdict = run_default("**Description:** \n**Task:** https://x.com/1\n**Demo:** N/A");
        assert!(!verdict.passed);
        assert_eq!(
            verdict.messages,
            vec!["👀 Description section is empty.".to_string()]
        );
    }

    #[test]
    fn test_emoji_description() {
        let verdict = run_default("**Description:** 😀😀😀😀😀😀 ok\n**Task:** N/A\n**Demo:** N/A");
        assert_eq!(verdict.sections[0].outcome, ClassificationOutcome::MostlyEmojis);
        assert_eq!(
            verdict.messages,
            vec!["👀 Description section contains mostly emojis, which is not valid.".to_string()]
        );
    }

    #[test]
    fn test_too_short_messages_include_na_hint_only_when_allowed() {
        let verdict = run_default("**Description:** Short\n**Task:** ticket\n**Demo:** N/A");
        assert_eq!(
            verdict.messages,
            vec![
                "👀 Description section is too short (minimum 30 visible characters).".to_string(),
                "👀 Task section is too short (minimum 30 visible characters, or use 'N/A')."
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_repetitive_message() {
        let verdict = run_default(
            "**Description:** This is a valid description with more than 30 characters.\n**Task:** N/A\n**Demo:** lololololololololololololololololo",
        );
        assert_eq!(
            verdict.messages,
            vec!["👀 Demo section contains low-quality repetitive content.".to_string()]
        );
    }

    #[test]
    fn test_failure_summary_layout() {
        let verdict = run_default("");
        let expected = format!(
            "❌ ERROR: The PR description must contain valid 'Description:', 'Task:' and 'Demo:' sections.\n\
             👀 Description section is missing.\n\
             👀 Task section is missing.\n\
             👀 Demo section is missing.\n\n{}",
            FOOTER
        );
        assert_eq!(verdict.summary, expected);
        assert!(verdict.summary.ends_with(FOOTER));
    }

    #[test]
    fn test_sections_are_independent() {
        let good = "**Description:** This is a valid description with more than 30 characters.";
        let a = run_default(&format!("{}\n**Task:** N/A\n**Demo:** x", good));
        let b = run_default(&format!("**Demo:** x\n**Task:** N/A\n{}", good));
        assert_eq!(a.sections, b.sections);
        assert_eq!(a.messages, b.messages);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let doc = "**Description:** Short\n**Demo:** N/A";
        assert_eq!(run_default(doc), run_default(doc));
    }

    #[test]
    fn test_optional_section_may_be_absent() {
        let specs = vec![
            SectionSpec::new("Description").min_length(5),
            SectionSpec::new("Notes").required(false),
        ];
        let verdict = validate("Description: hello world", &specs);
        assert!(verdict.passed);

        let verdict = validate("Description: hello world\nNotes: x", &specs);
        assert!(!verdict.passed);
    }

    #[test]
    fn test_failure_header_lists() {
        let one = vec![SectionSpec::new("Description")];
        assert_eq!(
            failure_header(&one),
            "❌ ERROR: The PR description must contain valid 'Description:' sections."
        );
        let two = vec![SectionSpec::new("A"), SectionSpec::new("B")];
        assert!(failure_header(&two).contains("'A:' and 'B:'"));
    }

    #[test]
    fn test_expected_format_default() {
        assert_eq!(expected_format(&SectionSpec::defaults()), FOOTER);
    }
}
