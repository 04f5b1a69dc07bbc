//! Section definitions and extraction from pull request descriptions.
//!
//! A section opens at a line such as `**Description:** text` or
//! `Task: https://...` and runs until the next line that opens another
//! labeled section, or the end of the document.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Default minimum number of visible characters for a section.
pub const DEFAULT_MIN_LENGTH: usize = 30;

/// Lines that open some labeled section: optional bold, a capitalized word, a colon.
static SECTION_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\*\*)?[A-Z]\w*(?:\*\*)?:").expect("section start pattern is valid")
});

/// Policy for one labeled section of the description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSpec {
    /// Label as written before the colon, e.g. `Description`
    pub label: String,
    /// Whether an absent section is reported
    pub required: bool,
    /// Whether `N/A` is accepted in place of real content
    pub allow_na: bool,
    /// Minimum number of visible ASCII characters
    pub min_length: usize,
    /// Example value shown in the expected-format hint
    pub example: Option<String>,
}

impl SectionSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            required: true,
            allow_na: false,
            min_length: DEFAULT_MIN_LENGTH,
            example: None,
        }
    }

    pub fn allow_na(mut self, allow: bool) -> Self {
        self.allow_na = allow;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Example line for the expected-format hint.
    pub fn example_line(&self) -> String {
        match &self.example {
            Some(example) => format!("{}: {}", self.label, example),
            None if self.allow_na => format!("{}: ... or N/A", self.label),
            None => format!("{}: ...", self.label),
        }
    }

    /// The Description / Task / Demo sections every PR must carry.
    pub fn defaults() -> Vec<SectionSpec> {
        vec![
            SectionSpec::new("Description").example("Short summary of the change..."),
            SectionSpec::new("Task")
                .allow_na(true)
                .example("https://gradiweb.monday.com/... or N/A"),
            SectionSpec::new("Demo")
                .allow_na(true)
                .example("Video link or N/A"),
        ]
    }
}

/// Raw content found for a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    /// No line opens the section
    Missing,
    /// The section is present but holds only whitespace
    Empty,
    /// Trimmed section content, markup retained
    Text(String),
}

/// Extracts sections, treating every known label as a section boundary.
///
/// Labels are matched case-insensitively, so a lowercase `demo:` line still
/// ends the section before it even though it does not look capitalized.
#[derive(Debug, Clone, Default)]
pub struct SectionExtractor {
    labels: Vec<String>,
}

impl SectionExtractor {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Build an extractor that knows the labels of `specs`.
    pub fn for_specs(specs: &[SectionSpec]) -> Self {
        Self::new(specs.iter().map(|spec| spec.label.clone()))
    }

    /// Extract the content of the first section labeled `label`.
    pub fn extract(&self, document: &str, label: &str) -> ExtractionResult {
        let mut lines = document.lines();

        let Some(first) = lines.by_ref().find_map(|line| label_remainder(line, label)) else {
            return ExtractionResult::Missing;
        };

        let mut captured = vec![first];
        for line in lines {
            if self.starts_section(line) {
                break;
            }
            captured.push(line);
        }

        let content = captured.join("\n");
        let content = content.trim();
        if content.is_empty() {
            ExtractionResult::Empty
        } else {
            ExtractionResult::Text(content.to_string())
        }
    }

    fn starts_section(&self, line: &str) -> bool {
        SECTION_START.is_match(line)
            || self
                .labels
                .iter()
                .any(|label| label_remainder(line, label).is_some())
    }
}

/// Extract a single section using only the capitalized-label boundary rule.
pub fn extract(document: &str, label: &str) -> ExtractionResult {
    SectionExtractor::default().extract(document, label)
}

/// If `line` opens the section `label`, return the text after the label marker.
///
/// Accepted forms: `Label:`, `**Label:**` and `**Label**:`, after any
/// leading whitespace.
fn label_remainder<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let rest = line.trim_start();
    let rest = rest.strip_prefix("**").unwrap_or(rest);
    let rest = strip_label(rest, label)?;
    let rest = rest.strip_prefix("**").unwrap_or(rest);
    let rest = rest.strip_prefix(':')?;
    Some(rest.strip_prefix("**").unwrap_or(rest))
}

/// Case-insensitive prefix strip.
fn strip_label<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    if label.is_empty() {
        return None;
    }

    let mut chars = text.chars();
    for expected in label.chars() {
        let actual = chars.next()?;
        if actual != expected && !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(chars.as_str())
}
