//! Content-quality classification for extracted sections.
//!
//! Cleans markup out of a section and decides whether what remains is real
//! content. Checks run in a fixed order and the first failing one wins:
//! an accepted `N/A` short-circuits everything, noise and emoji checks run
//! before the length check so padded junk is reported for what it is.

pub mod emoji;
pub mod noise;

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use crate::section::{ExtractionResult, SectionSpec};

pub use emoji::EMOJI_RATIO_THRESHOLD;
pub use noise::{BLOCK_REPEAT_MIN, SINGLE_CHAR_REPEAT_MIN};

static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"));

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Verdict for a single section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationOutcome {
    Ok,
    Missing,
    Empty,
    TooShort,
    RepetitiveNoise,
    MostlyEmojis,
}

impl ClassificationOutcome {
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl fmt::Display for ClassificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Missing => write!(f, "missing"),
            Self::Empty => write!(f, "empty"),
            Self::TooShort => write!(f, "too short"),
            Self::RepetitiveNoise => write!(f, "repetitive"),
            Self::MostlyEmojis => write!(f, "mostly emojis"),
        }
    }
}

/// Section text with markup removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedText {
    /// Markup-free text with non-ASCII characters kept (used for noise and emoji checks)
    pub visible: String,
    /// `visible` restricted to printable ASCII (used for `N/A` and length checks)
    pub ascii: String,
}

/// Strip HTML comments, tags, bold markers, line breaks and backslashes.
pub fn clean(raw: &str) -> CleanedText {
    let text = HTML_COMMENT.replace_all(raw, "");
    let text = HTML_TAG.replace_all(&text, "");
    let text = text.replace("**", "");

    let visible: String = text
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '\\'))
        .collect();
    let visible = visible.trim().to_string();

    let ascii: String = visible.chars().filter(|c| (' '..='~').contains(c)).collect();
    let ascii = ascii.trim().to_string();

    CleanedText { visible, ascii }
}

/// Whether `visible` is an explicit "not applicable" marker.
///
/// Non-ASCII characters are kept, so `N/A 🙂` is not a marker.
pub fn is_not_applicable(visible: &str) -> bool {
    let normalized = visible.to_lowercase();
    normalized == "na" || normalized == "n/a"
}

/// Classify extracted section content under the policy of `spec`.
pub fn classify(result: &ExtractionResult, spec: &SectionSpec) -> ClassificationOutcome {
    let raw = match result {
        ExtractionResult::Missing => return ClassificationOutcome::Missing,
        ExtractionResult::Empty => return ClassificationOutcome::Empty,
        ExtractionResult::Text(raw) => raw,
    };

    let cleaned = clean(raw);

    if spec.allow_na && is_not_applicable(&cleaned.visible) {
        return ClassificationOutcome::Ok;
    }

    if noise::is_repetitive_noise(&cleaned.visible) {
        return ClassificationOutcome::RepetitiveNoise;
    }

    if emoji::is_mostly_emojis(&cleaned.visible) {
        return ClassificationOutcome::MostlyEmojis;
    }

    if cleaned.ascii.chars().count() < spec.min_length {
        return ClassificationOutcome::TooShort;
    }

    ClassificationOutcome::Ok
}
