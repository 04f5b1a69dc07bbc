//! Centralized UI formatting and color utilities
//!
//! This module provides status icons and color helpers used by the prgate CLI.

use colored::{ColoredString, Colorize};

use crate::quality::ClassificationOutcome;

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("PRGATE_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Plain status symbol for a section outcome.
///
/// - Ok: ✓
/// - Missing / Empty / TooShort: ✗
/// - RepetitiveNoise / MostlyEmojis: ⚠
pub fn outcome_symbol(outcome: ClassificationOutcome) -> &'static str {
    match outcome {
        ClassificationOutcome::Ok => "✓",
        ClassificationOutcome::Missing
        | ClassificationOutcome::Empty
        | ClassificationOutcome::TooShort => "✗",
        ClassificationOutcome::RepetitiveNoise | ClassificationOutcome::MostlyEmojis => "⚠",
    }
}

/// Colored status icon for a section outcome.
pub fn outcome_icon(outcome: ClassificationOutcome) -> ColoredString {
    let symbol = outcome_symbol(outcome);
    match outcome {
        ClassificationOutcome::Ok => symbol.green(),
        ClassificationOutcome::RepetitiveNoise | ClassificationOutcome::MostlyEmojis => {
            symbol.yellow()
        }
        _ => symbol.red(),
    }
}

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (section labels)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}
