//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

use crate::section::{SectionSpec, DEFAULT_MIN_LENGTH};

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(default_min_length, usize, DEFAULT_MIN_LENGTH);
default_fn!(default_true, bool, true);
default_fn!(
    default_sections,
    Vec<SectionConfig>,
    SectionSpec::defaults()
        .into_iter()
        .map(SectionConfig::from)
        .collect()
);

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

/// One required section as written in the config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SectionConfig {
    /// Label as it appears before the colon
    pub label: String,
    /// Report the section when it is absent (default: true)
    #[serde(default = "default_true")]
    pub required: bool,
    /// Accept `N/A` as content (default: false)
    #[serde(default)]
    pub allow_na: bool,
    /// Minimum visible characters; falls back to the top-level `min_length`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Example value for the expected-format hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl SectionConfig {
    /// Resolve into a section spec, using `fallback_min_length` when unset.
    pub fn to_spec(&self, fallback_min_length: usize) -> SectionSpec {
        SectionSpec {
            label: self.label.clone(),
            required: self.required,
            allow_na: self.allow_na,
            min_length: self.min_length.unwrap_or(fallback_min_length),
            example: self.example.clone(),
        }
    }
}

impl From<SectionSpec> for SectionConfig {
    fn from(spec: SectionSpec) -> Self {
        Self {
            label: spec.label,
            required: spec.required,
            allow_na: spec.allow_na,
            min_length: None,
            example: spec.example,
        }
    }
}
