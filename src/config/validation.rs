//! Validation logic for configuration.

use anyhow::Result;
use std::collections::HashSet;

use super::Config;

/// Characters that would make a label ambiguous with the section markup.
const FORBIDDEN_LABEL_CHARS: &[char] = &[':', '*', '\n', '\r'];

impl Config {
    /// Validate the configured section list
    pub fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            anyhow::bail!("sections must list at least one section");
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            let label = section.label.trim();
            if label.is_empty() {
                anyhow::bail!("sections[].label must not be empty");
            }
            if label != section.label {
                anyhow::bail!(
                    "section label '{}' must not have surrounding whitespace",
                    section.label
                );
            }
            if let Some(c) = label.chars().find(|c| FORBIDDEN_LABEL_CHARS.contains(c)) {
                anyhow::bail!(
                    "section label '{}' must not contain {:?}",
                    label,
                    c
                );
            }
            if !seen.insert(label.to_lowercase()) {
                anyhow::bail!("duplicate section label '{}'", label);
            }
        }

        Ok(())
    }
}
