//! Configuration management for prgate.
//!
//! The config file is markdown with YAML frontmatter, so it can carry its own
//! documentation for reviewers below the frontmatter block.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::section::SectionSpec;

pub mod defaults;
pub mod validation;

pub use defaults::*;

/// Project config location, relative to the working directory.
pub const CONFIG_PATH: &str = ".prgate/config.md";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Minimum visible characters for sections that do not set their own
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    /// Sections every description must carry, in report order
    #[serde(default = "default_sections")]
    pub sections: Vec<SectionConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            sections: default_sections(),
        }
    }
}

impl Config {
    /// Load the project config, falling back to defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_PATH);
        if !path.exists() {
            debug!(path = CONFIG_PATH, "no project config, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Load from `path` if given, otherwise the project config.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        let config: Config = if frontmatter.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")?
        };

        config.validate()?;

        Ok(config)
    }

    /// Section specs in config order, with the default minimum applied.
    pub fn section_specs(&self) -> Vec<SectionSpec> {
        self.sections
            .iter()
            .map(|section| section.to_spec(self.min_length))
            .collect()
    }
}

/// Frontmatter delimiter, alone on its line.
const DELIMITER: &str = "---";

/// Split a config file into its YAML frontmatter and markdown body.
///
/// The frontmatter opens with a `---` first line and closes at the next line
/// that is exactly `---`, so a `---` inside a YAML value does not end it.
/// Without an opening delimiter the whole content is the body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim_start();
    let Some(rest) = content
        .split_once('\n')
        .filter(|(first, _)| first.trim_end() == DELIMITER)
        .map(|(_, rest)| rest)
    else {
        return (None, content.trim_end());
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let body = rest[offset + line.len()..].trim();
            return (Some(rest[..offset].to_string()), body);
        }
        offset += line.len();
    }

    (None, content.trim_end())
}
