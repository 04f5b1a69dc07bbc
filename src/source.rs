//! Where the pull request description comes from.
//!
//! Every source yields a string, falling back to the empty string when the
//! host provides no description at all. Environment lookups are captured
//! into plain values up front so sources can be built directly in tests.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Action input holding an explicit description (`with: pr-body:`).
pub const INPUT_ENV: &str = "INPUT_PR-BODY";
/// Alternate spelling some runners export for the same input.
pub const INPUT_ENV_ALT: &str = "INPUT_PR_BODY";
/// Path of the webhook payload for the triggering event.
pub const EVENT_PATH_ENV: &str = "GITHUB_EVENT_PATH";

/// Provides the document to validate.
pub trait DocumentSource {
    fn read_document(&self) -> Result<String>;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// A description passed in directly.
#[derive(Debug, Clone)]
pub struct LiteralSource {
    body: String,
}

impl LiteralSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl DocumentSource for LiteralSource {
    fn read_document(&self) -> Result<String> {
        Ok(self.body.clone())
    }

    fn describe(&self) -> String {
        "literal".to_string()
    }
}

/// A description read from a file, or from stdin when the path is `-`.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }
}

impl DocumentSource for FileSource {
    fn read_document(&self) -> Result<String> {
        if self.is_stdin() {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read description from stdin")?;
            return Ok(body);
        }

        fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read description from {}", self.path.display()))
    }

    fn describe(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            format!("file {}", self.path.display())
        }
    }
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequest>,
}

#[derive(Debug, Deserialize)]
struct PullRequest {
    #[serde(default)]
    body: Option<String>,
}

/// The description of the pull request that triggered a GitHub Actions run.
///
/// An explicit `pr-body` input wins; otherwise the body is read from the
/// event payload.
#[derive(Debug, Clone, Default)]
pub struct GithubActionSource {
    pub input: Option<String>,
    pub event_path: Option<PathBuf>,
}

impl GithubActionSource {
    /// Capture the relevant variables from the process environment.
    pub fn from_env() -> Self {
        let input = std::env::var(INPUT_ENV)
            .or_else(|_| std::env::var(INPUT_ENV_ALT))
            .ok();
        let event_path = std::env::var_os(EVENT_PATH_ENV).map(PathBuf::from);
        Self { input, event_path }
    }
}

fn read_event_body(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read event payload from {}", path.display()))?;
    let payload: EventPayload =
        serde_json::from_str(&content).context("Failed to parse event payload")?;

    let Some(pull_request) = payload.pull_request else {
        anyhow::bail!("No pull request found.");
    };
    Ok(pull_request.body.unwrap_or_default())
}

impl DocumentSource for GithubActionSource {
    fn read_document(&self) -> Result<String> {
        if let Some(input) = self.input.as_deref().filter(|s| !s.is_empty()) {
            return Ok(input.to_string());
        }

        match &self.event_path {
            Some(path) => read_event_body(path),
            None => Ok(String::new()),
        }
    }

    fn describe(&self) -> String {
        match (&self.input, &self.event_path) {
            (Some(input), _) if !input.is_empty() => "action input pr-body".to_string(),
            (_, Some(path)) => format!("event payload {}", path.display()),
            _ => "empty environment".to_string(),
        }
    }
}
