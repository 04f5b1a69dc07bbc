//! `prgate check`: validate one description and report the verdict.

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use prgate::config::Config;
use prgate::report::{ReportFormat, Reporter};
use prgate::source::{DocumentSource, FileSource, GithubActionSource, LiteralSource};
use prgate::validator::Validator;

/// Pick the document source from the command line, defaulting to GitHub Actions.
fn select_source(body: Option<String>, file: Option<PathBuf>) -> Box<dyn DocumentSource> {
    match (body, file) {
        (Some(body), _) => Box::new(LiteralSource::new(body)),
        (None, Some(path)) => Box::new(FileSource::new(path)),
        (None, None) => Box::new(GithubActionSource::from_env()),
    }
}

/// Run the check. Returns whether the description passed.
pub fn cmd_check(
    body: Option<String>,
    file: Option<PathBuf>,
    format: ReportFormat,
    config_path: Option<PathBuf>,
    quiet: bool,
) -> Result<bool> {
    let config = Config::resolve(config_path.as_deref())?;
    let validator = Validator::new(config.section_specs());
    debug!(sections = validator.specs().len(), "loaded section config");

    let source = select_source(body, file);
    let mut reporter = Reporter::new(format).quiet(quiet);

    let verdict = validator.run(source.as_ref(), &mut reporter)?;
    Ok(verdict.passed)
}
