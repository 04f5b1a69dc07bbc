//! CLI argument definitions for prgate.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use prgate::report::ReportFormat;

#[derive(Parser)]
#[command(name = "prgate")]
#[command(version)]
#[command(about = "Check that a pull request description has the required sections", long_about = None)]
#[command(
    after_help = "IN GITHUB ACTIONS:\n    prgate check --format github    Reads the PR body from the event payload\n\n    Pass the body explicitly with --body or --file to run it anywhere else."
)]
pub struct Cli {
    /// Suppress output for passing descriptions
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging (overrides PRGATE_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a pull request description
    ///
    /// Without --body or --file the description is taken from the GitHub
    /// Actions environment: the `pr-body` action input, then the
    /// pull_request.body field of the event payload.
    Check {
        /// Description text to validate
        #[arg(long, conflicts_with = "file")]
        body: Option<String>,
        /// Read the description from a file ('-' for stdin)
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Human)]
        format: ReportFormat,
        /// Config file (defaults to .prgate/config.md when present)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Show the configured sections and the expected format
    Sections {
        /// Config file (defaults to .prgate/config.md when present)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}
