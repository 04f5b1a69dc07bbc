//! CLI entry point for prgate.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

/// Environment variable holding the log filter, e.g. `PRGATE_LOG=debug`.
const LOG_ENV: &str = "PRGATE_LOG";

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Logs go to stderr so stdout stays clean for reports and completions
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let quiet = cli.quiet || prgate::ui::is_quiet();

    match cli.command {
        Commands::Check {
            body,
            file,
            format,
            config,
        } => {
            let passed = cmd::check::cmd_check(body, file, format, config, quiet)?;
            if !passed {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Sections { config } => cmd::sections::cmd_sections(config),
        Commands::Completion { shell } => cmd::completion::cmd_completion(shell),
    }
}
