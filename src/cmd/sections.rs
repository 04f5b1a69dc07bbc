//! `prgate sections`: show what a description has to contain.

use anyhow::Result;
use std::path::PathBuf;

use prgate::config::Config;
use prgate::section::SectionSpec;
use prgate::ui::colors;
use prgate::validator::expected_format;

fn describe(spec: &SectionSpec) -> String {
    let mut rules = vec![if spec.required { "required" } else { "optional" }.to_string()];
    rules.push(format!("min {} chars", spec.min_length));
    if spec.allow_na {
        rules.push("N/A allowed".to_string());
    }
    rules.join(", ")
}

pub fn cmd_sections(config_path: Option<PathBuf>) -> Result<()> {
    let config = Config::resolve(config_path.as_deref())?;
    let specs = config.section_specs();

    println!("{}", colors::heading("Sections"));
    for spec in &specs {
        println!(
            "  {} {}",
            colors::identifier(&format!("{}:", spec.label)),
            colors::secondary(&format!("({})", describe(spec)))
        );
    }
    println!();
    println!("{}", expected_format(&specs));

    Ok(())
}
