//! # prgate - pull request description gate
//!
//! prgate checks that a pull request description carries a set of labeled
//! sections (by default `Description:`, `Task:` and `Demo:`) and that each
//! one holds real content rather than placeholders, emoji or keyboard mash.
//!
//! ## Modules
//!
//! - [`section`] - Section specs and extraction from free text
//! - [`quality`] - Markup cleaning and content classification
//! - [`validator`] - Aggregation into a pass/fail verdict with diagnostics
//! - [`source`] - Where the description comes from (literal, file, GitHub Actions)
//! - [`report`] - Where the verdict goes (human, JSON, workflow commands)
//! - [`config`] - Section configuration loaded from `.prgate/config.md`
//!
//! ## Example
//!
//! ```
//! use prgate::section::SectionSpec;
//! use prgate::validator::validate;
//!
//! let body = "**Description:** Adds retry support to the nightly upload job.\n\
//!             **Task:** https://gradiweb.monday.com/boards/1/pulses/2\n\
//!             **Demo:** N/A";
//!
//! let verdict = validate(body, &SectionSpec::defaults());
//! assert!(verdict.passed);
//! ```

pub mod config;
pub mod quality;
pub mod report;
pub mod section;
pub mod source;
pub mod ui;
pub mod validator;

/// Generate a UTC timestamp in ISO 8601 format: `YYYY-MM-DDTHH:MM:SSZ`
pub fn utc_now_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
