//! CLI support for the `is-prime` binary.
//!
//! This module provides argument parsing, classification and rendering
//! helpers. The binary delegates to these functions so they can be exercised
//! in tests without spawning a subprocess.

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::classify::classify;
use crate::error::PrimalityError;
use crate::value::Value;

/// Input classified when no values are supplied.
pub const DEMO_INPUT: &str = "5";

/// `is-prime` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "is-prime",
    about = "Classify values as prime or not prime",
    version,
    allow_negative_numbers = true
)]
pub struct CliArgs {
    /// Values to classify, written as JSON literals (`7`, `7.0`, `true`,
    /// `"tres"`, `null`, `[]`). Bare words are treated as strings.
    #[arg(value_name = "VALUE")]
    values: Vec<String>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl CliArgs {
    /// Returns the raw inputs to classify, falling back to [`DEMO_INPUT`].
    ///
    /// # Example
    ///
    /// ```
    /// use clap::Parser;
    /// use primality::cli::CliArgs;
    ///
    /// let args = CliArgs::try_parse_from(["is-prime"]).expect("parse");
    /// assert_eq!(args.inputs(), vec!["5"]);
    /// ```
    #[must_use]
    pub fn inputs(&self) -> Vec<&str> {
        if self.values.is_empty() {
            return vec![DEMO_INPUT];
        }
        self.values.iter().map(String::as_str).collect()
    }

    /// Returns the selected output format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }
}

/// How classification results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `<input>: <verdict>` lines; rejections go to stderr.
    #[default]
    Text,
    /// One JSON object per input on stdout.
    Json,
}

/// Classification result for a single raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Raw input as supplied on the command line.
    pub input: String,
    /// Verdict, or the reason the input was rejected.
    pub verdict: Result<bool, PrimalityError>,
}

impl Report {
    /// Parses `input` as a literal and classifies it.
    ///
    /// # Example
    ///
    /// ```
    /// use primality::cli::Report;
    ///
    /// assert_eq!(Report::classify("7.0").verdict, Ok(true));
    /// assert!(!Report::classify("\"tres\"").is_accepted());
    /// ```
    #[must_use]
    pub fn classify(input: &str) -> Self {
        Self {
            input: input.to_owned(),
            verdict: classify(&Value::parse_literal(input)),
        }
    }

    /// Returns `true` when the input produced a verdict.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.verdict.is_ok()
    }
}

#[derive(Debug, Serialize)]
struct ReportLine<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    prime: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a Report> for ReportLine<'a> {
    fn from(report: &'a Report) -> Self {
        match &report.verdict {
            Ok(prime) => Self {
                input: &report.input,
                prime: Some(*prime),
                error: None,
            },
            Err(err) => Self {
                input: &report.input,
                prime: None,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Classifies each raw input in order.
#[must_use]
pub fn classify_inputs<'a, I>(inputs: I) -> Vec<Report>
where
    I: IntoIterator<Item = &'a str>,
{
    inputs.into_iter().map(Report::classify).collect()
}

/// Returns `true` when every report carries a verdict.
#[must_use]
pub fn all_accepted(reports: &[Report]) -> bool {
    reports.iter().all(Report::is_accepted)
}

/// Writes reports in the requested format.
///
/// In [`OutputFormat::Text`], verdicts go to `out` and rejections to `err`.
/// In [`OutputFormat::Json`], every report is a JSON line on `out`.
///
/// # Errors
///
/// Returns an [`io::Error`] when either writer fails.
///
/// # Example
///
/// ```
/// use primality::cli::{OutputFormat, classify_inputs, render};
///
/// let reports = classify_inputs(["7", "2.3"]);
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// render(&reports, OutputFormat::Text, &mut out, &mut err).expect("render");
///
/// assert_eq!(String::from_utf8_lossy(&out), "7: true\n");
/// assert_eq!(
///     String::from_utf8_lossy(&err),
///     "2.3: expected an integer, received float\n"
/// );
/// ```
pub fn render<O, E>(
    reports: &[Report],
    format: OutputFormat,
    out: &mut O,
    err: &mut E,
) -> io::Result<()>
where
    O: Write,
    E: Write,
{
    for report in reports {
        match format {
            OutputFormat::Text => write_text(report, out, err)?,
            OutputFormat::Json => write_json(report, out)?,
        }
    }
    out.flush()?;
    err.flush()
}

fn write_text<O, E>(report: &Report, out: &mut O, err: &mut E) -> io::Result<()>
where
    O: Write,
    E: Write,
{
    match &report.verdict {
        Ok(prime) => writeln!(out, "{}: {prime}", report.input),
        Err(rejection) => writeln!(err, "{}: {rejection}", report.input),
    }
}

fn write_json<O>(report: &Report, out: &mut O) -> io::Result<()>
where
    O: Write,
{
    serde_json::to_writer(&mut *out, &ReportLine::from(report))?;
    writeln!(out)
}
