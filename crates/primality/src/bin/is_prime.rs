//! Classify values supplied on the command line as prime or not prime.
//!
//! This binary delegates to `primality::cli` for parsing, classification and
//! rendering, keeping the behaviour testable without spawning a process.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use primality::cli::{CliArgs, Report, all_accepted, classify_inputs, render};
use tracing::{debug, error, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let reports = classify_inputs(args.inputs());
    reports.iter().for_each(log_report);

    let stdout = io::stdout();
    let stderr = io::stderr();
    if let Err(err) = render(
        &reports,
        args.format(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    ) {
        error!(error = %err, "failed to write classification output");
        return ExitCode::FAILURE;
    }

    if all_accepted(&reports) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn log_report(report: &Report) {
    match &report.verdict {
        Ok(prime) => debug!(input = %report.input, prime, "classified input"),
        Err(err) => warn!(input = %report.input, error = %err, "rejected input"),
    }
}
