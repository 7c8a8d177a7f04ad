// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lox - the scanner front end for the Lox scripting language
//!
//! This is the main entry point for the lox CLI/REPL.
//!
//! ## Features
//!
//! - Interactive REPL with syntax highlighting and history
//! - Async file scanning with tokio
//! - Token listings on stdout, diagnostics on stderr

mod repl;
mod report;

use clap::Parser;
use lox_lang::{AsyncScanner, Lox, ScanOutput};
use owo_colors::OwoColorize;
use report::ConsoleReporter;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Command line usage error
const EX_USAGE: u8 = 64;
/// Input data was malformed
const EX_DATAERR: u8 = 65;
/// Input file missing or unreadable
const EX_NOINPUT: u8 = 66;

#[derive(Parser)]
#[command(
    name = "lox",
    about = "Scan Lox source into tokens",
    version,
    author = "Pegasus Heavy Industries"
)]
struct Cli {
    /// Lox script to scan
    script: Option<PathBuf>,

    /// Scan source given on the command line
    #[arg(short = 'e', long = "eval", conflicts_with = "script")]
    eval: Option<String>,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

/// Main entry point - uses tokio runtime for async file reads.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if let Err(err) = e.print() {
                eprintln!("{}: {}", "Error".red().bold(), err);
            }
            return if e.use_stderr() {
                ExitCode::from(EX_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    if let Some(code) = cli.eval {
        run_eval(&code)
    } else if let Some(path) = cli.script {
        run_file(path).await
    } else {
        run_repl()
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "lox=debug,lox_lang=debug"
    } else {
        "lox=warn,lox_lang=warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Start the interactive REPL
fn run_repl() -> ExitCode {
    match repl::Repl::new() {
        Ok(mut repl) => {
            if let Err(e) = repl.run() {
                eprintln!("{}: {:?}", "REPL Error".red().bold(), e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(
                "{}: Failed to initialize REPL: {:?}",
                "Error".red().bold(),
                e
            );
            ExitCode::FAILURE
        }
    }
}

/// Scan a Lox file asynchronously.
async fn run_file(path: PathBuf) -> ExitCode {
    match AsyncScanner::new().scan_file(&path).await {
        Ok(output) => finish(&output),
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::from(EX_NOINPUT)
        }
    }
}

/// Scan Lox code from the command line.
fn run_eval(code: &str) -> ExitCode {
    finish(&Lox::new().scan(code))
}

/// Prints the tokens and diagnostics of a scan and picks the exit code.
fn finish(output: &ScanOutput) -> ExitCode {
    for token in &output.tokens {
        println!("{token}");
    }

    let mut reporter = ConsoleReporter::new();
    reporter.replay(&output.diagnostics);

    if reporter.had_error() {
        ExitCode::from(EX_DATAERR)
    } else {
        ExitCode::SUCCESS
    }
}
