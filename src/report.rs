// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Terminal reporting of scan diagnostics.

use lox_lang::{Diagnostic, Diagnostics, Reporter};
use owo_colors::OwoColorize;

/// Prints diagnostics to stderr as they arrive and remembers that one did.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    had_error: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once anything has been reported.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Replays diagnostics that were collected elsewhere.
    pub fn replay(&mut self, diagnostics: &Diagnostics) {
        for diagnostic in diagnostics {
            self.report(diagnostic.line, &diagnostic.message);
        }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, line: usize, message: &str) {
        self.had_error = true;
        tracing::debug!(line, message, "scan error");
        eprintln!("{}", format_diagnostic(&Diagnostic::new(line, message)));
    }
}

/// Formats a diagnostic as `[line N] Error: message` with colors.
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    format!(
        "{} {}: {}",
        format!("[line {}]", diagnostic.line).dimmed(),
        "Error".red().bold(),
        diagnostic.message
    )
}
