// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Diagnostics reported while scanning.
//!
//! The scanner never fails. When it meets malformed input it hands a
//! `(line, message)` pair to a [`Reporter`] and keeps going; what happens
//! next (printing, setting an error flag, changing an exit code) is up to
//! the caller.
//!
//! ```rust
//! use lox_lang::diagnostics::Diagnostics;
//! use lox_lang::lexer::Scanner;
//!
//! let mut diagnostics = Diagnostics::new();
//! let tokens = Scanner::new("1 @ 2", &mut diagnostics).scan_tokens();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics.iter().next().unwrap().line, 1);
//! ```

use std::fmt;

/// A sink for scan-time diagnostics.
pub trait Reporter {
    /// Records that something is wrong on `line`.
    fn report(&mut self, line: usize, message: &str);
}

impl<F> Reporter for F
where
    F: FnMut(usize, &str),
{
    fn report(&mut self, line: usize, message: &str) {
        self(line, message)
    }
}

/// A single reported problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line of the problem
    pub line: usize,
    /// Human readable description
    pub message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

/// A reporter that keeps every diagnostic in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of reported diagnostics.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates over the diagnostics in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Forgets everything reported so far.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Consumes the collector, returning the diagnostics.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl Reporter for Diagnostics {
    fn report(&mut self, line: usize, message: &str) {
        self.items.push(Diagnostic::new(line, message));
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
