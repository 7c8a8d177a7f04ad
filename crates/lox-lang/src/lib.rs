// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # lox-lang
//!
//! The lexical front end of the Lox scripting language.
//!
//! ## Overview
//!
//! This crate turns Lox source text into a flat, ordered list of tokens:
//! - A single-pass [`Scanner`](lexer::Scanner) with one character of lookahead
//! - Line tracking, number and string literal extraction, keyword lookup
//! - Side-channel [`diagnostics`] for malformed input, so a scan always completes
//! - Async file loading and parallel scanning of many sources (features
//!   `async` and `parallel`)
//!
//! ## Quick Start
//!
//! ```rust
//! use lox_lang::Lox;
//! use lox_lang::lexer::TokenKind;
//!
//! let output = Lox::new().scan("print 1 + 2;");
//! assert!(!output.had_error());
//! assert_eq!(output.tokens[0].kind, TokenKind::Print);
//! assert_eq!(output.tokens.len(), 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod diagnostics;
pub mod error;
pub mod lexer;

#[cfg(any(feature = "async", feature = "parallel"))]
pub mod async_scanner;

// Re-exports for convenience
pub use diagnostics::{Diagnostic, Diagnostics, Reporter};
pub use error::{Error, Result};
pub use lexer::{Literal, Scanner, Token, TokenKind};

#[cfg(feature = "async")]
pub use async_scanner::AsyncScanner;
#[cfg(feature = "parallel")]
pub use async_scanner::ParallelScanner;

use std::path::Path;

/// Tokens and diagnostics from scanning one source.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    /// The scanned tokens, ending with [`TokenKind::Eof`]
    pub tokens: Vec<Token>,
    /// Everything reported while scanning
    pub diagnostics: Diagnostics,
}

impl ScanOutput {
    /// Returns true if any diagnostic was reported.
    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Entry point for scanning Lox sources.
///
/// Each call runs a fresh [`Scanner`] and collects its diagnostics, so a
/// single `Lox` can be reused for any number of sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lox;

impl Lox {
    /// Creates a new front end.
    pub fn new() -> Self {
        Self
    }

    /// Scans source text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lox_lang::Lox;
    ///
    /// let output = Lox::new().scan("\"abc");
    /// assert!(output.had_error());
    /// assert_eq!(output.tokens.len(), 1);
    /// ```
    pub fn scan(&self, source: &str) -> ScanOutput {
        let mut diagnostics = Diagnostics::new();
        let tokens = Scanner::new(source, &mut diagnostics).scan_tokens();
        ScanOutput {
            tokens,
            diagnostics,
        }
    }

    /// Scans source text, sending diagnostics to `reporter`.
    pub fn scan_with(&self, source: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
        Scanner::new(source, reporter).scan_tokens()
    }

    /// Reads and scans a file.
    pub fn scan_file(&self, path: impl AsRef<Path>) -> Result<ScanOutput> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(self.scan(&source))
    }
}
