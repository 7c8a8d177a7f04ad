// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lexical analysis (tokenization) for Lox source code.
//!
//! The lexer transforms Lox source text into a flat list of tokens that a
//! parser can consume.
//!
//! ## Structure
//!
//! - `scanner.rs` - Main `Scanner` struct that produces tokens
//! - `token.rs` - `Token`, `TokenKind` and `Literal` definitions
//! - `keywords.rs` - The reserved word table
//!
//! ## Documentation Submodules
//!
//! - `operators` - One and two character operator scanning
//! - `literals` - Number, string, and identifier literals
//!
//! ## Usage
//!
//! ```rust
//! use lox_lang::diagnostics::Diagnostics;
//! use lox_lang::lexer::{Scanner, TokenKind};
//!
//! let mut diagnostics = Diagnostics::new();
//! let tokens = Scanner::new("var x = 42;", &mut diagnostics).scan_tokens();
//!
//! assert_eq!(tokens[0].kind, TokenKind::Var);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! assert!(diagnostics.is_empty());
//! ```

mod keywords;
mod scanner;
mod token;

// Documentation and test submodules
pub mod literals;
pub mod operators;

pub use keywords::{KEYWORDS, keyword};
pub use scanner::Scanner;
pub use token::{Literal, Span, Token, TokenKind};
