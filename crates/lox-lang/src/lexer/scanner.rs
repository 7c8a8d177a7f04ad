// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The scanner that produces tokens from source text.

use std::iter::Peekable;
use std::str::CharIndices;

use super::keywords::keyword;
use super::{Literal, Span, Token, TokenKind};
use crate::diagnostics::Reporter;

/// Outcome of scanning from one start position.
enum Step {
    /// A real token ends at the current position.
    Emit(TokenKind, Option<Literal>),
    /// Whitespace, newline or comment.
    Skip,
    /// Malformed input, already reported.
    Malformed,
}

/// A scanner that tokenizes Lox source code.
///
/// A scanner is used once: build it over the source with a [`Reporter`],
/// then call [`Scanner::scan_tokens`].
pub struct Scanner<'a, 'r> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    reporter: &'r mut dyn Reporter,
    start: usize,
    current: usize,
    line: usize,
    reported: usize,
}

impl<'a, 'r> Scanner<'a, 'r> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &'a str, reporter: &'r mut dyn Reporter) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            reporter,
            start: 0,
            current: 0,
            line: 1,
            reported: 0,
        }
    }

    /// Scans the whole source.
    ///
    /// The result is ordered by source position and always ends with a
    /// single [`TokenKind::Eof`] token. Malformed input is handed to the
    /// reporter and skipped.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.advance() {
            self.start = self.current - ch.len_utf8();

            if let Step::Emit(kind, literal) = self.scan_token(ch) {
                let lexeme = &self.source[self.start..self.current];
                tokens.push(Token::new(
                    kind,
                    lexeme,
                    literal,
                    self.line,
                    Span::new(self.start, self.current),
                ));
            }
        }

        tokens.push(Token::eof(self.line, self.source.len()));

        tracing::debug!(
            tokens = tokens.len(),
            lines = self.line,
            errors = self.reported,
            "scan complete"
        );

        tokens
    }

    fn scan_token(&mut self, ch: char) -> Step {
        let kind = match ch {
            // Single-character tokens
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,

            // One or two character tokens
            '!' => self.either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.either('=', TokenKind::GreaterEqual, TokenKind::Greater),

            '/' => {
                if self.matches('/') {
                    self.skip_line_comment();
                    return Step::Skip;
                }
                TokenKind::Slash
            }

            ' ' | '\r' | '\t' => return Step::Skip,
            '\n' => {
                self.line += 1;
                return Step::Skip;
            }

            '"' => return self.scan_string(),
            '0'..='9' => return self.scan_number(),
            _ if is_alpha(ch) => self.scan_identifier(),

            _ => {
                self.error(&format!("Unexpected character: {ch}"));
                return Step::Malformed;
            }
        };

        Step::Emit(kind, None)
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, ch) = self.chars.next()?;
        self.current = pos + ch.len_utf8();
        Some(ch)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.chars.clone();
        iter.next();
        iter.next().map(|(_, ch)| ch)
    }

    /// Consumes the next character if it is `expected`.
    fn matches(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn either(&mut self, next: char, long: TokenKind, short: TokenKind) -> TokenKind {
        if self.matches(next) { long } else { short }
    }

    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn scan_string(&mut self) -> Step {
        loop {
            match self.advance() {
                None => {
                    self.error("Unterminated string");
                    return Step::Malformed;
                }
                Some('"') => break,
                Some('\n') => self.line += 1,
                Some(_) => {}
            }
        }

        // Both quotes are single bytes.
        let value = &self.source[self.start + 1..self.current - 1];
        Step::Emit(TokenKind::String, Some(Literal::String(value.to_string())))
    }

    fn scan_number(&mut self) -> Step {
        self.skip_digits();

        if self.peek() == Some('.') && self.peek_next().is_some_and(|ch| ch.is_ascii_digit()) {
            self.advance();
            self.skip_digits();
        }

        let text = &self.source[self.start..self.current];
        match text.parse::<f64>() {
            Ok(n) => Step::Emit(TokenKind::Number, Some(Literal::Number(n))),
            Err(_) => {
                self.error(&format!("Invalid number: {text}"));
                Step::Malformed
            }
        }
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.advance();
        }
    }

    fn scan_identifier(&mut self) -> TokenKind {
        while self.peek().is_some_and(is_alphanumeric) {
            self.advance();
        }

        let text = &self.source[self.start..self.current];
        keyword(text).unwrap_or(TokenKind::Identifier)
    }

    fn error(&mut self, message: &str) {
        tracing::trace!(line = self.line, message, "malformed input");
        self.reported += 1;
        self.reporter.report(self.line, message);
    }
}

/// Checks if a character can start an identifier.
fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Checks if a character can continue an identifier.
fn is_alphanumeric(ch: char) -> bool {
    is_alpha(ch) || ch.is_ascii_digit()
}
