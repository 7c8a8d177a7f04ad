// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Token definitions for the Lox lexer.

use std::fmt;

/// A span in the source code, representing a range of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The decoded value carried by number and string tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Value of a number literal
    Number(f64),
    /// Text between the quotes of a string literal, taken verbatim
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n:?}"),
            Literal::String(s) => f.write_str(s),
        }
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The exact source text of the token, empty for [`TokenKind::Eof`]
    pub lexeme: String,
    /// Decoded value for number and string tokens
    pub literal: Option<Literal>,
    /// 1-based line the scanner was on when the token was produced
    pub line: usize,
    /// The span in the source code
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        line: usize,
        span: Span,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }

    /// Creates the end-of-input token at the given offset.
    pub fn eof(line: usize, offset: usize) -> Self {
        Self::new(TokenKind::Eof, String::new(), None, line, Span::new(offset, offset))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.kind, self.lexeme)?;
        if let Some(literal) = &self.literal {
            write!(f, " {literal}")?;
        }
        Ok(())
    }
}

/// The different kinds of tokens in Lox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuation
    /// (
    LeftParen,
    /// )
    RightParen,
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// ,
    Comma,
    /// .
    Dot,
    /// ;
    Semicolon,

    // Operators
    /// -
    Minus,
    /// +
    Plus,
    /// /
    Slash,
    /// *
    Star,
    /// !
    Bang,
    /// !=
    BangEqual,
    /// =
    Equal,
    /// ==
    EqualEqual,
    /// >
    Greater,
    /// >=
    GreaterEqual,
    /// <
    Less,
    /// <=
    LessEqual,

    // Literals
    /// Identifier
    Identifier,
    /// String literal
    String,
    /// Number literal
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    // Special
    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns true if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::Fun
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }

    /// Returns true if this token carries a decoded value.
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::String)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(5, 15);
        assert_eq!(span.len(), 10);
    }

    #[test]
    fn test_span_is_empty() {
        let empty = Span::new(5, 5);
        let non_empty = Span::new(5, 10);

        assert!(empty.is_empty());
        assert!(!non_empty.is_empty());
    }

    #[test]
    fn test_eof_token() {
        let token = Token::eof(3, 12);
        assert_eq!(token.kind, TokenKind::Eof);
        assert!(token.lexeme.is_empty());
        assert!(token.literal.is_none());
        assert_eq!(token.line, 3);
        assert!(token.span.is_empty());
    }

    #[test]
    fn test_display_without_literal() {
        let token = Token::new(TokenKind::BangEqual, "!=", None, 1, Span::new(0, 2));
        assert_eq!(token.to_string(), "BangEqual !=");
    }

    #[test]
    fn test_display_number_literal() {
        let token = Token::new(
            TokenKind::Number,
            "123",
            Some(Literal::Number(123.0)),
            1,
            Span::new(0, 3),
        );
        assert_eq!(token.to_string(), "Number 123 123.0");
    }

    #[test]
    fn test_display_string_literal() {
        let token = Token::new(
            TokenKind::String,
            "\"hi\"",
            Some(Literal::String("hi".to_string())),
            1,
            Span::new(0, 4),
        );
        assert_eq!(token.to_string(), "String \"hi\" hi");
    }

    #[test]
    fn test_is_keyword() {
        assert!(TokenKind::While.is_keyword());
        assert!(TokenKind::Nil.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::Eof.is_keyword());
    }

    #[test]
    fn test_is_literal() {
        assert!(TokenKind::Number.is_literal());
        assert!(TokenKind::String.is_literal());
        assert!(!TokenKind::True.is_literal());
    }
}
