// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Operator scanning documentation.
//!
//! This module documents the operator scanning logic in `scanner.rs`.
//!
//! ## Single-Character Tokens
//!
//! | Char | Kind |
//! |------|------|
//! | `(` `)` | `LeftParen`, `RightParen` |
//! | `{` `}` | `LeftBrace`, `RightBrace` |
//! | `,` `.` `;` | `Comma`, `Dot`, `Semicolon` |
//! | `-` `+` `*` | `Minus`, `Plus`, `Star` |
//!
//! ## One or Two Character Operators
//!
//! | Token | Variants |
//! |-------|----------|
//! | `!` | `!`, `!=` |
//! | `=` | `=`, `==` |
//! | `<` | `<`, `<=` |
//! | `>` | `>`, `>=` |
//!
//! Each of these looks at the next character only; `===` scans as
//! `EqualEqual` followed by `Equal`.
//!
//! ## Comment Handling
//!
//! The `/` character can start:
//! - Division: `a / b`
//! - Line comment: `// comment`, running up to but not including the next
//!   newline, so the newline still advances the line counter.

// This module serves as documentation. The actual implementation is in scanner.rs.

#[cfg(test)]
mod tests {
    use crate::diagnostics::Diagnostics;
    use crate::lexer::{Scanner, Token, TokenKind};

    fn scan(src: &str) -> Vec<Token> {
        let mut diagnostics = Diagnostics::new();
        let tokens = Scanner::new(src, &mut diagnostics).scan_tokens();
        assert!(diagnostics.is_empty(), "unexpected diagnostics for {src:?}");
        tokens
    }

    fn scan_single(src: &str) -> TokenKind {
        let tokens = scan(src);
        assert_eq!(tokens.len(), 2, "expected one token for {src:?}");
        assert_eq!(tokens[0].lexeme, src);
        tokens[0].kind
    }

    #[test]
    fn test_single_character_tokens() {
        assert_eq!(scan_single("("), TokenKind::LeftParen);
        assert_eq!(scan_single(")"), TokenKind::RightParen);
        assert_eq!(scan_single("{"), TokenKind::LeftBrace);
        assert_eq!(scan_single("}"), TokenKind::RightBrace);
        assert_eq!(scan_single(","), TokenKind::Comma);
        assert_eq!(scan_single("."), TokenKind::Dot);
        assert_eq!(scan_single("-"), TokenKind::Minus);
        assert_eq!(scan_single("+"), TokenKind::Plus);
        assert_eq!(scan_single(";"), TokenKind::Semicolon);
        assert_eq!(scan_single("*"), TokenKind::Star);
        assert_eq!(scan_single("/"), TokenKind::Slash);
    }

    #[test]
    fn test_bang_operators() {
        assert_eq!(scan_single("!"), TokenKind::Bang);
        assert_eq!(scan_single("!="), TokenKind::BangEqual);
    }

    #[test]
    fn test_equal_operators() {
        assert_eq!(scan_single("="), TokenKind::Equal);
        assert_eq!(scan_single("=="), TokenKind::EqualEqual);
    }

    #[test]
    fn test_less_operators() {
        assert_eq!(scan_single("<"), TokenKind::Less);
        assert_eq!(scan_single("<="), TokenKind::LessEqual);
    }

    #[test]
    fn test_greater_operators() {
        assert_eq!(scan_single(">"), TokenKind::Greater);
        assert_eq!(scan_single(">="), TokenKind::GreaterEqual);
    }

    #[test]
    fn test_triple_equal_splits() {
        let kinds: Vec<TokenKind> = scan("===").into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::EqualEqual, TokenKind::Equal, TokenKind::Eof]
        );
    }

    #[test]
    fn test_operator_followed_by_space() {
        let kinds: Vec<TokenKind> = scan("! =").into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Bang, TokenKind::Equal, TokenKind::Eof]);
    }

    #[test]
    fn test_line_comment() {
        let tokens = scan("// comment\n+");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Plus);
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }
}
