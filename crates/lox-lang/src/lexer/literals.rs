// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Literal scanning documentation.
//!
//! This module documents the literal scanning logic in `scanner.rs`.
//! The lexer handles numeric, string, and identifier literals.
//!
//! ## Numeric Literals
//!
//! Method: `scan_number`
//!
//! ```text
//! 42        -> Number 42.0
//! 3.14      -> Number 3.14
//! 12.       -> Number 12.0, Dot
//! .5        -> Dot, Number 5.0
//! -1        -> Minus, Number 1.0
//! ```
//!
//! There are no exponents, radix prefixes or digit separators. The literal
//! is the `f64` parsed from the lexeme.
//!
//! ## String Literals
//!
//! Method: `scan_string`
//!
//! Strings use double quotes only and may span lines; every embedded newline
//! advances the line counter, and the token reports the line reached at the
//! closing quote. There are no escape sequences: the literal is the raw
//! text between the quotes. A string still open at end of input is reported
//! as `Unterminated string` and produces no token.
//!
//! ## Identifiers and Keywords
//!
//! Method: `scan_identifier`
//!
//! - Start: `A-Z`, `a-z`, `_`
//! - Continue: Start chars + `0-9`
//!
//! The scanner checks if an identifier is a reserved word:
//!
//! ```text
//! "if"      -> TokenKind::If
//! "for"     -> TokenKind::For
//! "android" -> TokenKind::Identifier
//! ```

// This module serves as documentation. The actual implementation is in scanner.rs.

#[cfg(test)]
mod tests {
    use crate::diagnostics::Diagnostics;
    use crate::lexer::{KEYWORDS, Literal, Scanner, Token, TokenKind};

    fn scan(src: &str) -> (Vec<Token>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let tokens = Scanner::new(src, &mut diagnostics).scan_tokens();
        (tokens, diagnostics)
    }

    fn scan_single(src: &str) -> Token {
        let (mut tokens, diagnostics) = scan(src);
        assert!(diagnostics.is_empty());
        assert_eq!(tokens.len(), 2, "expected one token for {src:?}");
        tokens.remove(0)
    }

    // Number tests
    #[test]
    fn test_integer() {
        let token = scan_single("123");
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.literal, Some(Literal::Number(123.0)));
    }

    #[test]
    fn test_float() {
        let token = scan_single("12.5");
        assert_eq!(token.lexeme, "12.5");
        assert_eq!(token.literal, Some(Literal::Number(12.5)));
    }

    #[test]
    fn test_trailing_dot_is_separate() {
        let (tokens, _) = scan("12.");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].literal, Some(Literal::Number(12.0)));
        assert_eq!(tokens[0].lexeme, "12");
        assert_eq!(tokens[1].kind, TokenKind::Dot);
    }

    #[test]
    fn test_leading_dot_is_separate() {
        let (tokens, _) = scan(".5");
        assert_eq!(tokens[0].kind, TokenKind::Dot);
        assert_eq!(tokens[1].literal, Some(Literal::Number(5.0)));
    }

    #[test]
    fn test_no_exponent() {
        let (tokens, _) = scan("1e10");
        assert_eq!(tokens[0].literal, Some(Literal::Number(1.0)));
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme, "e10");
    }

    #[test]
    fn test_method_call_on_number() {
        let (tokens, _) = scan("3.abs");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Number,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    // String tests
    #[test]
    fn test_string() {
        let token = scan_single("\"hello\"");
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.lexeme, "\"hello\"");
        assert_eq!(token.literal, Some(Literal::String("hello".to_string())));
    }

    #[test]
    fn test_empty_string() {
        let token = scan_single("\"\"");
        assert_eq!(token.literal, Some(Literal::String(String::new())));
    }

    #[test]
    fn test_string_keeps_backslashes() {
        let token = scan_single(r#""a\nb""#);
        assert_eq!(token.literal, Some(Literal::String("a\\nb".to_string())));
    }

    #[test]
    fn test_multiline_string() {
        let (tokens, diagnostics) = scan("\"a\nb\"");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].literal, Some(Literal::String("a\nb".to_string())));
        assert_eq!(tokens[0].line, 2);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_unterminated_string() {
        let (tokens, diagnostics) = scan("\"abc");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        let messages: Vec<&str> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["Unterminated string"]);
    }

    // Identifier and keyword tests
    #[test]
    fn test_identifier() {
        let token = scan_single("myVar");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.lexeme, "myVar");
        assert!(token.literal.is_none());
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        assert_eq!(scan_single("_private_2").kind, TokenKind::Identifier);
    }

    #[test]
    fn test_keywords() {
        for (text, kind) in KEYWORDS {
            assert_eq!(scan_single(text).kind, *kind);
        }
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(scan_single("android").kind, TokenKind::Identifier);
        assert_eq!(scan_single("classy").kind, TokenKind::Identifier);
        assert_eq!(scan_single("fun_").kind, TokenKind::Identifier);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(scan_single("Class").kind, TokenKind::Identifier);
        assert_eq!(scan_single("TRUE").kind, TokenKind::Identifier);
    }
}
