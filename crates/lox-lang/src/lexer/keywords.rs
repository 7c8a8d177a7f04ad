// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Reserved words.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::TokenKind;

/// Every reserved word paired with its token kind.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fun", TokenKind::Fun),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

static TABLE: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

/// Looks up a reserved word. Matching is exact and case-sensitive.
pub fn keyword(text: &str) -> Option<TokenKind> {
    TABLE.get(text).copied()
}
