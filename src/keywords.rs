//! Reserved word classification.
//!
//! Every letter-initiated run the lexer scans is checked against a fixed
//! table of reserved words. Matching ignores ASCII case; extending the
//! grammar only means adding rows to [`RESERVED_WORDS`].

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::token::TokenKind;

/// Reserved words, stored in uppercase.
pub const RESERVED_WORDS: &[(&str, TokenKind)] = &[
    ("CREATE", TokenKind::Keyword),
    ("TABLE", TokenKind::Keyword),
    ("NAMESPACE", TokenKind::Keyword),
    ("INT", TokenKind::Datatype),
    ("STRING", TokenKind::Datatype),
];

/// Lookup table built from [`RESERVED_WORDS`] on first use. Read-only afterwards.
static KEYWORDS: LazyLock<HashMap<&'static str, TokenKind>> =
    LazyLock::new(|| RESERVED_WORDS.iter().copied().collect());

/// Classifies an identifier-shaped word.
///
/// Returns [`TokenKind::Keyword`] or [`TokenKind::Datatype`] for reserved
/// words and [`TokenKind::Identifier`] for everything else.
///
/// ```
/// use ddl_lexer::{lookup_keyword, TokenKind};
///
/// assert_eq!(lookup_keyword("create"), TokenKind::Keyword);
/// assert_eq!(lookup_keyword("String"), TokenKind::Datatype);
/// assert_eq!(lookup_keyword("users"), TokenKind::Identifier);
/// ```
pub fn lookup_keyword(word: &str) -> TokenKind {
    KEYWORDS
        .get(word.to_ascii_uppercase().as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

pub fn is_reserved(word: &str) -> bool {
    lookup_keyword(word) != TokenKind::Identifier
}
