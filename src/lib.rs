//! Tokenizer for a small SQL-like data-definition language.
//!
//! The [`Lexer`] walks a statement one character at a time and produces
//! typed [`Token`]s for a downstream parser: keywords, datatypes,
//! identifiers, numbers, punctuation and a final end-of-input marker.
//!
//! ```
//! use ddl_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("CREATE TABLE users (id INT);");
//! let token = lexer.next_token().unwrap();
//! assert_eq!(token.kind, TokenKind::Keyword);
//! assert_eq!(token.text, "CREATE");
//! ```
//!
//! Unrecognized characters come back as [`LexError::UnexpectedCharacter`],
//! carrying an [`Illegal`](TokenKind::Illegal) token. Callers may stop there
//! or keep calling [`Lexer::next_token`].

pub mod config;
pub mod cursor;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod token;

pub use cursor::Cursor;
pub use error::LexError;
pub use keywords::{is_reserved, lookup_keyword};
pub use lexer::{is_digit, is_letter, Lexer};
pub use token::{Token, TokenKind};

/// Scans `input` to the end, stopping at the first unexpected character.
///
/// ```
/// let tokens = ddl_lexer::tokenize("id 123").unwrap();
/// assert_eq!(tokens.len(), 3);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}
