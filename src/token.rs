use std::fmt;
use serde::{Deserialize, Serialize};

/// A single lexical unit scanned from a statement.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact input text of the token. Empty only for [`TokenKind::EndOfInput`].
    pub text: String,
    /// Byte offset of the first character.
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
            line,
            column,
        }
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Byte offset just past the token's text.
    pub fn end_offset(&self) -> usize {
        self.offset + self.text.len()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Token: Type={}, Literal={}", self.kind, self.text)
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    EndOfInput,
    Illegal,

    // Words
    Identifier,  // users, id, DB
    Keyword,     // CREATE, TABLE, NAMESPACE
    Datatype,    // INT, STRING

    // Literals
    Number,      // 123

    // Punctuation
    LeftParen,   // (
    RightParen,  // )
    Comma,       // ,
    Semicolon,   // ;
    Dot,         // .
}

impl TokenKind {
    /// Wire name shared by `Display` and the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "END_OF_INPUT",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Datatype => "DATATYPE",
            TokenKind::Number => "NUMBER",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Dot => "DOT",
        }
    }

    /// Maps a punctuation character to its kind.
    pub fn from_punctuation(ch: char) -> Option<TokenKind> {
        match ch {
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            ',' => Some(TokenKind::Comma),
            ';' => Some(TokenKind::Semicolon),
            '.' => Some(TokenKind::Dot),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
