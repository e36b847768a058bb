use std::path::PathBuf;
use thiserror::Error;

use crate::token::Token;

/// Failure produced while scanning a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// The current character starts no token. `token` is the
    /// [`Illegal`](crate::TokenKind::Illegal) token holding it; the lexer has
    /// already moved past it.
    #[error("unexpected character '{}' at line {}, column {}", .token.text, .token.line, .token.column)]
    UnexpectedCharacter { token: Token },
}

impl LexError {
    pub fn token(&self) -> &Token {
        match self {
            LexError::UnexpectedCharacter { token } => token,
        }
    }

    pub fn into_token(self) -> Token {
        match self {
            LexError::UnexpectedCharacter { token } => token,
        }
    }
}

/// Errors surfaced by the `ddllex` command line tool.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("{count} unexpected character(s) in input")]
    IllegalInput { count: usize },
}

pub type Result<T> = std::result::Result<T, CliError>;
