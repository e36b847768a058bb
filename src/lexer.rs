use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::keywords::lookup_keyword;
use crate::token::{Token, TokenKind};

/// Tokenizer for a single statement.
///
/// Each call to [`next_token`](Lexer::next_token) scans exactly one token.
/// Once the input is exhausted every further call returns an
/// [`EndOfInput`](TokenKind::EndOfInput) token.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Scans the next token.
    ///
    /// An unrecognized character is returned as
    /// [`LexError::UnexpectedCharacter`]. The cursor has already moved past
    /// it, so scanning can resume with the next call.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let offset = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();

        let Some(ch) = self.cursor.current() else {
            return Ok(Token::new(TokenKind::EndOfInput, "", offset, line, column));
        };

        let (kind, text) = if let Some(kind) = TokenKind::from_punctuation(ch) {
            self.cursor.advance();
            (kind, self.cursor.slice_from(offset))
        } else if is_letter(ch) {
            let ident = self.cursor.eat_while(is_ident_continue);
            (lookup_keyword(ident), ident)
        } else if is_digit(ch) {
            (TokenKind::Number, self.cursor.eat_while(is_digit))
        } else {
            self.cursor.advance();
            debug!(character = %ch, line, column, "unexpected character");
            let token = Token::new(TokenKind::Illegal, ch.to_string(), offset, line, column);
            return Err(LexError::UnexpectedCharacter { token });
        };

        trace!(kind = %kind, text, offset, "token");
        Ok(Token::new(kind, text, offset, line, column))
    }

    /// Scans the whole input, stopping at the first error.
    ///
    /// On success the returned tokens end with the end-of-input token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let end = token.is_end();
            tokens.push(token);
            if end {
                return Ok(tokens);
            }
        }
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
    }

    /// Byte offset of the next unscanned character.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    pub fn column(&self) -> usize {
        self.cursor.column()
    }
}

/// Yields every token before end of input. Errors are yielded in place and
/// iteration continues past them.
impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_end() => None,
            result => Some(result),
        }
    }
}

/// Letters (any Unicode alphabetic character) and the underscore.
pub fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

/// Decimal digits `0`-`9`.
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

fn is_ident_continue(ch: char) -> bool {
    is_letter(ch) || is_digit(ch)
}
