//! Character cursor over a statement.
//!
//! The cursor always has the character under examination loaded. Once the
//! input is exhausted the current character is `None`, which no input
//! character (including `'\0'`) can be confused with.

/// Forward-only cursor over UTF-8 text.
///
/// `position` is the byte index of the current character and
/// `read_position` the byte index of the one after it. At end of input
/// both equal the input length.
///
/// ```
/// use ddl_lexer::Cursor;
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.current(), Some('a'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some('b'));
/// cursor.advance();
/// assert_eq!(cursor.current(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    position: usize,
    read_position: usize,
    ch: Option<char>,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut cursor = Self {
            input,
            position: 0,
            read_position: 0,
            ch: None,
            line: 1,
            column: 1,
        };
        cursor.read_char();
        cursor
    }

    fn read_char(&mut self) {
        self.position = self.read_position;
        self.ch = self.input[self.read_position..].chars().next();
        if let Some(ch) = self.ch {
            self.read_position += ch.len_utf8();
        }
    }

    /// Moves past the current character. Does nothing at end of input.
    pub fn advance(&mut self) {
        match self.ch {
            None => return,
            Some('\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some(_) => self.column += 1,
        }
        self.read_char();
    }

    /// Consumes the longest run of characters matching `pred`, starting at
    /// the current character, and returns it.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.position;
        while let Some(ch) = self.ch {
            if !pred(ch) {
                break;
            }
            self.advance();
        }
        self.slice_from(start)
    }

    pub fn current(&self) -> Option<char> {
        self.ch
    }

    pub fn is_at_end(&self) -> bool {
        self.ch.is_none()
    }

    /// Byte index of the current character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// 1-based line of the current character.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the current character, counted in characters.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.position]
    }
}
