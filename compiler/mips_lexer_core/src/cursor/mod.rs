//! Character cursor over a single source line.
//!
//! The cursor walks the line one `char` at a time while tracking two
//! positions: the byte offset (for slicing spans out of the line without
//! copying) and the 1-based column (for diagnostics). Columns count
//! characters, not bytes, so a multi-byte character advances the column
//! by exactly one.

/// Cursor over one line of source text.
///
/// The cursor is [`Copy`], so the scanner can snapshot it cheaply.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The full line being scanned.
    line: &'a str,
    /// Current read position (byte index into `line`).
    pos: usize,
    /// 1-based column of the character at `pos`.
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned on the first character of `line`.
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            pos: 0,
            column: 1,
        }
    }

    /// Returns the character at the current position, or `None` at end of line.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.line[self.pos..].chars().next()
    }

    /// Returns the character one position ahead of current.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let mut rest = self.line[self.pos..].chars();
        rest.next();
        rest.next()
    }

    /// Returns the character immediately before the current position.
    #[inline]
    pub fn prev(&self) -> Option<char> {
        self.line[..self.pos].chars().next_back()
    }

    /// Advance past the current character. No-op at end of line.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
            self.column += 1;
        }
    }

    /// Advance to the end of the line.
    pub fn eat_to_end(&mut self) {
        while !self.is_eol() {
            self.advance();
        }
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eol(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// Current byte offset into the line.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// 1-based column of the current character.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Slice the line between `start` and the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.line[start..self.pos]
    }
}
