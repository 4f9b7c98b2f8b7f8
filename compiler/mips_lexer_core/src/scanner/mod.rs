//! Hand-written line scanner producing [`TokenSpan`] values.
//!
//! The scanner makes one left-to-right pass over a single source line and
//! hands each candidate token to a [`SpanSink`]. It does not classify
//! tokens, decode character literals, or report errors: a malformed
//! construct still becomes a span, and the cooking layer decides what it is.
//!
//! # Design
//!
//! Assembly delimiters (space, tab, comma) can appear inside quoted strings,
//! `+`/`-` can be a unary sign, an exponent sign, or a binary operator, and
//! `#` starts a comment only outside strings. A generic tokenizer cannot
//! resolve these, so the scanner keeps a pending-token start offset, a
//! quoted-string flag, and asks the sink whether the last emitted token was
//! an identifier when it meets a sign.
//!
//! Every span is a contiguous slice of the line, so no characters are
//! copied.

use crate::char_literal::CharLiteralLookahead;
use crate::cursor::Cursor;

/// An unclassified candidate token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TokenSpan<'a> {
    /// The characters of the token, borrowed from the line.
    pub text: &'a str,
    /// 1-based line number of the owning line.
    pub line: u32,
    /// 1-based column of the first character.
    pub column: u32,
}

/// Receiver for spans produced by the scanner.
///
/// The sink also answers the one question the scanner cannot answer on its
/// own: whether the most recently finished token on this line was
/// classified as an identifier. That decides whether a `-` before a digit
/// is a unary sign (`li $t0, -5`) or a binary operator (`label-4`).
pub trait SpanSink<'a> {
    /// Accept the next span, in left-to-right order.
    fn accept(&mut self, span: TokenSpan<'a>);

    /// Whether the last accepted span on this line is an identifier.
    /// Returns `false` when nothing has been accepted yet.
    fn last_is_identifier(&self) -> bool;
}

/// Start of the token currently being accumulated.
#[derive(Clone, Copy, Debug)]
struct Pending {
    /// Byte offset into the line.
    start: usize,
    /// 1-based column.
    column: u32,
}

/// Scanner state for one line.
pub struct LineScanner<'a> {
    cursor: Cursor<'a>,
    line: u32,
    pending: Option<Pending>,
    in_string: bool,
}

impl<'a> LineScanner<'a> {
    /// Create a scanner for line `line` with text `text`.
    pub fn new(line: u32, text: &'a str) -> Self {
        Self {
            cursor: Cursor::new(text),
            line,
            pending: None,
            in_string: false,
        }
    }

    /// Scan the whole line, feeding every span to `sink`.
    pub fn scan(mut self, sink: &mut dyn SpanSink<'a>) {
        while let Some(c) = self.cursor.current() {
            if self.in_string {
                self.string_char(c, sink);
                continue;
            }
            match c {
                '#' => {
                    self.comment(sink);
                    return;
                }
                ' ' | '\t' | ',' => {
                    self.flush(sink);
                    self.cursor.advance();
                }
                '+' | '-' => self.sign(sink),
                ':' | '(' | ')' => self.single(sink),
                '"' => {
                    self.flush(sink);
                    self.begin();
                    self.cursor.advance();
                    self.in_string = true;
                }
                '\'' => self.char_literal(sink),
                _ => {
                    if self.pending.is_none() {
                        self.begin();
                    }
                    self.cursor.advance();
                }
            }
        }
        // An unterminated string is flushed as-is.
        self.flush(sink);
    }

    // ─── Token bookkeeping ──────────────────────────────────────────

    /// Start a new pending token at the current character.
    #[inline]
    fn begin(&mut self) {
        self.pending = Some(Pending {
            start: self.cursor.pos(),
            column: self.cursor.column(),
        });
    }

    /// Emit the pending token, if any.
    fn flush(&mut self, sink: &mut dyn SpanSink<'a>) {
        if let Some(pending) = self.pending.take() {
            let text = self.cursor.slice_from(pending.start);
            if !text.is_empty() {
                sink.accept(TokenSpan {
                    text,
                    line: self.line,
                    column: pending.column,
                });
            }
        }
    }

    // ─── Rules ──────────────────────────────────────────────────────

    fn comment(&mut self, sink: &mut dyn SpanSink<'a>) {
        self.flush(sink);
        self.begin();
        self.cursor.eat_to_end();
        self.flush(sink);
    }

    fn single(&mut self, sink: &mut dyn SpanSink<'a>) {
        self.flush(sink);
        self.begin();
        self.cursor.advance();
        self.flush(sink);
    }

    fn sign(&mut self, sink: &mut dyn SpanSink<'a>) {
        let next_is_digit = self.cursor.peek().is_some_and(|c| c.is_ascii_digit());

        // Signed exponent in E-notation (`1.2e-5`): keep accumulating.
        if self.pending.is_some()
            && next_is_digit
            && matches!(self.cursor.prev(), Some('e' | 'E'))
        {
            self.cursor.advance();
            return;
        }

        self.flush(sink);
        self.begin();
        self.cursor.advance();

        // Unary only when the previous token is not an identifier and a
        // digit follows; the digits are then appended to the sign.
        let unary = !sink.last_is_identifier() && next_is_digit;
        if !unary {
            self.flush(sink);
        }
    }

    fn string_char(&mut self, c: char, sink: &mut dyn SpanSink<'a>) {
        let escaped = self.cursor.prev() == Some('\\');
        self.cursor.advance();
        if c == '"' && !escaped {
            self.flush(sink);
            self.in_string = false;
        }
    }

    fn char_literal(&mut self, sink: &mut dyn SpanSink<'a>) {
        self.flush(sink);
        self.begin();
        CharLiteralLookahead::new().run(&mut self.cursor);
        self.flush(sink);
    }
}

/// Sink that collects spans, deciding "identifier" with a caller predicate.
struct Collector<'a, F> {
    spans: Vec<TokenSpan<'a>>,
    is_identifier: F,
}

impl<'a, F: Fn(&str) -> bool> SpanSink<'a> for Collector<'a, F> {
    fn accept(&mut self, span: TokenSpan<'a>) {
        self.spans.push(span);
    }

    fn last_is_identifier(&self) -> bool {
        self.spans
            .last()
            .is_some_and(|span| (self.is_identifier)(span.text))
    }
}

/// Scan `text` and collect its spans.
///
/// `is_identifier` stands in for classification when deciding whether a
/// sign is unary.
pub fn scan_line<F>(line: u32, text: &str, is_identifier: F) -> Vec<TokenSpan<'_>>
where
    F: Fn(&str) -> bool,
{
    let mut collector = Collector {
        spans: Vec::new(),
        is_identifier,
    };
    LineScanner::new(line, text).scan(&mut collector);
    collector.spans
}
