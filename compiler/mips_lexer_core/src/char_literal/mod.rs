//! Bounded lookahead for character literals.
//!
//! A character literal has a tiny grammar: `'` body `'`, where the body is
//! one plain character, a backslash plus one escape code, or a backslash
//! plus three octal digits. The lookahead therefore consumes at most six
//! characters. It never judges validity: whatever it consumed becomes one
//! span, and the cooking layer decides whether that span is a real literal.
//!
//! # States
//!
//! ```text
//! Start ──'──> SawOpenQuote ──b──> SawBodyFirstChar ──c──> SawEscapeChar
//!                                                               │
//!                                                               d
//!                                                               v
//!                            Done <──f── SawOctalDigit2 <──e── SawOctalDigit1
//! ```
//!
//! Every state can also jump straight to `Done`; see [`CharLiteralLookahead::step`].

use crate::cursor::Cursor;

/// Position of the lookahead within a character literal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CharLiteralState {
    /// Positioned on the opening `'`.
    #[default]
    Start,
    /// Consumed the opening `'`.
    SawOpenQuote,
    /// Consumed the first body character.
    SawBodyFirstChar,
    /// Consumed the third character: an escape code or first octal digit.
    SawEscapeChar,
    /// Consumed the fourth character.
    SawOctalDigit1,
    /// Consumed the fifth character.
    SawOctalDigit2,
    /// Lookahead finished; the consumed text is one span.
    Done,
}

/// State machine driving the character-literal lookahead.
#[derive(Clone, Copy, Debug, Default)]
pub struct CharLiteralLookahead {
    state: CharLiteralState,
    /// First body character, needed to tell `'\''` apart from `'x'`.
    body: Option<char>,
}

impl CharLiteralLookahead {
    /// Create a lookahead in the [`CharLiteralState::Start`] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> CharLiteralState {
        self.state
    }

    /// Perform one transition, consuming at most one character.
    ///
    /// Termination rules:
    /// - `Start`: fewer than two characters after the `'` (too short).
    /// - `SawOpenQuote`: body is `'` (empty literal).
    /// - `SawBodyFirstChar`: unescaped closing `'`, or end of line.
    /// - `SawEscapeChar`: closing `'` of a one-letter escape, or end of line.
    /// - `SawOctalDigit1`: fewer than two characters left, or a `'`.
    /// - `SawOctalDigit2`: always, after taking the sixth character.
    pub fn step(&mut self, cursor: &mut Cursor<'_>) -> CharLiteralState {
        use CharLiteralState::{
            Done, SawBodyFirstChar, SawEscapeChar, SawOctalDigit1, SawOctalDigit2, SawOpenQuote,
            Start,
        };

        self.state = match self.state {
            Start => {
                cursor.advance();
                if has_two_more(cursor) {
                    SawOpenQuote
                } else {
                    Done
                }
            }
            SawOpenQuote => match take(cursor) {
                Some('\'') | None => Done,
                Some(c) => {
                    self.body = Some(c);
                    SawBodyFirstChar
                }
            },
            SawBodyFirstChar => match take(cursor) {
                Some('\'') if self.body != Some('\\') => Done,
                Some(_) if !cursor.is_eol() => SawEscapeChar,
                _ => Done,
            },
            SawEscapeChar => match take(cursor) {
                Some(c) if c != '\'' && !cursor.is_eol() => SawOctalDigit1,
                _ => Done,
            },
            SawOctalDigit1 => {
                if has_two_more(cursor) {
                    match take(cursor) {
                        Some('\'') => Done,
                        _ => SawOctalDigit2,
                    }
                } else {
                    Done
                }
            }
            SawOctalDigit2 => {
                cursor.advance();
                Done
            }
            Done => Done,
        };
        self.state
    }

    /// Run the lookahead to completion. The cursor ends on the first
    /// character after the literal.
    pub fn run(mut self, cursor: &mut Cursor<'_>) {
        while self.step(cursor) != CharLiteralState::Done {}
    }
}

/// Consume and return the current character.
#[inline]
fn take(cursor: &mut Cursor<'_>) -> Option<char> {
    let c = cursor.current();
    cursor.advance();
    c
}

#[inline]
fn has_two_more(cursor: &Cursor<'_>) -> bool {
    cursor.current().is_some() && cursor.peek().is_some()
}
