//! Low-level line scanner for MIPS assembly source.
//!
//! This crate turns one line of text into candidate token spans. It is
//! standalone: it knows nothing about token kinds or diagnostics. The
//! `mips_lexer` crate drives it, classifies each span, and reports errors.
//!
//! `here: lw $t3, 8($t4) #load` scans to `here`, `:`, `lw`, `$t3`, `8`,
//! `(`, `$t4`, `)`, `#load`. The comma is a delimiter and produces nothing.

mod char_literal;
mod cursor;
mod scanner;

pub use char_literal::{CharLiteralLookahead, CharLiteralState};
pub use cursor::Cursor;
pub use scanner::{scan_line, LineScanner, SpanSink, TokenSpan};
