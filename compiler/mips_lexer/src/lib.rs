//! Tokenizer for MIPS assembly source.
//!
//! Each source line becomes a [`TokenList`]. Every token carries its kind,
//! text, file name, line, and column. Spans the classifier cannot place
//! become [`TokenKind::Invalid`] tokens plus one error diagnostic each; a
//! run that saw any fails with a [`ProcessingError`] holding them all.
//!
//! # Architecture
//!
//! - `mips_lexer_core` splits a line into spans (delimiters, signs, strings,
//!   character literals, comments).
//! - [`cook_char_literal`] replaces decodable character literals by their
//!   decimal code.
//! - A [`Classify`] implementation ([`MipsClassifier`] by default) assigns
//!   each span its [`TokenKind`].
//! - [`Tokenizer`] ties these together per line, per program, or per
//!   program in parallel.
//!
//! ```
//! use mips_lexer::{SourceProgram, TokenKind, Tokenizer};
//!
//! let program = SourceProgram::from_source("demo.asm", "main: li $v0, 'a'");
//! let lines = Tokenizer::new().tokenize_program(&program).unwrap();
//! assert_eq!(lines[0][4].text, "97");
//! assert_eq!(lines[0][4].kind, TokenKind::Integer16U);
//! ```

mod classify;
mod cook_char;
mod escape;
mod source;
mod token;
mod tokenizer;

pub use classify::{parse_integer, Classify, MipsClassifier};
pub use cook_char::cook_char_literal;
pub use mips_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticList, ProcessingError};
pub use source::SourceProgram;
pub use token::{Token, TokenKind, TokenList};
pub use tokenizer::Tokenizer;
