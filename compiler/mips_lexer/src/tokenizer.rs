//! Line-by-line tokenizer.
//!
//! The tokenizer drives the span scanner from `mips_lexer_core` over each
//! line, decodes character literals, classifies every span, and records an
//! error diagnostic for every span classified [`TokenKind::Invalid`].
//!
//! Diagnostics always go to a caller-visible sink:
//! - [`Tokenizer::tokenize_program`] and friends collect them into a
//!   [`DiagnosticList`] and return it inside a [`ProcessingError`].
//! - [`Tokenizer::tokenize_line_into`] writes to whatever sink the caller
//!   passes, so a single call can be redirected without touching any state.

use std::borrow::Cow;
use std::sync::Arc;

use mips_diagnostic::{
    Diagnostic, DiagnosticConfig, DiagnosticList, DiagnosticSink, ProcessingError, ProgramContext,
};
use mips_lexer_core::{LineScanner, SpanSink, TokenSpan};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::cook_char::cook_char_literal;
use crate::{Classify, MipsClassifier, SourceProgram, Token, TokenKind, TokenList};

/// Tokenizer for MIPS assembly, parameterized by its classifier.
///
/// A tokenizer holds no per-run state, so one instance can tokenize any
/// number of programs, from any number of threads.
#[derive(Clone, Debug, Default)]
pub struct Tokenizer<C = MipsClassifier> {
    classifier: C,
    config: DiagnosticConfig,
}

impl Tokenizer<MipsClassifier> {
    /// Tokenizer with the builtin MIPS classifier and no error limit.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Classify> Tokenizer<C> {
    /// Replace the classifier.
    #[must_use]
    pub fn with_classifier<D: Classify>(self, classifier: D) -> Tokenizer<D> {
        Tokenizer {
            classifier,
            config: self.config,
        }
    }

    /// Set how diagnostics of whole-program runs are collected.
    #[must_use]
    pub fn with_diagnostic_config(mut self, config: DiagnosticConfig) -> Self {
        self.config = config;
        self
    }

    /// The classifier every span is handed to.
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Collection settings used by [`Tokenizer::tokenize_line`] and the
    /// whole-program calls.
    pub fn diagnostic_config(&self) -> DiagnosticConfig {
        self.config
    }

    /// Tokenize every line of `program`.
    ///
    /// Returns one [`TokenList`] per source line, in line order (empty lines
    /// give empty lists). Fails with every collected diagnostic if any
    /// span was invalid.
    pub fn tokenize_program(
        &self,
        program: &SourceProgram,
    ) -> Result<Vec<TokenList>, ProcessingError> {
        let file_name: Arc<str> = Arc::from(program.file_name());
        let mut diagnostics = DiagnosticList::with_config(self.config);
        let lines: Vec<TokenList> = program
            .lines()
            .iter()
            .enumerate()
            .map(|(index, text)| {
                self.cook_line(
                    Some(program),
                    &file_name,
                    line_number(index),
                    text,
                    &mut diagnostics,
                )
            })
            .collect();
        finish(program, lines, diagnostics)
    }

    /// Tokenize one line that is not part of a program.
    ///
    /// Tokens and diagnostics carry an empty file name.
    pub fn tokenize_line(&self, line: u32, text: &str) -> Result<TokenList, ProcessingError> {
        let mut diagnostics = DiagnosticList::with_config(self.config);
        let tokens = self.tokenize_line_into(line, text, &mut diagnostics);
        ProcessingError::check(tokens, diagnostics)
    }

    /// Tokenize a sample instruction, such as the example operand list of an
    /// instruction table entry. Reported as line 0.
    pub fn tokenize_example(&self, example: &str) -> Result<TokenList, ProcessingError> {
        self.tokenize_line(0, example)
    }

    /// Tokenize one line, sending diagnostics to `diagnostics`.
    ///
    /// Never fails; invalid spans appear in the result as
    /// [`TokenKind::Invalid`] tokens and as diagnostics in the sink.
    pub fn tokenize_line_into(
        &self,
        line: u32,
        text: &str,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> TokenList {
        let file_name: Arc<str> = Arc::from("");
        self.cook_line(None, &file_name, line, text, diagnostics)
    }

    fn cook_line<S: DiagnosticSink + ?Sized>(
        &self,
        program: Option<&dyn ProgramContext>,
        file_name: &Arc<str>,
        line: u32,
        text: &str,
        diagnostics: &mut S,
    ) -> TokenList {
        debug!(line, source = text, "tokenizing line");
        let mut cooker = LineCooker {
            classifier: &self.classifier,
            program,
            file_name,
            source_line: text,
            tokens: TokenList::new(),
            diagnostics,
        };
        LineScanner::new(line, text).scan(&mut cooker);
        cooker.tokens
    }
}

impl<C: Classify + Sync> Tokenizer<C> {
    /// Tokenize every line of `program` on the rayon thread pool.
    ///
    /// The result, including diagnostic order and the error limit, is
    /// identical to [`Tokenizer::tokenize_program`].
    pub fn tokenize_program_parallel(
        &self,
        program: &SourceProgram,
    ) -> Result<Vec<TokenList>, ProcessingError> {
        let file_name: Arc<str> = Arc::from(program.file_name());
        let per_line: Vec<(TokenList, DiagnosticList)> = program
            .lines()
            .par_iter()
            .enumerate()
            .map(|(index, text)| {
                let mut local = DiagnosticList::new();
                let tokens =
                    self.cook_line(Some(program), &file_name, line_number(index), text, &mut local);
                (tokens, local)
            })
            .collect();

        let mut diagnostics = DiagnosticList::with_config(self.config);
        let mut lines = Vec::with_capacity(per_line.len());
        for (tokens, local) in per_line {
            diagnostics.extend(local);
            lines.push(tokens);
        }
        finish(program, lines, diagnostics)
    }
}

/// 1-based line number of the line at `index`.
fn line_number(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

fn finish(
    program: &SourceProgram,
    lines: Vec<TokenList>,
    diagnostics: DiagnosticList,
) -> Result<Vec<TokenList>, ProcessingError> {
    debug!(
        file = program.file_name(),
        lines = lines.len(),
        tokens = lines.iter().map(TokenList::len).sum::<usize>(),
        errors = diagnostics.error_count(),
        "tokenized program"
    );
    ProcessingError::check(lines, diagnostics)
}

/// Receives the spans of one line and turns them into tokens.
struct LineCooker<'t, C, S: ?Sized> {
    classifier: &'t C,
    program: Option<&'t dyn ProgramContext>,
    file_name: &'t Arc<str>,
    source_line: &'t str,
    tokens: TokenList,
    diagnostics: &'t mut S,
}

impl<'a, C: Classify, S: DiagnosticSink + ?Sized> SpanSink<'a> for LineCooker<'_, C, S> {
    fn accept(&mut self, span: TokenSpan<'a>) {
        let text = if span.text.starts_with('\'') {
            cook_char_literal(span.text)
        } else {
            Cow::Borrowed(span.text)
        };
        let kind = self.classifier.classify(&text);
        trace!(line = span.line, column = span.column, text = %text, ?kind, "token");
        if kind.is_invalid() {
            debug!(line = span.line, column = span.column, text = %text, "invalid language element");
            self.diagnostics.push(Diagnostic::for_program(
                self.program,
                span.line,
                span.column,
                format!("{}\nInvalid language element: {text}", self.source_line),
            ));
        }
        self.tokens.push(Token::new(
            kind,
            text.into_owned(),
            Arc::clone(self.file_name),
            span.line,
            span.column,
        ));
    }

    fn last_is_identifier(&self) -> bool {
        self.tokens
            .last()
            .is_some_and(|token| token.kind == TokenKind::Identifier)
    }
}
