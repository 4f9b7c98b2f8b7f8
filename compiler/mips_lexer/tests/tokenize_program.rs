#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Whole-program tokenizing through the public API.

use mips_lexer::{DiagnosticConfig, SourceProgram, TokenKind, Tokenizer};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const HELLO: &str = "\
# print a greeting
        .data
msg:    .asciiz \"Hello, world\\n\"

        .text
main:   li   $v0, 4
        la   $a0, msg
        syscall
        li   $v0, 10          # exit
        syscall
";

fn program(source: &str) -> SourceProgram {
    SourceProgram::from_source("hello.asm", source)
}

#[test]
fn valid_program_has_one_list_per_line() {
    let lines = Tokenizer::new().tokenize_program(&program(HELLO)).unwrap();
    assert_eq!(lines.len(), 10);
    assert!(lines[3].is_empty());
    assert_eq!(lines[0].kinds(), vec![TokenKind::Comment]);
    assert_eq!(
        lines[2].texts(),
        vec!["msg", ":", ".asciiz", "\"Hello, world\\n\""]
    );
    assert_eq!(
        lines[8].kinds(),
        vec![
            TokenKind::Operator,
            TokenKind::RegisterName,
            TokenKind::Integer5,
            TokenKind::Comment,
        ]
    );
}

#[test]
fn tokens_know_where_they_came_from() {
    let lines = Tokenizer::new().tokenize_program(&program(HELLO)).unwrap();
    let syscall = &lines[7][0];
    assert_eq!(&*syscall.file_name, "hello.asm");
    assert_eq!(syscall.line, 8);
    assert_eq!(syscall.column, 9);
}

#[test]
fn invalid_elements_fail_the_program() {
    let source = "main: li $t0, 'ab'\n  nop\n  add $t0, $t0, @\n";
    let err = Tokenizer::new().tokenize_program(&program(source)).unwrap_err();
    assert_eq!(err.to_string(), "2 lexical errors detected");

    let diagnostics = err.diagnostics();
    assert_eq!(diagnostics.error_count(), 2);
    assert_eq!(
        diagnostics.error_report(),
        "Error in hello.asm line 1 column 15: main: li $t0, 'ab'\n\
         Invalid language element: 'ab'\n\
         Error in hello.asm line 3 column 17:   add $t0, $t0, @\n\
         Invalid language element: @\n"
    );
}

#[test]
fn error_limit_cuts_off_reporting() {
    let source = "@\n%\n^\n";
    let tokenizer =
        Tokenizer::new().with_diagnostic_config(DiagnosticConfig::with_error_limit(2));
    let err = tokenizer.tokenize_program(&program(source)).unwrap_err();
    let diagnostics = err.diagnostics();
    assert!(diagnostics.error_limit_exceeded());
    assert_eq!(diagnostics.len(), 3);
    assert_eq!(diagnostics.as_slice()[2].message(), "Error limit of 2 exceeded.");
    assert_eq!(diagnostics.as_slice()[2].line(), 3);
}

#[test]
fn parallel_matches_sequential() {
    let source = format!("{HELLO}bad: .word 0x, 'xy'\n{HELLO}");
    let tokenizer = Tokenizer::new();
    let sequential = tokenizer.tokenize_program(&program(&source));
    let parallel = tokenizer.tokenize_program_parallel(&program(&source));
    assert!(sequential.is_err());
    assert_eq!(sequential, parallel);
}

#[test]
fn parallel_respects_error_limit() {
    let source = "@\n".repeat(50);
    let tokenizer =
        Tokenizer::new().with_diagnostic_config(DiagnosticConfig::with_error_limit(5));
    let sequential = tokenizer.tokenize_program(&program(&source)).unwrap_err();
    let parallel = tokenizer.tokenize_program_parallel(&program(&source)).unwrap_err();
    assert_eq!(parallel.diagnostics().len(), 6);
    assert_eq!(sequential, parallel);
}

#[test]
fn empty_program() {
    let lines = Tokenizer::new().tokenize_program(&program("")).unwrap();
    assert!(lines.is_empty());
}

proptest! {
    #[test]
    fn parallel_is_sequential(
        lines in prop::collection::vec("[a-z$0-9 ,:()#'\"+@-]{0,24}", 0..24),
    ) {
        let program = SourceProgram::new("p.asm", lines);
        let tokenizer = Tokenizer::new();
        prop_assert_eq!(
            tokenizer.tokenize_program(&program),
            tokenizer.tokenize_program_parallel(&program)
        );
    }

    #[test]
    fn one_diagnostic_per_invalid_token(
        lines in prop::collection::vec("[a-z$0-9 ,:()'\"@%-]{0,24}", 1..8),
    ) {
        let program = SourceProgram::new("p.asm", lines);
        let tokenizer = Tokenizer::new();
        match tokenizer.tokenize_program(&program) {
            Ok(lists) => {
                let invalid = lists.iter().flatten().filter(|t| t.kind.is_invalid()).count();
                prop_assert_eq!(invalid, 0);
            }
            Err(err) => {
                let diagnostics = err.diagnostics();
                let mut sink = Vec::new();
                let invalid: usize = program
                    .lines()
                    .iter()
                    .map(|text| {
                        tokenizer
                            .tokenize_line_into(1, text, &mut sink)
                            .iter()
                            .filter(|t| t.kind.is_invalid())
                            .count()
                    })
                    .sum();
                prop_assert_eq!(diagnostics.len(), invalid);
                prop_assert_eq!(sink.len(), invalid);
            }
        }
    }
}
