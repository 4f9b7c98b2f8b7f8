#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn sample() -> Diagnostic {
    Diagnostic::with_severity(
        Severity::Error,
        "loop.asm",
        3,
        9,
        "lw $t0, 8($t1) @\nInvalid language element: @",
    )
}

fn render(mode: ColorMode, f: impl FnOnce(&mut TerminalEmitter<Vec<u8>>)) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), mode, false);
    f(&mut emitter);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn plain_output_matches_report_line() {
    let text = render(ColorMode::Never, |e| e.emit(&sample()));
    assert_eq!(text, format!("{}\n", sample()));
}

#[test]
fn colored_output_has_ansi_codes() {
    let text = render(ColorMode::Always, |e| e.emit(&sample()));
    assert!(text.contains("\x1b[1;31mError\x1b[0m"));
    assert!(text.contains("line 3 column 9"));
}

#[test]
fn auto_mode_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn summary_variants() {
    assert_eq!(render(ColorMode::Never, |e| e.emit_summary(0, 0)), "");
    assert_eq!(
        render(ColorMode::Never, |e| e.emit_summary(1, 0)),
        "error: 1 lexical error\n"
    );
    assert_eq!(
        render(ColorMode::Never, |e| e.emit_summary(2, 1)),
        "error: 2 lexical errors; 1 warning emitted\n"
    );
    assert_eq!(
        render(ColorMode::Never, |e| e.emit_summary(0, 3)),
        "warning: 3 warnings emitted\n"
    );
}

#[test]
fn emit_list_writes_all_then_summary() {
    let mut list = DiagnosticList::new();
    list.add(Diagnostic::new(1, 1, "first"));
    list.add(Diagnostic::new(2, 4, "second"));
    let text = render(ColorMode::Never, |e| e.emit_list(&list));
    assert_eq!(
        text,
        "Error line 1 column 1: first\nError line 2 column 4: second\nerror: 2 lexical errors\n"
    );
}
