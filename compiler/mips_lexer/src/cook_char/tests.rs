use super::*;
use pretty_assertions::assert_eq;

fn cooked(raw: &str) -> String {
    cook_char_literal(raw).into_owned()
}

// === Plain characters ===

#[test]
fn plain_character() {
    assert_eq!(cooked("'a'"), "97");
    assert_eq!(cooked("'A'"), "65");
    assert_eq!(cooked("' '"), "32");
}

#[test]
fn non_ascii_character_uses_scalar_value() {
    assert_eq!(cooked("'é'"), "233");
}

#[test]
fn lone_backslash_body_is_unchanged() {
    assert_eq!(cooked(r"'\'"), r"'\'");
}

// === Escapes ===

#[test]
fn simple_escapes() {
    assert_eq!(cooked(r"'\n'"), "10");
    assert_eq!(cooked(r"'\t'"), "9");
    assert_eq!(cooked(r"'\''"), "39");
    assert_eq!(cooked(r#"'\"'"#), "34");
    assert_eq!(cooked(r"'\\'"), "92");
    assert_eq!(cooked(r"'\0'"), "0");
}

#[test]
fn unknown_escape_is_unchanged() {
    assert_eq!(cooked(r"'\q'"), r"'\q'");
}

// === Octal ===

#[test]
fn octal_escape() {
    assert_eq!(cooked(r"'\101'"), "65");
    assert_eq!(cooked(r"'\000'"), "0");
    assert_eq!(cooked(r"'\377'"), "255");
}

#[test]
fn octal_out_of_byte_range_is_unchanged() {
    assert_eq!(cooked(r"'\400'"), r"'\400'");
}

#[test]
fn non_octal_digits_are_unchanged() {
    assert_eq!(cooked(r"'\189'"), r"'\189'");
    assert_eq!(cooked(r"'\+12'"), r"'\+12'");
}

#[test]
fn wrong_length_escape_is_unchanged() {
    assert_eq!(cooked(r"'\12'"), r"'\12'");
    assert_eq!(cooked(r"'\ab'"), r"'\ab'");
    assert_eq!(cooked(r"'\1234'"), r"'\1234'");
}

// === Malformed ===

#[test]
fn malformed_literals_are_unchanged() {
    for raw in ["'", "''", "'ab'", "'a", "abc", "'abc'"] {
        assert_eq!(cooked(raw), raw, "{raw}");
    }
}

#[test]
fn unchanged_input_is_borrowed() {
    assert!(matches!(cook_char_literal("'ab'"), Cow::Borrowed("'ab'")));
}
