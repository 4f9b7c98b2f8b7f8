//! Token classification.
//!
//! The tokenizer hands every span to a [`Classify`] implementation. The
//! default, [`MipsClassifier`], recognizes the MIPS32 assembly language:
//! registers, mnemonics, directives, numeric literals, strings, and
//! identifiers. Checks run in a fixed order; the first that matches wins.

mod tables;

use rustc_hash::FxHashSet;

use crate::TokenKind;
use tables::{DIRECTIVES, MNEMONICS, REGISTER_NAMES};

/// Decides the [`TokenKind`] of a span of text.
///
/// Implementations must be pure: the same text always gets the same kind.
pub trait Classify {
    fn classify(&self, text: &str) -> TokenKind;
}

impl<F> Classify for F
where
    F: Fn(&str) -> TokenKind,
{
    fn classify(&self, text: &str) -> TokenKind {
        self(text)
    }
}

/// Classifier for MIPS32 assembly.
#[derive(Clone, Debug)]
pub struct MipsClassifier {
    /// Lower-case instruction mnemonics.
    mnemonics: FxHashSet<String>,
}

impl MipsClassifier {
    pub fn new() -> Self {
        MipsClassifier {
            mnemonics: MNEMONICS.iter().map(|m| (*m).to_owned()).collect(),
        }
    }

    /// Add extra mnemonics (for example, user macros) on top of the builtin set.
    ///
    /// Matching is case-insensitive, like the builtin set.
    #[must_use]
    pub fn with_mnemonics<I, S>(mut self, mnemonics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.mnemonics
            .extend(mnemonics.into_iter().map(|m| m.as_ref().to_ascii_lowercase()));
        self
    }

    pub fn is_mnemonic(&self, text: &str) -> bool {
        self.mnemonics.contains(&text.to_ascii_lowercase())
    }
}

impl Default for MipsClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classify for MipsClassifier {
    fn classify(&self, text: &str) -> TokenKind {
        let Some(first) = text.chars().next() else {
            return TokenKind::Invalid;
        };
        match first {
            '\'' => return TokenKind::Invalid,
            '#' => return TokenKind::Comment,
            _ => {}
        }
        if let Some(kind) = single_char_kind(text) {
            return kind;
        }
        if is_register_name(text) {
            return TokenKind::RegisterName;
        }
        if is_register_number(text) {
            return TokenKind::RegisterNumber;
        }
        if is_fp_register(text) {
            return TokenKind::FpRegisterName;
        }
        if let Some(value) = parse_integer(text) {
            return integer_kind(value);
        }
        if is_real_number(text) {
            return TokenKind::RealNumber;
        }
        if self.is_mnemonic(text) {
            return TokenKind::Operator;
        }
        if is_directive(text) {
            return TokenKind::Directive;
        }
        if is_quoted_string(text) {
            return TokenKind::QuotedString;
        }
        if is_identifier(text) {
            return TokenKind::Identifier;
        }
        TokenKind::Invalid
    }
}

fn single_char_kind(text: &str) -> Option<TokenKind> {
    let kind = match text {
        "(" => TokenKind::LeftParen,
        ")" => TokenKind::RightParen,
        ":" => TokenKind::Colon,
        "+" => TokenKind::Plus,
        "-" => TokenKind::Minus,
        _ => return None,
    };
    Some(kind)
}

fn is_register_name(text: &str) -> bool {
    REGISTER_NAMES.contains(&text)
}

/// Decimal register number `0..=31` after `prefix`.
fn register_index(text: &str, prefix: &str) -> bool {
    text.strip_prefix(prefix).is_some_and(|digits| {
        !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && digits.parse::<u32>().is_ok_and(|n| n < 32)
    })
}

/// `$0` through `$31`.
fn is_register_number(text: &str) -> bool {
    register_index(text, "$")
}

/// `$f0` through `$f31`.
fn is_fp_register(text: &str) -> bool {
    register_index(text, "$f")
}

/// Parse a 32-bit integer literal.
///
/// Accepts an optional sign followed by decimal, `0x`-prefixed hexadecimal,
/// or `0`-prefixed octal digits. A ten-character `0x` literal is taken as
/// the two's-complement bit pattern, so `0xFFFFFFFF` is `-1`.
pub fn parse_integer(text: &str) -> Option<i32> {
    parse_signed(text).or_else(|| parse_bit_pattern(text))
}

fn parse_signed(text: &str) -> Option<i32> {
    let (negative, body) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, digits) = if let Some(hex) = strip_hex_prefix(body) {
        (16, hex)
    } else if body.len() > 1 && body.starts_with('0') {
        (8, &body[1..])
    } else {
        (10, body)
    };
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    i32::try_from(if negative { -magnitude } else { magnitude }).ok()
}

fn parse_bit_pattern(text: &str) -> Option<i32> {
    if text.len() != 10 {
        return None;
    }
    let digits = strip_hex_prefix(text)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let bits = u32::from_str_radix(digits, 16).ok()?;
    Some(i32::from_ne_bytes(bits.to_ne_bytes()))
}

fn strip_hex_prefix(text: &str) -> Option<&str> {
    text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))
}

fn integer_kind(value: i32) -> TokenKind {
    match value {
        0..=31 => TokenKind::Integer5,
        32..=65_535 => TokenKind::Integer16U,
        -32_768..=-1 => TokenKind::Integer16,
        _ => TokenKind::Integer32,
    }
}

/// Floating-point literal such as `1.5`, `.25`, `-3e8`.
fn is_real_number(text: &str) -> bool {
    let bytes = text.as_bytes();
    let starts_numeric = match bytes {
        [b'+' | b'-', next, ..] => next.is_ascii_digit() || *next == b'.',
        [first, ..] => first.is_ascii_digit() || *first == b'.',
        [] => false,
    };
    starts_numeric
        && bytes
            .iter()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
        && text.parse::<f64>().is_ok()
}

fn is_directive(text: &str) -> bool {
    DIRECTIVES.iter().any(|d| d.eq_ignore_ascii_case(text))
}

/// `"..."` whose closing quote is not escaped.
fn is_quoted_string(text: &str) -> bool {
    text.len() >= 2
        && text.starts_with('"')
        && text.ends_with('"')
        && !text[..text.len() - 1].ends_with('\\')
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || matches!(c, '_' | '.' | '$'))
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '$'))
}
