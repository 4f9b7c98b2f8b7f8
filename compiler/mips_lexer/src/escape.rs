//! Escape sequences in character literals.
//!
//! Recognized escapes: `\'`, `\"`, `\\`, `\n`, `\t`, `\b`, `\r`, `\f`, `\0`.
//! Each maps to the decimal code that replaces the whole literal.

/// Escape letter and the code it stands for.
const ESCAPES: [(char, u8); 9] = [
    ('\'', 39),
    ('"', 34),
    ('\\', 92),
    ('n', 10),
    ('t', 9),
    ('b', 8),
    ('r', 13),
    ('f', 12),
    ('0', 0),
];

/// Resolve the letter after a backslash to its character code.
///
/// Returns `None` for anything outside the table.
#[inline]
pub(crate) fn escape_code(c: char) -> Option<u8> {
    ESCAPES
        .iter()
        .find_map(|&(letter, code)| (letter == c).then_some(code))
}
