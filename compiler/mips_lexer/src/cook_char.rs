//! Character literal decoding.
//!
//! A character-literal span that decodes is replaced by the decimal code of
//! its character, so `'a'` is classified (and stored) as the integer `97`.
//! Anything that does not decode is handed to the classifier unchanged,
//! which then reports it as an invalid language element.
//!
//! | Literal          | Result            |
//! |------------------|-------------------|
//! | `'c'`            | code of `c`       |
//! | `'\n'`, `'\''`.. | escape table code |
//! | `'\ddd'` (octal) | value if `<= 255` |
//! | anything else    | unchanged         |

use std::borrow::Cow;

use crate::escape::escape_code;

/// Decode a character-literal span into its decimal code.
///
/// Returns the input unchanged when it is not a well-formed literal.
pub fn cook_char_literal(raw: &str) -> Cow<'_, str> {
    match decode(raw) {
        Some(code) => Cow::Owned(code.to_string()),
        None => Cow::Borrowed(raw),
    }
}

fn decode(raw: &str) -> Option<u32> {
    let inner = raw.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut chars = inner.chars();
    match (chars.next()?, chars.next()) {
        ('\\', None) => None,
        (c, None) => Some(u32::from(c)),
        ('\\', Some(letter)) => {
            let rest = chars.as_str();
            if rest.is_empty() {
                escape_code(letter).map(u32::from)
            } else {
                decode_octal(&inner[1..])
            }
        }
        _ => None,
    }
}

/// Three octal digits whose value fits in a byte.
fn decode_octal(digits: &str) -> Option<u32> {
    if digits.len() != 3 || !digits.bytes().all(|b| matches!(b, b'0'..=b'7')) {
        return None;
    }
    u32::from_str_radix(digits, 8).ok().filter(|&value| value <= 255)
}

#[cfg(test)]
mod tests;
