//! Escape-sequence classification.
//!
//! Every predicate takes the full escape text, backslash included, and never
//! fails: text that does not even have the shape of an escape is simply not a
//! valid one.

/// Letters that may follow a backslash on their own.
const SIMPLE_ESCAPES: [u8; 5] = [b'n', b'r', b't', b'\\', b'0'];

const UNICODE_ESCAPE_PREFIX: &str = "\\u{";
const UNICODE_ESCAPE_SUFFIX: char = '}';
const UNICODE_ESCAPE_MAX_DIGITS: usize = 6;

/// Checks `\n`, `\r`, `\t`, `\\`, `\0`, and `\xHH` where `HH` is at most `7f`.
pub fn is_ascii_escape(escape: &str) -> bool {
    match escape.as_bytes() {
        [b'\\', letter] => SIMPLE_ESCAPES.contains(letter),
        [b'\\', b'x', high, low] => (b'0'..=b'7').contains(high) && low.is_ascii_hexdigit(),
        _ => false,
    }
}

/// Like `is_ascii_escape`, but `\xHH` covers the full byte range.
pub fn is_byte_escape(escape: &str) -> bool {
    match escape.as_bytes() {
        [b'\\', _] => is_ascii_escape(escape),
        [b'\\', b'x', high, low] => high.is_ascii_hexdigit() && low.is_ascii_hexdigit(),
        _ => false,
    }
}

/// Checks `\u{H}` through `\u{HHHHHH}`.
pub fn is_unicode_escape(escape: &str) -> bool {
    let Some(digits) = escape
        .strip_prefix(UNICODE_ESCAPE_PREFIX)
        .and_then(|rest| rest.strip_suffix(UNICODE_ESCAPE_SUFFIX))
    else {
        return false;
    };

    (1..=UNICODE_ESCAPE_MAX_DIGITS).contains(&digits.len())
        && digits.bytes().all(|c| c.is_ascii_hexdigit())
}
