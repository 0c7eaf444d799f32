// Offset and unit conversions between JavaScript and the engine
//
// Browser text fields report caret positions in UTF-16 code units; the
// engine works in chars.

use std::time::Duration;

/// Char offset corresponding to a UTF-16 offset in `text`. An offset inside
/// a surrogate pair rounds down; offsets past the end clamp to the end.
pub fn utf16_to_char_offset(text: &str, units: usize) -> usize {
    let mut seen = 0;
    for (index, c) in text.chars().enumerate() {
        let next = seen + c.len_utf16();
        if next > units {
            return index;
        }
        seen = next;
    }
    text.chars().count()
}

/// UTF-16 offset corresponding to a char offset in `text`, clamped to the
/// end of the text.
pub fn char_to_utf16_offset(text: &str, offset: usize) -> usize {
    text.chars().take(offset).map(char::len_utf16).sum()
}

/// A JavaScript millisecond timestamp as a `Duration`. Negative and NaN
/// values count as zero.
pub fn millis(ms: f64) -> Duration {
    if ms.is_finite() && ms > 0.0 {
        Duration::from_micros((ms * 1000.0).round() as u64)
    } else {
        Duration::ZERO
    }
}

/// Boundary keys from a string, one key per char.
pub fn parse_keys(keys: &str) -> Vec<char> {
    let mut out: Vec<char> = Vec::new();
    for c in keys.chars() {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}
