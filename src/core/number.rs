//! Queue length extraction from message bodies.
//!
//! The first run of digits in the body is taken, optionally followed by a
//! single `.` or `,` and more digits. A comma is read as a decimal
//! separator, so `"3,5"` is `3.5`.
//!
//! Any Unicode decimal digit counts, so fullwidth `"３"` and Arabic-Indic
//! `"٣"` both read as `3`.
//!
//! ```
//! use fila::core::number::extract_number;
//!
//! assert_eq!(extract_number("fila: 3,5 pessoas"), Some(3.5));
//! assert_eq!(extract_number("umas 4 pessoas, talvez 5"), Some(4.0));
//! assert_eq!(extract_number("３ pessoas"), Some(3.0));
//! assert_eq!(extract_number("ok"), None);
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Pattern for the first decimal-looking substring.
///
/// `\d` is Unicode-aware and matches every `Nd` digit.
pub const NUMBER_PATTERN: &str = r"\d+[.,]?\d*";

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NUMBER_PATTERN).expect("number pattern is valid"));

static DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("digit pattern is valid"));

/// Extracts the first number from a message body.
///
/// Returns `None` when the body contains no digit.
pub fn extract_number(body: &str) -> Option<f64> {
    let matched = NUMBER_RE.find(body)?.as_str();
    let normalized: String = matched
        .chars()
        .map(|c| if c == ',' { '.' } else { ascii_digit(c).unwrap_or(c) })
        .collect();
    // "3." and "3," are valid matches; drop the dangling separator
    normalized.trim_end_matches('.').parse::<f64>().ok()
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DIGIT_RE.is_match(c.encode_utf8(&mut buf))
}

/// Maps any Unicode decimal digit to its ASCII counterpart.
///
/// `Nd` digits are assigned in contiguous runs of ten, zero first, and
/// adjacent runs (the mathematical digits) are each ten long, so the value
/// is the distance to the start of the run modulo ten.
fn ascii_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut offset = 0u32;
    let mut cp = u32::from(c);
    while let Some(prev) = cp.checked_sub(1).and_then(char::from_u32)
        && is_decimal_digit(prev)
    {
        offset += 1;
        cp -= 1;
    }
    char::from_digit(offset % 10, 10)
}
