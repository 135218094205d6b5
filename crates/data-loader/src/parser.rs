//! Parser for movie data lines.
//!
//! Format: `title,genre,language,year,rating,num_ratings`
//!
//! Parsing is deliberately permissive:
//! - Fields are comma-separated tokens; empty tokens between consecutive
//!   commas do not count as fields, and anything past the sixth field is ignored
//! - A row with fewer than six fields is skipped as a whole
//! - Numbers coerce best-effort ("12abc" -> 12, "abc" -> 0)
//! - Text fields are truncated to their maximum length

use crate::error::RowDefect;
use crate::types::*;

/// Field names in column order, used for defect reports
const FIELDS: [&str; 6] = ["title", "genre", "language", "year", "rating", "num_ratings"];

/// Result of parsing one data line.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// The line produced a record
    Kept(MovieRecord),
    /// The line was blank; not counted as a defect
    Blank,
    /// The line was malformed and is dropped
    Skipped(RowDefect),
}

/// Parse one data line (without its line terminator).
///
/// `line_no` is the 1-based position in the file and only feeds defect reports.
pub fn parse_row(line: &str, line_no: usize) -> RowOutcome {
    if line.is_empty() {
        return RowOutcome::Blank;
    }

    let mut tokens = line.split(',').filter(|token| !token.is_empty());
    let mut fields = [""; 6];
    for (slot, name) in fields.iter_mut().zip(FIELDS) {
        match tokens.next() {
            Some(token) => *slot = token,
            None => {
                return RowOutcome::Skipped(RowDefect {
                    line: line_no,
                    field: name,
                });
            }
        }
    }
    let [title, genre, language, year, rating, rating_count] = fields;

    RowOutcome::Kept(MovieRecord {
        title: truncate_chars(title, MAX_TITLE_LEN),
        genre: truncate_chars(genre, MAX_GENRE_LEN),
        language: truncate_chars(language, MAX_LANGUAGE_LEN),
        year: coerce_int(year),
        rating: coerce_float(rating),
        rating_count: coerce_int(rating_count),
    })
}

/// Copy at most `max` characters of `s`.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => s[..byte_idx].to_string(),
        None => s.to_string(),
    }
}

/// Best-effort integer conversion.
///
/// Skips leading whitespace, accepts an optional sign and then the longest run
/// of ASCII digits. Returns 0 when there are no digits. Out-of-range values
/// saturate.
///
/// Example: " 1995" -> 1995, "2005abc" -> 2005, "n/a" -> 0
pub fn coerce_int(s: &str) -> i32 {
    let s = s.trim_start();
    let (negative, digits) = split_sign(s);
    let digits = &digits[..digit_run(digits)];

    let mut value: i64 = 0;
    for b in digits.bytes() {
        value = value * 10 + i64::from(b - b'0');
        if value > i64::from(i32::MAX) + 1 {
            break;
        }
    }
    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Best-effort float conversion.
///
/// Accepts the longest decimal prefix of the form
/// `[ws][sign]digits[.digits][(e|E)[sign]digits]`. Returns 0.0 when there is
/// no such prefix.
///
/// Example: "8.5" -> 8.5, "7.1/10" -> 7.1, ".5" -> 0.5, "unrated" -> 0.0
pub fn coerce_float(s: &str) -> f32 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = digit_run(&s[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&s[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    // Only take the exponent if it has digits, so "7e" still reads as 7
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digit_run(&s[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

/// Length in bytes of the leading run of ASCII digits
fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}
