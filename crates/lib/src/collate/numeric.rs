//! Numbers and numeric strings.

use std::cmp::Ordering;
use std::fmt;

/// A number produced by coercing a scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }

    /// Three-way comparison. Integers compare exactly; anything involving a
    /// float compares as floats, with NaN ordering after everything.
    pub fn compare(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(&b),
            (a, b) => compare_floats(a.as_f64(), b.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Float(x) => f.write_str(&float_to_string(*x)),
        }
    }
}

pub(crate) fn compare_floats(a: f64, b: f64) -> Ordering {
    if a == b {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// String form of a float as used by string comparisons.
pub fn float_to_string(value: f64) -> String {
    if value.is_nan() {
        "NAN".to_string()
    } else if value == f64::INFINITY {
        "INF".to_string()
    } else if value == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        format!("{value}")
    }
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Scans the numeric prefix of `s` (after leading whitespace).
///
/// Returns the number and the byte offset just past it.
fn scan(s: &str) -> Option<(Number, usize)> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && is_space(bytes[i]) {
        i += 1;
    }
    let start = i;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    let mut is_float = false;
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            is_float = true;
            i = j;
        }
    }
    if digits == 0 {
        return None;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            is_float = true;
            i = j;
        }
    }

    let text = &s[start..i];
    let number = if is_float {
        Number::Float(text.parse().ok()?)
    } else {
        match text.parse::<i64>() {
            Ok(n) => Number::Int(n),
            // Integers past i64 degrade to floats
            Err(_) => Number::Float(text.parse().ok()?),
        }
    };
    Some((number, i))
}

/// Parses a numeric string: optional surrounding whitespace, optional sign,
/// digits with an optional fraction and exponent.
///
/// ```
/// use array_object::collate::{Number, parse_numeric};
///
/// assert_eq!(parse_numeric(" 12 "), Some(Number::Int(12)));
/// assert_eq!(parse_numeric("1e3"), Some(Number::Float(1000.0)));
/// assert_eq!(parse_numeric("12abc"), None);
/// ```
pub fn parse_numeric(s: &str) -> Option<Number> {
    let (number, end) = scan(s)?;
    if s.as_bytes()[end..].iter().all(|b| is_space(*b)) {
        Some(number)
    } else {
        None
    }
}

/// Coerces a string to a number by its leading numeric prefix, or 0.
pub fn leading_number(s: &str) -> Number {
    scan(s).map(|(n, _)| n).unwrap_or(Number::Int(0))
}
