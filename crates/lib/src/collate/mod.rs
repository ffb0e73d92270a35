//! Comparison primitives for sorting, searching and de-duplication.
//!
//! Values stored in an [`ArrayObject`](crate::ArrayObject) are compared in one of
//! several modes selected by [`SortFlag`]. Every mode lowers its operands to
//! [`Scalar`]s and compares them with [`compare_scalars`]:
//!
//! - [`SortFlag::Regular`] - loose comparison of dynamic scalars. Booleans and
//!   null compare by truthiness, numbers and numeric strings compare
//!   numerically, anything else compares as bytes.
//! - [`SortFlag::Numeric`] - both sides coerced to numbers.
//! - [`SortFlag::String`] / [`SortFlag::StringCaseInsensitive`] - both sides
//!   coerced to strings.
//! - [`SortFlag::LocaleString`] - string comparison; no locale tables are
//!   consulted, so this orders by bytes like [`SortFlag::String`].
//! - [`SortFlag::Natural`] / [`SortFlag::NaturalCaseInsensitive`] - natural
//!   order via [`natural_compare`].

use std::borrow::Cow;
use std::cmp::Ordering;

mod natural;
mod numeric;

pub use natural::natural_compare;
pub use numeric::{Number, float_to_string, leading_number, parse_numeric};

/// Comparison mode for sorting and de-duplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortFlag {
    /// Loose comparison of dynamic values
    #[default]
    Regular,
    /// Compare as numbers
    Numeric,
    /// Compare as strings
    String,
    /// Compare as ASCII-case-folded strings
    StringCaseInsensitive,
    /// Compare as strings in the current locale (byte order)
    LocaleString,
    /// Compare strings in natural order
    Natural,
    /// Compare strings in case-insensitive natural order
    NaturalCaseInsensitive,
}

/// A borrowed scalar operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(&'a str),
}

impl<'a> Scalar<'a> {
    /// Truthiness: `0`, `0.0`, `""`, `"0"`, `false` and null are false
    pub fn to_bool(self) -> bool {
        match self {
            Scalar::Null => false,
            Scalar::Bool(b) => b,
            Scalar::Int(n) => n != 0,
            Scalar::Float(f) => f != 0.0,
            Scalar::Text(s) => !(s.is_empty() || s == "0"),
        }
    }

    /// Numeric coercion; strings contribute their leading numeric prefix
    pub fn to_number(self) -> Number {
        match self {
            Scalar::Null => Number::Int(0),
            Scalar::Bool(b) => Number::Int(b as i64),
            Scalar::Int(n) => Number::Int(n),
            Scalar::Float(f) => Number::Float(f),
            Scalar::Text(s) => leading_number(s),
        }
    }

    /// String coercion: `true` is `"1"`, `false` and null are `""`
    pub fn to_text(self) -> Cow<'a, str> {
        match self {
            Scalar::Null | Scalar::Bool(false) => Cow::Borrowed(""),
            Scalar::Bool(true) => Cow::Borrowed("1"),
            Scalar::Int(n) => Cow::Owned(n.to_string()),
            Scalar::Float(f) => Cow::Owned(float_to_string(f)),
            Scalar::Text(s) => Cow::Borrowed(s),
        }
    }

    fn as_number(self) -> Option<Number> {
        match self {
            Scalar::Int(n) => Some(Number::Int(n)),
            Scalar::Float(f) => Some(Number::Float(f)),
            _ => None,
        }
    }
}

/// Compares two scalars under `flag`.
///
/// ```
/// use std::cmp::Ordering;
/// use array_object::collate::{Scalar, SortFlag, compare_scalars};
///
/// let (a, b) = (Scalar::Int(11), Scalar::Text("2"));
/// assert_eq!(compare_scalars(a, b, SortFlag::Regular), Ordering::Greater);
/// assert_eq!(compare_scalars(a, b, SortFlag::String), Ordering::Less);
/// ```
pub fn compare_scalars(a: Scalar<'_>, b: Scalar<'_>, flag: SortFlag) -> Ordering {
    match flag {
        SortFlag::Regular => compare_regular(a, b),
        SortFlag::Numeric => a.to_number().compare(b.to_number()),
        SortFlag::String | SortFlag::LocaleString => {
            a.to_text().as_bytes().cmp(b.to_text().as_bytes())
        }
        SortFlag::StringCaseInsensitive => {
            let (a, b) = (a.to_text(), b.to_text());
            let a = a.bytes().map(|c| c.to_ascii_lowercase());
            let b = b.bytes().map(|c| c.to_ascii_lowercase());
            a.cmp(b)
        }
        SortFlag::Natural => natural_compare(&a.to_text(), &b.to_text(), false),
        SortFlag::NaturalCaseInsensitive => natural_compare(&a.to_text(), &b.to_text(), true),
    }
}

fn compare_regular(a: Scalar<'_>, b: Scalar<'_>) -> Ordering {
    match (a, b) {
        (Scalar::Null, Scalar::Null) => Ordering::Equal,
        // null only equals the empty string
        (Scalar::Null, Scalar::Text(s)) => {
            if s.is_empty() {
                Ordering::Equal
            } else {
                Ordering::Less
            }
        }
        (Scalar::Text(s), Scalar::Null) => {
            if s.is_empty() {
                Ordering::Equal
            } else {
                Ordering::Greater
            }
        }
        (Scalar::Null | Scalar::Bool(_), _) | (_, Scalar::Null | Scalar::Bool(_)) => {
            a.to_bool().cmp(&b.to_bool())
        }
        (Scalar::Text(x), Scalar::Text(y)) => match (parse_numeric(x), parse_numeric(y)) {
            (Some(n), Some(m)) => n.compare(m),
            _ => x.as_bytes().cmp(y.as_bytes()),
        },
        (Scalar::Text(s), other) => match (parse_numeric(s), other.as_number()) {
            (Some(n), Some(m)) => n.compare(m),
            _ => s.as_bytes().cmp(other.to_text().as_bytes()),
        },
        (other, Scalar::Text(s)) => match (other.as_number(), parse_numeric(s)) {
            (Some(n), Some(m)) => n.compare(m),
            _ => other.to_text().as_bytes().cmp(s.as_bytes()),
        },
        (x, y) => match (x.as_number(), y.as_number()) {
            (Some(n), Some(m)) => n.compare(m),
            _ => Ordering::Equal,
        },
    }
}
