//! Natural ("human") ordering of strings.
//!
//! Runs of digits compare by magnitude, so `"img2" < "img10"`. Whitespace is
//! skipped, leading zeros at the very start are ignored, and a digit run that
//! starts with `0` compares digit by digit (as a fraction would).

use std::cmp::Ordering;

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn is_digit_at(s: &[u8], i: usize) -> bool {
    s.get(i).is_some_and(u8::is_ascii_digit)
}

fn skip_leading_zeros(s: &[u8]) -> usize {
    let mut i = 0;
    while s.get(i) == Some(&b'0') && is_digit_at(s, i + 1) {
        i += 1;
    }
    i
}

/// Digit runs without leading zeros: the longer run wins, otherwise the first
/// differing digit decides.
fn compare_right(a: &[u8], mut i: usize, b: &[u8], mut j: usize) -> (Ordering, usize, usize) {
    let mut bias = Ordering::Equal;
    loop {
        match (is_digit_at(a, i), is_digit_at(b, j)) {
            (false, false) => return (bias, i, j),
            (false, true) => return (Ordering::Less, i, j),
            (true, false) => return (Ordering::Greater, i, j),
            (true, true) => {
                if bias == Ordering::Equal {
                    bias = a[i].cmp(&b[j]);
                }
            }
        }
        i += 1;
        j += 1;
    }
}

/// Digit runs with a leading zero: the first differing digit decides.
fn compare_left(a: &[u8], mut i: usize, b: &[u8], mut j: usize) -> (Ordering, usize, usize) {
    loop {
        match (is_digit_at(a, i), is_digit_at(b, j)) {
            (false, false) => return (Ordering::Equal, i, j),
            (false, true) => return (Ordering::Less, i, j),
            (true, false) => return (Ordering::Greater, i, j),
            (true, true) => match a[i].cmp(&b[j]) {
                Ordering::Equal => {}
                other => return (other, i, j),
            },
        }
        i += 1;
        j += 1;
    }
}

/// Compares two strings in natural order.
///
/// ```
/// use std::cmp::Ordering;
/// use array_object::collate::natural_compare;
///
/// assert_eq!(natural_compare("img2", "img10", false), Ordering::Less);
/// assert_eq!(natural_compare("FILE 11", "file 1", false), Ordering::Less);
/// assert_eq!(natural_compare("FILE 11", "file 1", true), Ordering::Greater);
/// ```
pub fn natural_compare(a: &str, b: &str, case_insensitive: bool) -> Ordering {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.is_empty() || b.is_empty() {
        return a.len().cmp(&b.len());
    }

    let mut i = skip_leading_zeros(a);
    let mut j = skip_leading_zeros(b);
    loop {
        while i < a.len() && is_space(a[i]) {
            i += 1;
        }
        while j < b.len() && is_space(b[j]) {
            j += 1;
        }
        match (i >= a.len(), j >= b.len()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        let (ca, cb) = (a[i], b[j]);
        if ca.is_ascii_digit() && cb.is_ascii_digit() {
            let fractional = ca == b'0' || cb == b'0';
            let (ordering, next_i, next_j) = if fractional {
                compare_left(a, i, b, j)
            } else {
                compare_right(a, i, b, j)
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
            i = next_i;
            j = next_j;
            continue;
        }

        let (ca, cb) = if case_insensitive {
            (ca.to_ascii_uppercase(), cb.to_ascii_uppercase())
        } else {
            (ca, cb)
        };
        match ca.cmp(&cb) {
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
            other => return other,
        }
    }
}
