//! Locale-aware string ordering without an ICU dependency.
//!
//! Strings are compared in three passes:
//! 1. base letters, case-folded, with diacritics removed
//! 2. the decomposed form including diacritics
//! 3. case, with lowercase ordered before uppercase

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two strings the way a user expects a word list to be ordered.
pub fn compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary(a, b))
}

/// Case-folded base letters, diacritics stripped.
pub fn primary_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn secondary_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn tertiary(a: &str, b: &str) -> Ordering {
    for (x, y) in a.nfd().zip(b.nfd()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => return x.cmp(&y),
        }
    }
    a.len().cmp(&b.len())
}
