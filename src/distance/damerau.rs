//! Transposition-aware edit distances.
//!
//! Two variants are provided:
//!
//! - **Optimal String Alignment** ([`osa_distance`]): Levenshtein plus a swap of
//!   two adjacent characters, where no substring may be edited more than once.
//!   It is not a true metric (the triangle inequality can fail), e.g.
//!   `osa("ca", "abc") == 3` while the unrestricted distance is 2.
//! - **Unrestricted Damerau-Levenshtein** ([`distance`]): transpositions may
//!   be separated by further edits, tracked through the last row in which each
//!   character was seen.

use std::collections::HashMap;

use super::{Matrix, normalized_similarity as normalize_dist, to_chars, trim_common};

pub(crate) fn osa_chars(a: &[char], b: &[char]) -> usize {
    let (a, b) = trim_common(a, b);
    let (m, n) = (a.len(), b.len());
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut d = Matrix::new(m + 1, n + 1);
    for i in 0..=m {
        d.set(i, 0, i);
    }
    for j in 0..=n {
        d.set(0, j, j);
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (d.get(i - 1, j) + 1)
                .min(d.get(i, j - 1) + 1)
                .min(d.get(i - 1, j - 1) + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(d.get(i - 2, j - 2) + 1);
            }
            d.set(i, j, best);
        }
    }
    d.get(m, n)
}

pub(crate) fn unrestricted_chars(a: &[char], b: &[char]) -> usize {
    let (a, b) = trim_common(a, b);
    let (m, n) = (a.len(), b.len());
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Bordered matrix: row/column 0 hold the sentinel, row/column 1 the
    // empty-prefix distances, so cell (i + 1, j + 1) stores d(a[..i], b[..j]).
    let sentinel = m + n;
    let mut d = Matrix::new(m + 2, n + 2);
    d.set(0, 0, sentinel);
    for i in 0..=m {
        d.set(i + 1, 0, sentinel);
        d.set(i + 1, 1, i);
    }
    for j in 0..=n {
        d.set(0, j + 1, sentinel);
        d.set(1, j + 1, j);
    }

    // Last 1-based row of `a` in which each character appeared.
    let mut last_row: HashMap<char, usize> = HashMap::new();

    for i in 1..=m {
        // Last 1-based column in this row where a[i - 1] matched.
        let mut last_match_col = 0;
        for j in 1..=n {
            let k = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let l = last_match_col;
            let cost = if a[i - 1] == b[j - 1] {
                last_match_col = j;
                0
            } else {
                1
            };
            let mut best = (d.get(i, j) + cost)
                .min(d.get(i + 1, j) + 1)
                .min(d.get(i, j + 1) + 1);
            if k > 0 && l > 0 {
                best = best.min(d.get(k, l) + (i - k - 1) + 1 + (j - l - 1));
            }
            d.set(i + 1, j + 1, best);
        }
        last_row.insert(a[i - 1], i);
    }
    d.get(m + 1, n + 1)
}

/// Optimal String Alignment distance (restricted Damerau-Levenshtein).
///
/// # Examples
///
/// ```
/// use stringmetrics::distance::damerau;
///
/// assert_eq!(damerau::osa_distance("abcd", "abdc"), 1);
/// assert_eq!(damerau::osa_distance("ca", "abc"), 3);
/// ```
pub fn osa_distance(a: &str, b: &str) -> usize {
    osa_chars(&to_chars(a), &to_chars(b))
}

/// `max(len(a), len(b)) - osa_distance(a, b)`.
pub fn osa_similarity(a: &str, b: &str) -> usize {
    let (a, b) = (to_chars(a), to_chars(b));
    a.len().max(b.len()) - osa_chars(&a, &b)
}

/// `1 - osa_distance / max(len(a), len(b))`, `1.0` for two empty strings.
pub fn osa_normalized_similarity(a: &str, b: &str) -> f64 {
    let (a, b) = (to_chars(a), to_chars(b));
    normalize_dist(osa_chars(&a, &b), a.len().max(b.len()))
}

/// Unrestricted Damerau-Levenshtein distance.
///
/// # Examples
///
/// ```
/// use stringmetrics::distance::damerau;
///
/// assert_eq!(damerau::distance("abcd", "abdc"), 1);
/// assert_eq!(damerau::distance("ca", "abc"), 2);
/// ```
pub fn distance(a: &str, b: &str) -> usize {
    unrestricted_chars(&to_chars(a), &to_chars(b))
}

/// `max(len(a), len(b)) - distance(a, b)`.
pub fn similarity(a: &str, b: &str) -> usize {
    let (a, b) = (to_chars(a), to_chars(b));
    a.len().max(b.len()) - unrestricted_chars(&a, &b)
}

/// `1 - distance / max(len(a), len(b))`, `1.0` for two empty strings.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let (a, b) = (to_chars(a), to_chars(b));
    normalize_dist(unrestricted_chars(&a, &b), a.len().max(b.len()))
}
