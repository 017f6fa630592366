//! Levenshtein distance with unit insert, delete and substitute costs.

use super::{normalized_similarity as normalize_dist, to_chars, trim_common};

/// Single-row Wagner-Fischer over two code-point slices.
pub(crate) fn distance_chars(a: &[char], b: &[char]) -> usize {
    let (a, b) = trim_common(a, b);
    // Iterate over the longer side so the row is sized by the shorter one.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, &lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let substitute = diagonal + usize::from(lc != sc);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(diagonal + 1);
        }
    }
    row[short.len()]
}

/// Minimum number of single-character insertions, deletions and
/// substitutions turning `a` into `b`.
///
/// # Examples
///
/// ```
/// use stringmetrics::distance::levenshtein;
///
/// assert_eq!(levenshtein::distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein::distance("", "abc"), 3);
/// // Multi-byte characters count once.
/// assert_eq!(levenshtein::distance("na\u{00EF}ve", "naive"), 1);
/// ```
pub fn distance(a: &str, b: &str) -> usize {
    distance_chars(&to_chars(a), &to_chars(b))
}

/// `max(len(a), len(b)) - distance(a, b)`.
pub fn similarity(a: &str, b: &str) -> usize {
    let (a, b) = (to_chars(a), to_chars(b));
    a.len().max(b.len()) - distance_chars(&a, &b)
}

/// `distance / max(len(a), len(b))`, `0.0` for two empty strings.
pub fn normalized_distance(a: &str, b: &str) -> f64 {
    1.0 - normalized_similarity(a, b)
}

/// `1 - distance / max(len(a), len(b))`, `1.0` for two empty strings.
///
/// # Examples
///
/// ```
/// use stringmetrics::distance::levenshtein;
///
/// let score = levenshtein::normalized_similarity("kitten", "sitting");
/// assert!((score - (1.0 - 3.0 / 7.0)).abs() < 1e-12);
/// ```
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let (a, b) = (to_chars(a), to_chars(b));
    normalize_dist(distance_chars(&a, &b), a.len().max(b.len()))
}
