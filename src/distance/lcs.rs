//! Longest common subsequence and the insert/delete-only edit distance built
//! on top of it.
//!
//! The two families normalize differently:
//!
//! | Function                          | Value                          |
//! |-----------------------------------|--------------------------------|
//! | [`indel_distance`]                | `|a| + |b| - 2 * lcs`          |
//! | [`indel_normalized_similarity`]   | `1 - indel / (|a| + |b|)`      |
//! | [`lcs_seq_similarity`]            | `lcs`                          |
//! | [`lcs_seq_distance`]              | `max(|a|, |b|) - lcs`          |
//! | [`lcs_seq_normalized_similarity`] | `lcs / max(|a|, |b|)`          |

use super::{normalized_similarity as normalize_dist, to_chars, trim_common};

/// Length of the longest common subsequence, two-row DP.
pub(crate) fn lcs_len(a: &[char], b: &[char]) -> usize {
    let (ta, tb) = trim_common(a, b);
    // Trimmed characters are all part of the subsequence.
    let shared = a.len() - ta.len();
    let (long, short) = if ta.len() >= tb.len() { (ta, tb) } else { (tb, ta) };
    if short.is_empty() {
        return shared;
    }

    let mut prev = vec![0usize; short.len() + 1];
    let mut curr = vec![0usize; short.len() + 1];
    for &lc in long {
        for (j, &sc) in short.iter().enumerate() {
            curr[j + 1] = if lc == sc {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    shared + prev[short.len()]
}

pub(crate) fn indel_chars(a: &[char], b: &[char]) -> usize {
    a.len() + b.len() - 2 * lcs_len(a, b)
}

pub(crate) fn indel_normalized_chars(a: &[char], b: &[char]) -> f64 {
    normalize_dist(indel_chars(a, b), a.len() + b.len())
}

/// Number of insertions and deletions (no substitutions) turning `a` into `b`.
///
/// # Examples
///
/// ```
/// use stringmetrics::distance::lcs;
///
/// assert_eq!(lcs::indel_distance("hello", "hallo"), 2);
/// ```
pub fn indel_distance(a: &str, b: &str) -> usize {
    indel_chars(&to_chars(a), &to_chars(b))
}

/// `1 - indel_distance / (len(a) + len(b))`, `1.0` for two empty strings.
///
/// # Examples
///
/// ```
/// use stringmetrics::distance::lcs;
///
/// assert_eq!(lcs::indel_normalized_similarity("hello", "hallo"), 0.8);
/// ```
pub fn indel_normalized_similarity(a: &str, b: &str) -> f64 {
    indel_normalized_chars(&to_chars(a), &to_chars(b))
}

/// Length of the longest common subsequence.
pub fn lcs_seq_similarity(a: &str, b: &str) -> usize {
    lcs_len(&to_chars(a), &to_chars(b))
}

/// `max(len(a), len(b)) - lcs`.
///
/// # Examples
///
/// ```
/// use stringmetrics::distance::lcs;
///
/// assert_eq!(lcs::lcs_seq_distance("AGGTAB", "GXTXAYB"), 3);
/// ```
pub fn lcs_seq_distance(a: &str, b: &str) -> usize {
    let (a, b) = (to_chars(a), to_chars(b));
    a.len().max(b.len()) - lcs_len(&a, &b)
}

/// `lcs / max(len(a), len(b))`, `1.0` for two empty strings.
///
/// # Examples
///
/// ```
/// use stringmetrics::distance::lcs;
///
/// let score = lcs::lcs_seq_normalized_similarity("AGGTAB", "GXTXAYB");
/// assert!((score - 4.0 / 7.0).abs() < 1e-12);
/// ```
pub fn lcs_seq_normalized_similarity(a: &str, b: &str) -> f64 {
    let (a, b) = (to_chars(a), to_chars(b));
    let max = a.len().max(b.len());
    normalize_dist(max - lcs_len(&a, &b), max)
}
