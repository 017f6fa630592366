//! Longest common contiguous substring similarity.
//!
//! Scores a pair by the longest run of characters they share verbatim,
//! reporting where that run sits in both inputs.

use std::ops::Range;

use serde::Serialize;

use crate::distance::to_chars;

/// Longest common substring of a query and a candidate.
///
/// Ranges are half-open and measured in code points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstringMatch {
    /// Dice-style score `2 * len / (|query| + |candidate|)` in `[0.0, 1.0]`.
    pub score: f64,
    /// Position of the shared run in the query.
    pub query_range: Range<usize>,
    /// Position of the shared run in the candidate.
    pub candidate_range: Range<usize>,
}

impl SubstringMatch {
    /// Length of the shared run in code points.
    pub fn len(&self) -> usize {
        self.query_range.len()
    }

    /// Whether the inputs share no character.
    pub fn is_empty(&self) -> bool {
        self.query_range.is_empty()
    }
}

pub(crate) fn substring_chars(query: &[char], candidate: &[char]) -> SubstringMatch {
    let (m, n) = (query.len(), candidate.len());
    if m == 0 && n == 0 {
        return SubstringMatch {
            score: 1.0,
            query_range: 0..0,
            candidate_range: 0..0,
        };
    }

    // `row[j]` holds the length of the common run ending at query[i - 1] and
    // candidate[j - 1]. An equal-length run replaces the best, so ties keep
    // the last maximum met in row-major order. Zero-length cells never do.
    let mut prev = vec![0usize; n + 1];
    let mut row = vec![0usize; n + 1];
    let (mut best_len, mut best_end_q, mut best_end_c) = (0usize, 0usize, 0usize);

    for i in 1..=m {
        for j in 1..=n {
            row[j] = if query[i - 1] == candidate[j - 1] {
                prev[j - 1] + 1
            } else {
                0
            };
            if row[j] > 0 && row[j] >= best_len {
                best_len = row[j];
                best_end_q = i;
                best_end_c = j;
            }
        }
        std::mem::swap(&mut prev, &mut row);
    }

    SubstringMatch {
        score: 2.0 * best_len as f64 / (m + n) as f64,
        query_range: best_end_q - best_len..best_end_q,
        candidate_range: best_end_c - best_len..best_end_c,
    }
}

/// Find the longest common contiguous substring of `query` and `candidate`.
///
/// When several runs share the maximal length, the one whose end is reached
/// last scanning query positions outer and candidate positions inner is
/// reported. Inputs sharing no character score `0.0` with empty ranges at
/// offset zero; two empty inputs score `1.0`.
///
/// # Examples
///
/// ```
/// use stringmetrics::substring::substring_similarity;
///
/// let m = substring_similarity("hello", "say hello world");
/// assert_eq!(m.query_range, 0..5);
/// assert_eq!(m.candidate_range, 4..9);
/// assert!((m.score - 0.5).abs() < 1e-12);
/// ```
pub fn substring_similarity(query: &str, candidate: &str) -> SubstringMatch {
    substring_chars(&to_chars(query), &to_chars(candidate))
}
