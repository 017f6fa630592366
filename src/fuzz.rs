//! Token-based fuzzy ratios on a 0-100 scale.
//!
//! All ratios build on [`ratio`], the Indel normalized similarity scaled by
//! 100. Tokens are maximal runs of non-whitespace; they are compared
//! case-sensitively and unnormalized, so callers wanting case-insensitive
//! results normalize first (see [`crate::normalize`]).

use std::collections::BTreeSet;

use crate::distance::lcs::indel_normalized_chars;
use crate::distance::to_chars;

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    indel_normalized_chars(a, b) * 100.0
}

/// Indel similarity scaled to `[0, 100]`.
///
/// # Examples
///
/// ```
/// use stringmetrics::fuzz::ratio;
///
/// assert_eq!(ratio("this is a test", "this is a test"), 100.0);
/// assert!((ratio("hello", "hallo") - 80.0).abs() < 1e-9);
/// ```
pub fn ratio(a: &str, b: &str) -> f64 {
    ratio_chars(&to_chars(a), &to_chars(b))
}

/// Best [`ratio`] of the shorter string against every equally long window of
/// the longer one.
///
/// Returns `100` immediately when the shorter string occurs verbatim inside
/// the longer one. When exactly one side is empty the result is `0`; two
/// empty strings score `100`.
///
/// # Examples
///
/// ```
/// use stringmetrics::fuzz::partial_ratio;
///
/// assert_eq!(partial_ratio("fuzzy", "fuzzy wuzzy was a bear"), 100.0);
/// assert_eq!(partial_ratio("abc", ""), 0.0);
/// ```
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let (a_chars, b_chars) = (to_chars(a), to_chars(b));
    let (shorter, longer, shorter_str, longer_str) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars, a, b)
    } else {
        (b_chars, a_chars, b, a)
    };

    if shorter.is_empty() {
        return if longer.is_empty() { 100.0 } else { 0.0 };
    }

    // Byte-level containment on valid UTF-8 is code-point containment.
    if memchr::memmem::find(longer_str.as_bytes(), shorter_str.as_bytes()).is_some() {
        return 100.0;
    }

    longer
        .windows(shorter.len())
        .map(|window| ratio_chars(&shorter, window))
        .fold(0.0, f64::max)
}

/// Split on whitespace runs, dropping empty tokens.
fn tokenize(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

fn sorted_join(mut tokens: Vec<&str>) -> String {
    tokens.sort_unstable();
    tokens.join(" ")
}

/// [`ratio`] after sorting each side's tokens and rejoining them with single
/// spaces, making the score insensitive to word order.
///
/// # Examples
///
/// ```
/// use stringmetrics::fuzz::token_sort_ratio;
///
/// assert_eq!(token_sort_ratio("new york mets", "mets york new"), 100.0);
/// ```
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_join(tokenize(a)), &sorted_join(tokenize(b)))
}

fn join_sorted<'a, 's: 'a>(tokens: impl Iterator<Item = &'a &'s str>) -> String {
    tokens.copied().collect::<Vec<_>>().join(" ")
}

/// Join the non-empty parts with a single space.
fn join_parts(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Set-based token ratio, insensitive to word order and duplicated words.
///
/// With `I` the sorted shared tokens and `D_a`, `D_b` the sorted tokens only
/// present on one side, compares `I + D_a` against `I + D_b`. When `I` is
/// non-empty it also considers `I` against itself and against each combined
/// string, and returns the best score. Two token-free inputs score `100`;
/// exactly one token-free input scores `0`.
///
/// # Examples
///
/// ```
/// use stringmetrics::fuzz::token_set_ratio;
///
/// assert_eq!(token_set_ratio("fuzzy was a bear", "fuzzy fuzzy was a bear"), 100.0);
/// assert_eq!(token_set_ratio("   ", ""), 100.0);
/// assert_eq!(token_set_ratio("abc", " "), 0.0);
/// ```
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = tokenize(a).into_iter().collect();
    let tokens_b: BTreeSet<&str> = tokenize(b).into_iter().collect();

    match (tokens_a.is_empty(), tokens_b.is_empty()) {
        (true, true) => return 100.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    // BTreeSet iterates in sorted order, so the joins are already sorted.
    let intersection = join_sorted(tokens_a.intersection(&tokens_b));
    let only_a = join_sorted(tokens_a.difference(&tokens_b));
    let only_b = join_sorted(tokens_b.difference(&tokens_a));

    let combined_a = join_parts(&[&intersection, &only_a]);
    let combined_b = join_parts(&[&intersection, &only_b]);

    let combined = ratio(&combined_a, &combined_b);
    if intersection.is_empty() {
        return combined;
    }

    [
        combined,
        ratio(&intersection, &intersection),
        ratio(&intersection, &combined_a),
        ratio(&intersection, &combined_b),
    ]
    .into_iter()
    .fold(0.0, f64::max)
}
