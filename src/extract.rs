//! Best-match extraction over a list of choices.
//!
//! Choices are any string-like type implementing [`AsMatchStr`]. Each choice
//! is optionally preprocessed, scored against the (equally preprocessed)
//! query with a pluggable scorer, and filtered by an inclusive cutoff.
//! [`extract_one`] keeps the earliest best choice; [`extract`] returns every
//! qualifying choice sorted by score, ties kept in input order.

use std::borrow::Cow;
use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::options::ExtractOptions;

/// Types that can be matched directly as choices.
///
/// # Built-in Implementations
///
/// - [`String`] -- delegates to [`String::as_str`]
/// - [`str`] -- returns `self`
/// - [`&str`] -- dereferences and returns `self`
/// - [`Cow<'_, str>`] -- delegates to [`AsRef::as_ref`]
///
/// # Examples
///
/// ```
/// use stringmetrics::AsMatchStr;
///
/// let owned = String::from("hello");
/// assert_eq!(owned.as_match_str(), "hello");
///
/// let borrowed: &str = "world";
/// assert_eq!(borrowed.as_match_str(), "world");
/// ```
pub trait AsMatchStr {
    /// Returns the string representation of this item for matching.
    fn as_match_str(&self) -> &str;
}

impl AsMatchStr for String {
    fn as_match_str(&self) -> &str {
        self.as_str()
    }
}

impl AsMatchStr for str {
    fn as_match_str(&self) -> &str {
        self
    }
}

// Needed so `T = &str` satisfies the bound for slices like `["a", "b"]`.
impl AsMatchStr for &str {
    fn as_match_str(&self) -> &str {
        self
    }
}

impl AsMatchStr for Cow<'_, str> {
    fn as_match_str(&self) -> &str {
        self.as_ref()
    }
}

/// A choice that met the score cutoff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match<'a, T: ?Sized> {
    /// The original, unprocessed choice.
    pub choice: &'a T,
    /// Score reported by the scorer.
    pub score: f64,
    /// Position of the choice in the input list.
    pub index: usize,
}

/// Order matches by score descending, then by input position ascending.
///
/// Scores that cannot be compared (NaN) are treated as equal so the index
/// still decides.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use stringmetrics::extract::{Match, compare_matches};
///
/// let a = Match { choice: "x", score: 90.0, index: 1 };
/// let b = Match { choice: "y", score: 50.0, index: 0 };
/// assert_eq!(compare_matches(&a, &b), Ordering::Less);
/// ```
pub fn compare_matches<T: ?Sized>(a: &Match<'_, T>, b: &Match<'_, T>) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.index.cmp(&b.index))
}

/// Score every choice in input order.
#[cfg(not(feature = "parallel"))]
fn score_all<T: AsMatchStr>(query: &str, choices: &[T], options: &ExtractOptions) -> Vec<f64> {
    choices
        .iter()
        .map(|choice| options.score(query, &options.process(choice.as_match_str())))
        .collect()
}

/// Score every choice in input order on the rayon pool.
#[cfg(feature = "parallel")]
fn score_all<T: AsMatchStr>(query: &str, choices: &[T], options: &ExtractOptions) -> Vec<f64> {
    use rayon::prelude::*;

    let texts: Vec<&str> = choices.iter().map(AsMatchStr::as_match_str).collect();
    texts
        .par_iter()
        .map(|text| options.score(query, &options.process(text)))
        .collect()
}

/// Return the best-scoring choice, or `None` if no choice reaches the cutoff.
///
/// A later choice only replaces the current best when its score is strictly
/// higher, so the earliest choice wins exact ties.
///
/// # Arguments
///
/// * `query` - The string to match
/// * `choices` - Candidates, in priority order for ties
/// * `options` - Scorer, processor and cutoff
///
/// # Examples
///
/// ```
/// use stringmetrics::{ExtractOptions, extract_one};
///
/// let choices = ["New York Jets", "Dallas Cowboys"];
/// let best = extract_one("jets", &choices, &ExtractOptions::new().score_cutoff(30.0)).unwrap();
/// assert_eq!(*best.choice, "New York Jets");
/// assert_eq!(best.index, 0);
///
/// assert!(extract_one("jets", &choices, &ExtractOptions::new().score_cutoff(99.0)).is_none());
/// ```
pub fn extract_one<'a, T: AsMatchStr>(
    query: &str,
    choices: &'a [T],
    options: &ExtractOptions,
) -> Option<Match<'a, T>> {
    let query = options.process(query);
    let mut best: Option<Match<'a, T>> = None;

    for (index, choice) in choices.iter().enumerate() {
        let score = options.score(&query, &options.process(choice.as_match_str()));
        if score < options.score_cutoff {
            continue;
        }
        if best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(Match {
                choice,
                score,
                index,
            });
        }
    }

    debug!(
        query_len = query.len(),
        choices = choices.len(),
        found = best.is_some(),
        "extract_one"
    );
    best
}

/// Return every choice scoring at least the cutoff, best first.
///
/// Equal scores keep their input order. The result is truncated to
/// `options.limit` when set.
///
/// # Examples
///
/// ```
/// use stringmetrics::{ExtractOptions, extract};
///
/// let choices = ["apple", "apply", "maple", "banana"];
/// let matches = extract("appl", &choices, &ExtractOptions::new().score_cutoff(60.0));
/// let names: Vec<&str> = matches.iter().map(|m| *m.choice).collect();
/// assert_eq!(names, ["apple", "apply", "maple"]);
/// ```
pub fn extract<'a, T: AsMatchStr>(
    query: &str,
    choices: &'a [T],
    options: &ExtractOptions,
) -> Vec<Match<'a, T>> {
    let query = options.process(query);
    let scores = score_all(&query, choices, options);

    let mut matches: Vec<Match<'a, T>> = choices
        .iter()
        .zip(scores)
        .enumerate()
        .filter(|(_, (_, score))| *score >= options.score_cutoff)
        .map(|(index, (choice, score))| Match {
            choice,
            score,
            index,
        })
        .collect();

    // `sort_by` is stable; the index comparison makes that explicit.
    matches.sort_by(compare_matches);
    if let Some(limit) = options.limit {
        matches.truncate(limit);
    }

    debug!(
        query_len = query.len(),
        choices = choices.len(),
        matched = matches.len(),
        "extract"
    );
    matches
}
