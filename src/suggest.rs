//! Ranked "did you mean" suggestions.
//!
//! The engine normalizes the query once, then normalizes and scores each
//! candidate with the selected metric. It can nudge prefix matches upward,
//! drops anything under `min_score`, and returns the best `max_suggestions`
//! in stable score order.

use std::ops::Range;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::Result;
use crate::extract::AsMatchStr;
use crate::normalize::{Preset, normalize};
use crate::options::{RawSuggestOptions, SuggestMetric, SuggestOptions};
use crate::substring::substring_similarity;

/// Fraction of the remaining distance to 1.0 granted to prefix matches.
const PREFIX_BONUS: f64 = 0.1;

/// Marker appended to [`Suggestion::reason`] when the prefix bonus applied.
pub const PREFIX_BONUS_MARKER: &str = "prefix_bonus";

/// One ranked candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// The candidate as supplied by the caller.
    pub value: String,
    /// Final score, including any prefix bonus.
    pub score: f64,
    /// The candidate after normalization; `None` with [`Preset::None`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_value: Option<String>,
    /// Shared run in the normalized candidate, in code points. Only set by the
    /// `substring` metric.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_range: Option<Range<usize>>,
    /// How the score was reached, e.g. `"jaro_winkler 0.967; prefix_bonus"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

struct Scored {
    score: f64,
    matched_range: Option<Range<usize>>,
}

fn score_candidate(metric: SuggestMetric, query: &str, candidate: &str) -> Scored {
    match metric {
        SuggestMetric::Score(metric) => Scored {
            score: metric.score(query, candidate),
            matched_range: None,
        },
        SuggestMetric::Substring => {
            let m = substring_similarity(query, candidate);
            Scored {
                score: m.score,
                matched_range: Some(m.candidate_range),
            }
        }
    }
}

/// Rank `candidates` against `query`.
///
/// Steps, per call:
///
/// 1. Normalize the query with `options.preset` and `options.locale`.
/// 2. Normalize each candidate the same way and score it with
///    `options.metric`.
/// 3. With `prefer_prefix`, a normalized candidate starting with the
///    normalized query scores `score + (1 - score) * 0.1`.
/// 4. Drop scores below `min_score`, sort descending keeping input order for
///    ties, and keep the first `max_suggestions`.
///
/// # Examples
///
/// ```
/// use stringmetrics::{SuggestOptions, suggest};
///
/// let out = suggest("pythn", &["python", "java", "javascript"], &SuggestOptions::default());
/// assert_eq!(out[0].value, "python");
/// assert!(out[0].score > 0.9);
/// ```
pub fn suggest<T: AsMatchStr>(
    query: &str,
    candidates: &[T],
    options: &SuggestOptions,
) -> Vec<Suggestion> {
    let query_norm = normalize(query, options.preset, options.locale);
    let metric_name = options.metric.to_string();

    let mut ranked: Vec<(usize, Suggestion)> = Vec::with_capacity(candidates.len());
    for (index, candidate) in candidates.iter().enumerate() {
        let value = candidate.as_match_str();
        let candidate_norm = normalize(value, options.preset, options.locale);

        let Scored {
            score: raw,
            matched_range,
        } = score_candidate(options.metric, &query_norm, &candidate_norm);

        let mut reason = format!("{metric_name} {raw:.3}");
        let mut score = raw;
        if options.prefer_prefix && candidate_norm.starts_with(&*query_norm) {
            score += (1.0 - score) * PREFIX_BONUS;
            reason.push_str("; ");
            reason.push_str(PREFIX_BONUS_MARKER);
        }

        trace!(index, raw, score, "scored candidate");
        if score < options.min_score {
            continue;
        }

        ranked.push((
            index,
            Suggestion {
                value: value.to_owned(),
                score,
                normalized_value: (options.preset != Preset::None)
                    .then(|| candidate_norm.into_owned()),
                matched_range,
                reason: Some(reason),
            },
        ));
    }

    ranked.sort_by(|(ia, a), (ib, b)| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| ia.cmp(ib))
    });
    ranked.truncate(options.max_suggestions);

    debug!(
        query_len = query.len(),
        candidates = candidates.len(),
        suggestions = ranked.len(),
        metric = %metric_name,
        "suggest"
    );
    ranked.into_iter().map(|(_, s)| s).collect()
}

/// [`suggest`] with loosely typed options.
///
/// # Errors
///
/// Returns the error from [`RawSuggestOptions::resolve`] for an unknown
/// metric or an invalid preset or locale. No suggestions are computed in that
/// case.
///
/// # Examples
///
/// ```
/// use stringmetrics::{RawSuggestOptions, suggest_with};
///
/// let raw = RawSuggestOptions { metric: Some("levenshtein".into()), ..Default::default() };
/// let out = suggest_with("colour", &["color", "flavour"], &raw).unwrap();
/// assert_eq!(out[0].value, "color");
/// ```
pub fn suggest_with<T: AsMatchStr>(
    query: &str,
    candidates: &[T],
    options: &RawSuggestOptions,
) -> Result<Vec<Suggestion>> {
    let options = options.resolve()?;
    Ok(suggest(query, candidates, &options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::ScoreMetric;
    use crate::error::Error;

    fn levenshtein_opts() -> SuggestOptions {
        SuggestOptions {
            metric: SuggestMetric::Score(ScoreMetric::Levenshtein),
            min_score: 0.0,
            ..Default::default()
        }
    }

    fn values(out: &[Suggestion]) -> Vec<&str> {
        out.iter().map(|s| s.value.as_str()).collect()
    }

    #[test]
    fn typo_ranks_intended_word_first() {
        let out = suggest("pythn", &["python", "java", "javascript"], &SuggestOptions::default());
        assert_eq!(values(&out), ["python"]);
        assert_eq!(out[0].reason.as_deref(), Some("jaro_winkler 0.967"));
    }

    #[test]
    fn empty_candidates() {
        let none: [&str; 0] = [];
        assert!(suggest("q", &none, &SuggestOptions::default()).is_empty());
    }

    #[test]
    fn normalization_makes_case_irrelevant() {
        let out = suggest("HELLO", &["hello"], &SuggestOptions::default());
        assert_eq!(out[0].score, 1.0);
        assert_eq!(out[0].value, "hello");
        assert_eq!(out[0].normalized_value.as_deref(), Some("hello"));
    }

    #[test]
    fn preset_none_leaves_normalized_value_unset() {
        let opts = SuggestOptions {
            preset: Preset::None,
            ..Default::default()
        };
        let out = suggest("abc", &["abc"], &opts);
        assert_eq!(out[0].normalized_value, None);
    }

    #[test]
    fn ties_keep_input_order() {
        // "ax" and "xb" are both one substitution from "ab".
        let out = suggest("ab", &["ax", "xb"], &levenshtein_opts());
        assert_eq!(values(&out), ["ax", "xb"]);
        let out = suggest("ab", &["xb", "ax"], &levenshtein_opts());
        assert_eq!(values(&out), ["xb", "ax"]);
    }

    #[test]
    fn prefix_bonus_breaks_tie() {
        // Both score 0.5; only "abcd" starts with the query.
        let plain = suggest("ab", &["ax", "abcd"], &levenshtein_opts());
        assert_eq!(values(&plain), ["ax", "abcd"]);

        let opts = SuggestOptions {
            prefer_prefix: true,
            ..levenshtein_opts()
        };
        let boosted = suggest("ab", &["ax", "abcd"], &opts);
        assert_eq!(values(&boosted), ["abcd", "ax"]);
        assert!((boosted[0].score - 0.55).abs() < 1e-12);
        assert_eq!(boosted[0].reason.as_deref(), Some("levenshtein 0.500; prefix_bonus"));
        assert_eq!(boosted[1].reason.as_deref(), Some("levenshtein 0.500"));
    }

    #[test]
    fn min_score_applies_after_bonus() {
        // Raw 0.5 misses 0.52, boosted 0.55 passes.
        let opts = SuggestOptions {
            prefer_prefix: true,
            min_score: 0.52,
            ..levenshtein_opts()
        };
        assert_eq!(values(&suggest("ab", &["ax", "abcd"], &opts)), ["abcd"]);
    }

    #[test]
    fn max_suggestions_truncates() {
        let opts = SuggestOptions {
            max_suggestions: 2,
            ..levenshtein_opts()
        };
        assert_eq!(suggest("a", &["a", "b", "c", "d"], &opts).len(), 2);

        let opts = SuggestOptions {
            max_suggestions: 0,
            ..levenshtein_opts()
        };
        assert!(suggest("a", &["a"], &opts).is_empty());
    }

    #[test]
    fn substring_metric_reports_range() {
        let opts = SuggestOptions {
            metric: SuggestMetric::Substring,
            min_score: 0.5,
            ..Default::default()
        };
        let out = suggest("World", &["Hello World", "xyz"], &opts);
        assert_eq!(values(&out), ["Hello World"]);
        assert_eq!(out[0].matched_range, Some(6..11));
        assert!((out[0].score - 0.625).abs() < 1e-12);
        assert_eq!(out[0].reason.as_deref(), Some("substring 0.625"));
    }

    #[test]
    fn suggest_with_resolves_raw_options() {
        let raw = RawSuggestOptions {
            metric: Some("levenshtein".to_owned()),
            min_score: Some(0.0),
            prefer_prefix: Some(true),
            ..Default::default()
        };
        let out = suggest_with("ab", &["ax", "abcd"], &raw).unwrap();
        assert_eq!(values(&out), ["abcd", "ax"]);
    }

    #[test]
    fn suggest_with_unknown_metric_errors() {
        let raw = RawSuggestOptions {
            metric: Some("nope".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            suggest_with("a", &["a"], &raw).unwrap_err(),
            Error::UnknownMetric("nope".to_owned())
        );
    }

    #[test]
    fn serializes_camel_case_and_skips_unset() {
        let s = Suggestion {
            value: "a".to_owned(),
            score: 1.0,
            normalized_value: Some("a".to_owned()),
            matched_range: None,
            reason: None,
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json, serde_json::json!({"value": "a", "score": 1.0, "normalizedValue": "a"}));
    }
}
