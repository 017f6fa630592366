//! Metric identifiers and the unified `distance` / `score` entry points.
//!
//! Callers name metrics in several spellings (`jaroWinkler`, `jaro_winkler`,
//! `jaro-winkler`). Those strings are resolved once, here, into
//! [`DistanceMetric`] or [`ScoreMetric`]; the engines never see a name.
//!
//! [`score`] always reports `[0.0, 1.0]`: the token-ratio family, natively on
//! a 0-100 scale, is divided by 100.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::distance::{damerau, jaro, lcs, levenshtein};
use crate::error::{Error, Result};
use crate::fuzz;

/// Fold an identifier to its alias-insensitive key: lowercase, no `_` or `-`.
pub(crate) fn alias_key(id: &str) -> String {
    id.chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Metrics that produce an integer edit count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Insert, delete, substitute.
    #[default]
    Levenshtein,
    /// Levenshtein plus unrestricted transpositions.
    DamerauLevenshtein,
    /// Optimal String Alignment (restricted transpositions).
    Osa,
    /// Insert and delete only.
    Indel,
    /// `max(|a|, |b|) - lcs`.
    LcsSeq,
}

impl DistanceMetric {
    /// Canonical snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceMetric::Levenshtein => "levenshtein",
            DistanceMetric::DamerauLevenshtein => "damerau_levenshtein",
            DistanceMetric::Osa => "osa",
            DistanceMetric::Indel => "indel",
            DistanceMetric::LcsSeq => "lcs_seq",
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceMetric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match alias_key(s).as_str() {
            "levenshtein" => Ok(DistanceMetric::Levenshtein),
            "dameraulevenshtein" | "damerau" | "damerauunrestricted" => {
                Ok(DistanceMetric::DamerauLevenshtein)
            }
            "osa" | "damerauosa" | "optimalstringalignment" => Ok(DistanceMetric::Osa),
            "indel" => Ok(DistanceMetric::Indel),
            "lcsseq" | "lcs" => Ok(DistanceMetric::LcsSeq),
            _ => Err(Error::UnknownMetric(s.to_owned())),
        }
    }
}

/// Metrics that produce a normalized similarity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreMetric {
    /// Normalized Levenshtein similarity.
    Levenshtein,
    /// Normalized unrestricted Damerau-Levenshtein similarity.
    DamerauLevenshtein,
    /// Normalized OSA similarity.
    Osa,
    /// Normalized Indel similarity.
    Indel,
    /// `lcs / max(|a|, |b|)`.
    LcsSeq,
    /// Jaro similarity.
    Jaro,
    /// Jaro-Winkler with standard parameters.
    #[default]
    JaroWinkler,
    /// [`fuzz::ratio`] / 100.
    Ratio,
    /// [`fuzz::partial_ratio`] / 100.
    PartialRatio,
    /// [`fuzz::token_sort_ratio`] / 100.
    TokenSortRatio,
    /// [`fuzz::token_set_ratio`] / 100.
    TokenSetRatio,
}

impl ScoreMetric {
    /// Canonical snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreMetric::Levenshtein => "levenshtein",
            ScoreMetric::DamerauLevenshtein => "damerau_levenshtein",
            ScoreMetric::Osa => "osa",
            ScoreMetric::Indel => "indel",
            ScoreMetric::LcsSeq => "lcs_seq",
            ScoreMetric::Jaro => "jaro",
            ScoreMetric::JaroWinkler => "jaro_winkler",
            ScoreMetric::Ratio => "ratio",
            ScoreMetric::PartialRatio => "partial_ratio",
            ScoreMetric::TokenSortRatio => "token_sort_ratio",
            ScoreMetric::TokenSetRatio => "token_set_ratio",
        }
    }

    /// Score `a` against `b` on the `[0.0, 1.0]` scale.
    pub fn score(&self, a: &str, b: &str) -> f64 {
        match self {
            ScoreMetric::Levenshtein => levenshtein::normalized_similarity(a, b),
            ScoreMetric::DamerauLevenshtein => damerau::normalized_similarity(a, b),
            ScoreMetric::Osa => damerau::osa_normalized_similarity(a, b),
            ScoreMetric::Indel => lcs::indel_normalized_similarity(a, b),
            ScoreMetric::LcsSeq => lcs::lcs_seq_normalized_similarity(a, b),
            ScoreMetric::Jaro => jaro::jaro(a, b),
            ScoreMetric::JaroWinkler => jaro::jaro_winkler(a, b),
            ScoreMetric::Ratio => fuzz::ratio(a, b) / 100.0,
            ScoreMetric::PartialRatio => fuzz::partial_ratio(a, b) / 100.0,
            ScoreMetric::TokenSortRatio => fuzz::token_sort_ratio(a, b) / 100.0,
            ScoreMetric::TokenSetRatio => fuzz::token_set_ratio(a, b) / 100.0,
        }
    }
}

impl fmt::Display for ScoreMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoreMetric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match alias_key(s).as_str() {
            "levenshtein" | "normalizedlevenshtein" => Ok(ScoreMetric::Levenshtein),
            "dameraulevenshtein" | "damerau" | "damerauunrestricted"
            | "normalizeddameraulevenshtein" => Ok(ScoreMetric::DamerauLevenshtein),
            "osa" | "damerauosa" | "optimalstringalignment" | "normalizedosasimilarity" => {
                Ok(ScoreMetric::Osa)
            }
            "indel" | "indelnormalizedsimilarity" => Ok(ScoreMetric::Indel),
            "lcsseq" | "lcs" | "lcsseqnormalizedsimilarity" => Ok(ScoreMetric::LcsSeq),
            "jaro" => Ok(ScoreMetric::Jaro),
            "jarowinkler" => Ok(ScoreMetric::JaroWinkler),
            "ratio" => Ok(ScoreMetric::Ratio),
            "partialratio" => Ok(ScoreMetric::PartialRatio),
            "tokensortratio" => Ok(ScoreMetric::TokenSortRatio),
            "tokensetratio" => Ok(ScoreMetric::TokenSetRatio),
            _ => Err(Error::UnknownMetric(s.to_owned())),
        }
    }
}

/// Edit distance between `a` and `b` under `metric`.
///
/// # Examples
///
/// ```
/// use stringmetrics::{DistanceMetric, distance};
///
/// assert_eq!(distance("kitten", "sitting", DistanceMetric::default()), 3);
/// assert_eq!(distance("abcd", "abdc", DistanceMetric::Osa), 1);
/// ```
pub fn distance(a: &str, b: &str, metric: DistanceMetric) -> usize {
    match metric {
        DistanceMetric::Levenshtein => levenshtein::distance(a, b),
        DistanceMetric::DamerauLevenshtein => damerau::distance(a, b),
        DistanceMetric::Osa => damerau::osa_distance(a, b),
        DistanceMetric::Indel => lcs::indel_distance(a, b),
        DistanceMetric::LcsSeq => lcs::lcs_seq_distance(a, b),
    }
}

/// Normalized similarity between `a` and `b` under `metric`, in `[0.0, 1.0]`.
///
/// # Examples
///
/// ```
/// use stringmetrics::{ScoreMetric, score};
///
/// assert_eq!(score("mets york new", "new york mets", ScoreMetric::TokenSortRatio), 1.0);
/// assert_eq!(score("abc", "abc", ScoreMetric::default()), 1.0);
/// ```
pub fn score(a: &str, b: &str, metric: ScoreMetric) -> f64 {
    metric.score(a, b)
}

/// [`distance`] with the metric named by a string; `None` selects Levenshtein.
///
/// # Errors
///
/// [`Error::UnknownMetric`] when `metric` names no distance metric.
///
/// # Examples
///
/// ```
/// use stringmetrics::distance_by_name;
///
/// assert_eq!(distance_by_name("hello", "hallo", Some("indel")).unwrap(), 2);
/// assert_eq!(distance_by_name("ab", "ba", Some("damerauLevenshtein")).unwrap(), 1);
/// assert!(distance_by_name("ab", "ba", Some("jaro")).is_err());
/// ```
pub fn distance_by_name(a: &str, b: &str, metric: Option<&str>) -> Result<usize> {
    let metric = metric.map(str::parse::<DistanceMetric>).transpose()?.unwrap_or_default();
    Ok(distance(a, b, metric))
}

/// [`score`] with the metric named by a string; `None` selects Jaro-Winkler.
///
/// # Errors
///
/// [`Error::UnknownMetric`] when `metric` names no similarity metric.
///
/// # Examples
///
/// ```
/// use stringmetrics::score_by_name;
///
/// assert_eq!(score_by_name("fuzzy", "fuzzy wuzzy", Some("partialRatio")).unwrap(), 1.0);
/// assert!(score_by_name("a", "b", Some("cosine")).is_err());
/// ```
pub fn score_by_name(a: &str, b: &str, metric: Option<&str>) -> Result<f64> {
    let metric = metric.map(str::parse::<ScoreMetric>).transpose()?.unwrap_or_default();
    Ok(score(a, b, metric))
}
