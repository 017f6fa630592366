//! Configuration for the list-level operations.
//!
//! Each operation takes one explicit options struct whose every field has a
//! documented default. [`ExtractOptions`] configures [`crate::extract`];
//! [`SuggestOptions`] configures [`crate::suggest`]. Hosts that receive loosely
//! typed option bags (camelCase or snake_case keys, string identifiers)
//! deserialize them into [`RawSuggestOptions`] and call
//! [`RawSuggestOptions::resolve`] once at the boundary.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dispatch::{ScoreMetric, alias_key};
use crate::error::{Error, Result};
use crate::fuzz;
use crate::normalize::{Locale, Preset};

/// Boxed pairwise scorer: `(query, choice) -> score`.
pub type Scorer = Box<dyn Fn(&str, &str) -> f64 + Send + Sync>;

/// Boxed preprocessing step applied to the query and every choice.
pub type Processor = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Options for [`crate::extract::extract`] and [`crate::extract::extract_one`].
///
/// # Defaults
///
/// - `scorer`: [`fuzz::ratio`] (0-100 scale)
/// - `processor`: none (strings are scored as given)
/// - `score_cutoff`: `0.0` (inclusive)
/// - `limit`: `None` (unbounded)
///
/// # Examples
///
/// ```
/// use stringmetrics::ExtractOptions;
/// use stringmetrics::fuzz::token_sort_ratio;
///
/// let opts = ExtractOptions::new()
///     .scorer(token_sort_ratio)
///     .processor(|s| s.to_lowercase())
///     .score_cutoff(50.0)
///     .limit(3);
/// assert_eq!(opts.score_cutoff, 50.0);
/// assert_eq!(opts.limit, Some(3));
/// ```
pub struct ExtractOptions {
    scorer: Scorer,
    processor: Option<Processor>,
    /// Minimum score a choice needs to qualify (inclusive).
    pub score_cutoff: f64,
    /// Maximum number of results returned by `extract`.
    pub limit: Option<usize>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            scorer: Box::new(fuzz::ratio),
            processor: None,
            score_cutoff: 0.0,
            limit: None,
        }
    }
}

impl fmt::Debug for ExtractOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractOptions")
            .field("processor", &self.processor.is_some())
            .field("score_cutoff", &self.score_cutoff)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

impl ExtractOptions {
    /// Default options: `ratio` scorer, no processor, cutoff 0, no limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the scorer.
    #[must_use]
    pub fn scorer<F>(mut self, scorer: F) -> Self
    where
        F: Fn(&str, &str) -> f64 + Send + Sync + 'static,
    {
        self.scorer = Box::new(scorer);
        self
    }

    /// Transform the query and each choice before scoring.
    #[must_use]
    pub fn processor<F>(mut self, processor: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.processor = Some(Box::new(processor));
        self
    }

    /// Set the inclusive minimum score.
    #[must_use]
    pub fn score_cutoff(mut self, cutoff: f64) -> Self {
        self.score_cutoff = cutoff;
        self
    }

    /// Cap the number of results `extract` returns.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn score(&self, query: &str, choice: &str) -> f64 {
        (self.scorer)(query, choice)
    }

    pub(crate) fn process<'a>(&self, s: &'a str) -> Cow<'a, str> {
        match &self.processor {
            Some(processor) => Cow::Owned(processor(s)),
            None => Cow::Borrowed(s),
        }
    }
}

/// Metric vocabulary of the suggestion engine: every dispatcher metric plus
/// longest-common-substring similarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestMetric {
    /// Any similarity the dispatcher knows.
    Score(ScoreMetric),
    /// [`crate::substring::substring_similarity`].
    Substring,
}

impl Serialize for SuggestMetric {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Default for SuggestMetric {
    fn default() -> Self {
        SuggestMetric::Score(ScoreMetric::default())
    }
}

impl From<ScoreMetric> for SuggestMetric {
    fn from(metric: ScoreMetric) -> Self {
        SuggestMetric::Score(metric)
    }
}

impl fmt::Display for SuggestMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestMetric::Score(metric) => fmt::Display::fmt(metric, f),
            SuggestMetric::Substring => f.write_str("substring"),
        }
    }
}

impl FromStr for SuggestMetric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match alias_key(s).as_str() {
            "substring" | "substringsimilarity" => Ok(SuggestMetric::Substring),
            _ => s.parse().map(SuggestMetric::Score),
        }
    }
}

/// Default `min_score` for suggestions.
pub const DEFAULT_MIN_SCORE: f64 = 0.6;

/// Default `max_suggestions`.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Options for [`crate::suggest::suggest`].
///
/// # Examples
///
/// ```
/// use stringmetrics::{Preset, SuggestOptions};
///
/// let opts = SuggestOptions { prefer_prefix: true, ..Default::default() };
/// assert_eq!(opts.min_score, 0.6);
/// assert_eq!(opts.max_suggestions, 5);
/// assert_eq!(opts.preset, Preset::Default);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestOptions {
    /// Scoring metric. Defaults to Jaro-Winkler.
    pub metric: SuggestMetric,
    /// Candidates scoring below this (after any prefix bonus) are dropped.
    pub min_score: f64,
    /// Maximum number of suggestions returned.
    pub max_suggestions: usize,
    /// Nudge candidates that start with the query 10% closer to 1.0.
    pub prefer_prefix: bool,
    /// Normalization applied to the query and every candidate.
    pub preset: Preset,
    /// Locale-specific case folding.
    pub locale: Option<Locale>,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            metric: SuggestMetric::default(),
            min_score: DEFAULT_MIN_SCORE,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            prefer_prefix: false,
            preset: Preset::Default,
            locale: None,
        }
    }
}

/// Loosely typed suggestion options as received from a host.
///
/// Accepts camelCase and snake_case keys; when both spellings of a field are
/// present the camelCase one wins. The normalization preset may arrive as
/// `normalize` (or `normalization`), which wins, or as `preset`. A numeric or
/// boolean field whose value has the wrong type (such as `"minScore": "0.8"`)
/// deserializes as absent, so it resolves to its default.
///
/// # Examples
///
/// ```
/// use stringmetrics::{RawSuggestOptions, SuggestMetric, ScoreMetric};
///
/// let raw = RawSuggestOptions {
///     metric: Some("jaroWinkler".to_owned()),
///     min_score: Some(0.8),
///     ..Default::default()
/// };
/// let opts = raw.resolve().unwrap();
/// assert_eq!(opts.metric, SuggestMetric::Score(ScoreMetric::JaroWinkler));
/// assert_eq!(opts.min_score, 0.8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawSuggestOptionsRepr")]
pub struct RawSuggestOptions {
    /// Metric identifier in any supported spelling.
    pub metric: Option<String>,
    /// Minimum score; non-finite values fall back to the default.
    pub min_score: Option<f64>,
    /// Maximum suggestions; negative values fall back to the default.
    pub max_suggestions: Option<i64>,
    /// Enable the prefix bonus.
    pub prefer_prefix: Option<bool>,
    /// Primary preset field.
    pub normalize: Option<String>,
    /// Secondary preset field, consulted when `normalize` is absent.
    pub preset: Option<String>,
    /// Locale tag (`tr`, `az`, `lt`).
    pub locale: Option<String>,
}

/// A value that deserializes as [`Lenient::Malformed`] instead of failing
/// when it has the wrong type.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Malformed(IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self, field: &'static str) -> Option<T> {
        match self {
            Lenient::Valid(v) => Some(v),
            Lenient::Malformed(IgnoredAny) => {
                warn!(field, "ignoring option value of the wrong type");
                None
            }
        }
    }
}

fn lenient<T>(value: Option<Lenient<T>>, field: &'static str) -> Option<T> {
    value.and_then(|v| v.into_option(field))
}

/// Wire shape of [`RawSuggestOptions`]: every spelling is its own field so a
/// bag carrying two spellings of one option is not a duplicate-field error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSuggestOptionsRepr {
    metric: Option<String>,
    #[serde(rename = "minScore")]
    min_score_camel: Option<Lenient<f64>>,
    min_score: Option<Lenient<f64>>,
    #[serde(rename = "maxSuggestions")]
    max_suggestions_camel: Option<Lenient<i64>>,
    max_suggestions: Option<Lenient<i64>>,
    #[serde(rename = "preferPrefix")]
    prefer_prefix_camel: Option<Lenient<bool>>,
    prefer_prefix: Option<Lenient<bool>>,
    normalize: Option<String>,
    normalization: Option<String>,
    preset: Option<String>,
    #[serde(rename = "normalizationPreset")]
    normalization_preset_camel: Option<String>,
    normalization_preset: Option<String>,
    locale: Option<String>,
}

impl From<RawSuggestOptionsRepr> for RawSuggestOptions {
    fn from(repr: RawSuggestOptionsRepr) -> Self {
        Self {
            metric: repr.metric,
            min_score: lenient(repr.min_score_camel, "minScore")
                .or_else(|| lenient(repr.min_score, "min_score")),
            max_suggestions: lenient(repr.max_suggestions_camel, "maxSuggestions")
                .or_else(|| lenient(repr.max_suggestions, "max_suggestions")),
            prefer_prefix: lenient(repr.prefer_prefix_camel, "preferPrefix")
                .or_else(|| lenient(repr.prefer_prefix, "prefer_prefix")),
            normalize: repr.normalize.or(repr.normalization),
            preset: repr
                .preset
                .or(repr.normalization_preset_camel)
                .or(repr.normalization_preset),
            locale: repr.locale,
        }
    }
}

impl RawSuggestOptions {
    /// Resolve into typed [`SuggestOptions`].
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownMetric`] for an unrecognized metric.
    /// - [`Error::InvalidArgument`] for an unrecognized preset or locale.
    pub fn resolve(&self) -> Result<SuggestOptions> {
        let defaults = SuggestOptions::default();

        let metric = match &self.metric {
            Some(id) => id.parse::<SuggestMetric>()?,
            None => defaults.metric,
        };

        let preset = match self.normalize.as_deref().or(self.preset.as_deref()) {
            Some(id) => id.parse::<Preset>()?,
            None => defaults.preset,
        };

        let locale = self.locale.as_deref().map(str::parse::<Locale>).transpose()?;

        let min_score = match self.min_score {
            Some(v) if v.is_finite() => v,
            Some(v) => {
                warn!(min_score = v, default = DEFAULT_MIN_SCORE, "ignoring non-finite min_score");
                defaults.min_score
            }
            None => defaults.min_score,
        };

        let max_suggestions = match self.max_suggestions {
            Some(v) => usize::try_from(v).unwrap_or_else(|_| {
                warn!(
                    max_suggestions = v,
                    default = DEFAULT_MAX_SUGGESTIONS,
                    "ignoring negative max_suggestions"
                );
                defaults.max_suggestions
            }),
            None => defaults.max_suggestions,
        };

        Ok(SuggestOptions {
            metric,
            min_score,
            max_suggestions,
            prefer_prefix: self.prefer_prefix.unwrap_or(defaults.prefer_prefix),
            preset,
            locale,
        })
    }
}
