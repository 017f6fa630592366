#![warn(missing_docs)]

//! String similarity metrics and fuzzy matching.
//!
//! `stringmetrics` provides edit distances (Levenshtein, Damerau-Levenshtein,
//! OSA, Indel, LCS), Jaro and Jaro-Winkler similarity, token-based fuzzy
//! ratios, longest-common-substring scoring, best-match extraction over
//! candidate lists, a Unicode normalization pipeline, and a ranked suggestion
//! engine that composes them.
//!
//! All metrics operate on Unicode scalar values, never bytes.
//!
//! # Examples
//!
//! ```
//! use stringmetrics::{ScoreMetric, SuggestOptions, levenshtein, score, suggest};
//!
//! assert_eq!(levenshtein("kitten", "sitting"), 3);
//! assert!(score("martha", "marhta", ScoreMetric::JaroWinkler) > 0.96);
//!
//! let out = suggest("pythn", &["python", "java"], &SuggestOptions::default());
//! assert_eq!(out[0].value, "python");
//! ```

/// Edit-distance and similarity metrics.
pub mod distance;

/// Metric identifiers and the unified `distance` / `score` entry points.
pub mod dispatch;

/// Error taxonomy shared by every fallible operation.
pub mod error;

/// Best-match extraction over lists of choices.
pub mod extract;

/// Token-based fuzzy ratios on a 0-100 scale.
pub mod fuzz;

/// Unicode normalization presets and locale-aware case folding.
pub mod normalize;

/// Configuration for extraction and suggestions.
pub mod options;

/// Longest common substring similarity.
pub mod substring;

/// Ranked suggestion engine.
pub mod suggest;

// Re-export primary public API types and functions at the crate root.
pub use dispatch::{DistanceMetric, ScoreMetric, distance, distance_by_name, score, score_by_name};
pub use distance::damerau::{
    distance as damerau_levenshtein, normalized_similarity as normalized_damerau_levenshtein,
    osa_distance, osa_normalized_similarity as normalized_osa_similarity,
};
pub use distance::jaro::{JaroWinklerConfig, jaro, jaro_winkler, jaro_winkler_custom};
pub use distance::lcs::{
    indel_distance, indel_normalized_similarity, lcs_seq_distance, lcs_seq_normalized_similarity,
    lcs_seq_similarity,
};
pub use distance::levenshtein::{
    distance as levenshtein, normalized_similarity as normalized_levenshtein,
};
pub use error::{Error, Result};
pub use extract::{AsMatchStr, Match, extract, extract_one};
pub use fuzz::{partial_ratio, ratio, token_set_ratio, token_sort_ratio};
pub use normalize::{Locale, Preset, normalize, normalize_with};
pub use options::{ExtractOptions, RawSuggestOptions, SuggestMetric, SuggestOptions};
pub use substring::{SubstringMatch, substring_similarity};
pub use suggest::{Suggestion, suggest, suggest_with};
