//! Jaro and Jaro-Winkler similarity.
//!
//! Both are tuned for short strings such as personal names. Jaro counts the
//! characters that match within a sliding window and the transpositions among
//! them; Jaro-Winkler then rewards a shared prefix.

use serde::Serialize;

use super::{common_prefix, to_chars};

/// Jaro score at or below which [`jaro_winkler`] applies no prefix boost.
pub const WINKLER_BOOST_THRESHOLD: f64 = 0.7;

/// Prefix-boost parameters for Jaro-Winkler.
///
/// Neither field is range-checked. A `prefix_scale` above `0.25` combined
/// with `max_prefix >= 4` can push scores above `1.0`; callers choose sane
/// values.
///
/// # Examples
///
/// ```
/// use stringmetrics::distance::jaro::JaroWinklerConfig;
///
/// let config = JaroWinklerConfig::default();
/// assert_eq!(config.prefix_scale, 0.1);
/// assert_eq!(config.max_prefix, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JaroWinklerConfig {
    /// Weight applied per shared prefix character.
    pub prefix_scale: f64,
    /// Longest prefix that earns a bonus.
    pub max_prefix: usize,
}

impl Default for JaroWinklerConfig {
    fn default() -> Self {
        Self {
            prefix_scale: 0.1,
            max_prefix: 4,
        }
    }
}

pub(crate) fn jaro_chars(a: &[char], b: &[char]) -> f64 {
    let (len_a, len_b) = (a.len(), b.len());
    if len_a == 0 && len_b == 0 {
        return 1.0;
    }
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let window = (len_a.max(len_b) / 2).saturating_sub(1);
    let mut a_matched = vec![false; len_a];
    let mut b_matched = vec![false; len_b];
    let mut matches = 0usize;

    for (i, &ca) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(len_b);
        for j in start..end {
            if !b_matched[j] && b[j] == ca {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Walk both match sequences in order; each disagreement is half a
    // transposition.
    let mut half_transpositions = 0usize;
    let mut b_matches = b.iter().zip(&b_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    for (ca, _) in a.iter().zip(&a_matched).filter(|(_, m)| **m) {
        if b_matches.next().is_some_and(|cb| cb != ca) {
            half_transpositions += 1;
        }
    }

    let m = matches as f64;
    let t = (half_transpositions / 2) as f64;
    (m / len_a as f64 + m / len_b as f64 + (m - t) / m) / 3.0
}

/// Apply the Winkler prefix boost to a precomputed Jaro score.
fn boost(a: &[char], b: &[char], jaro: f64, config: JaroWinklerConfig) -> f64 {
    let prefix = common_prefix(a, b).min(config.max_prefix);
    jaro + prefix as f64 * config.prefix_scale * (1.0 - jaro)
}

pub(crate) fn jaro_winkler_chars(a: &[char], b: &[char]) -> f64 {
    let jaro = jaro_chars(a, b);
    if jaro > WINKLER_BOOST_THRESHOLD {
        boost(a, b, jaro, JaroWinklerConfig::default())
    } else {
        jaro
    }
}

pub(crate) fn jaro_winkler_custom_chars(a: &[char], b: &[char], config: JaroWinklerConfig) -> f64 {
    boost(a, b, jaro_chars(a, b), config)
}

/// Jaro similarity in `[0.0, 1.0]`.
///
/// `(m/|a| + m/|b| + (m - t)/m) / 3` where `m` counts characters matched
/// within `max(|a|, |b|) / 2 - 1` positions of each other and `t` is half the
/// number of matched characters that appear out of order.
///
/// # Examples
///
/// ```
/// use stringmetrics::distance::jaro;
///
/// assert!((jaro::jaro("MARTHA", "MARHTA") - 0.944444).abs() < 1e-6);
/// assert_eq!(jaro::jaro("", ""), 1.0);
/// assert_eq!(jaro::jaro("abc", ""), 0.0);
/// ```
pub fn jaro(a: &str, b: &str) -> f64 {
    jaro_chars(&to_chars(a), &to_chars(b))
}

/// Jaro-Winkler similarity with the standard parameters.
///
/// Uses a prefix scale of `0.1` over at most four shared leading characters,
/// and only boosts pairs whose Jaro score exceeds
/// [`WINKLER_BOOST_THRESHOLD`].
///
/// # Examples
///
/// ```
/// use stringmetrics::distance::jaro;
///
/// assert!((jaro::jaro_winkler("MARTHA", "MARHTA") - 0.961111).abs() < 1e-6);
/// ```
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    jaro_winkler_chars(&to_chars(a), &to_chars(b))
}

/// Jaro-Winkler similarity with caller-chosen prefix parameters.
///
/// The boost `L * prefix_scale * (1 - jaro)` is applied for every pair,
/// without a Jaro threshold and without clamping the result.
///
/// # Examples
///
/// ```
/// use stringmetrics::distance::jaro;
///
/// let standard = jaro::jaro_winkler_custom("MARTHA", "MARHTA", 0.1, 4);
/// let heavier = jaro::jaro_winkler_custom("MARTHA", "MARHTA", 0.2, 4);
/// assert!(heavier > standard);
/// ```
pub fn jaro_winkler_custom(a: &str, b: &str, prefix_scale: f64, max_prefix: usize) -> f64 {
    jaro_winkler_custom_chars(
        &to_chars(a),
        &to_chars(b),
        JaroWinklerConfig {
            prefix_scale,
            max_prefix,
        },
    )
}
