//! Unicode text normalization applied before comparison.
//!
//! A [`Preset`] names a bundle of canonicalization steps (composition, case
//! folding, accent stripping, punctuation removal, trimming). An optional
//! [`Locale`] swaps in language-specific case-folding substitutions for the
//! handful of letters where the Unicode default mapping is wrong for that
//! alphabet.
//!
//! Every preset is idempotent: normalizing an already-normalized string with
//! the same preset and locale returns it unchanged.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::{canonical_combining_class, is_combining_mark};

use crate::error::{Error, Result};

/// Named normalization bundle.
///
/// | Preset       | Steps                                                        |
/// |--------------|--------------------------------------------------------------|
/// | `None`       | identity                                                     |
/// | `Minimal`    | NFC, trim                                                    |
/// | `Default`    | NFC, case fold, trim                                         |
/// | `Aggressive` | NFKD, case fold, strip combining marks and punctuation, trim |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Leave the input untouched.
    None,
    /// Canonical composition and surrounding-whitespace trim.
    Minimal,
    /// Canonical composition, case folding, trim.
    #[default]
    Default,
    /// Compatibility decomposition, case folding, accent and punctuation
    /// removal, trim. Intended for maximum-recall matching.
    Aggressive,
}

impl Preset {
    /// Canonical lowercase identifier of this preset.
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::None => "none",
            Preset::Minimal => "minimal",
            Preset::Default => "default",
            Preset::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(Preset::None),
            "minimal" => Ok(Preset::Minimal),
            "default" => Ok(Preset::Default),
            "aggressive" => Ok(Preset::Aggressive),
            other => Err(Error::invalid("preset", other)),
        }
    }
}

/// Locale whose case-folding rules override the Unicode default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Turkish: `İ` folds to `i`, `I` folds to dotless `ı`.
    Tr,
    /// Azerbaijani: same dotted/dotless rules as Turkish.
    Az,
    /// Lithuanian: keeps the dot above `i`/`j` when an accent sits on top.
    Lt,
}

/// Turkic dotted/dotless I.
const TURKIC: &[(char, &str)] = &[('\u{0130}', "i"), ('I', "\u{0131}")];

/// Lithuanian precomposed accented capital I.
const LITHUANIAN: &[(char, &str)] = &[
    ('\u{00CC}', "i\u{0307}\u{0300}"),
    ('\u{00CD}', "i\u{0307}\u{0301}"),
    ('\u{0128}', "i\u{0307}\u{0303}"),
];

/// Letters that gain `U+0307` in Lithuanian when followed by an accent above.
const LITHUANIAN_SOFT_DOTTED: &[(char, &str)] =
    &[('I', "i\u{0307}"), ('J', "j\u{0307}"), ('\u{012E}', "\u{012F}\u{0307}")];

impl Locale {
    /// Canonical lowercase tag of this locale.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Tr => "tr",
            Locale::Az => "az",
            Locale::Lt => "lt",
        }
    }

    /// Context-free character substitutions applied during case folding.
    fn substitutions(self) -> &'static [(char, &'static str)] {
        match self {
            Locale::Tr | Locale::Az => TURKIC,
            Locale::Lt => LITHUANIAN,
        }
    }

    /// Substitutions that only apply when the next character is a combining
    /// mark rendered above the base letter.
    fn before_accent_above(self) -> &'static [(char, &'static str)] {
        match self {
            Locale::Lt => LITHUANIAN_SOFT_DOTTED,
            Locale::Tr | Locale::Az => &[],
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tr" => Ok(Locale::Tr),
            "az" => Ok(Locale::Az),
            "lt" => Ok(Locale::Lt),
            other => Err(Error::invalid("locale", other)),
        }
    }
}

fn lookup(table: &'static [(char, &'static str)], c: char) -> Option<&'static str> {
    table.iter().find(|(from, _)| *from == c).map(|(_, to)| *to)
}

/// Combining class 230 is "Above".
fn is_accent_above(c: char) -> bool {
    canonical_combining_class(c) == 230
}

/// Case-fold `s` into `out`, honoring the locale's substitution tables.
///
/// Without a locale the Unicode default lowercase mapping is used, except for
/// sharp s which folds to `ss`. Default mapping turns `İ` into `i` followed by
/// a combining dot above.
fn fold_case_into(s: &str, locale: Option<Locale>, out: &mut String) {
    out.reserve(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if let Some(locale) = locale {
            if let Some(folded) = lookup(locale.substitutions(), c) {
                out.push_str(folded);
                continue;
            }
            if chars.peek().is_some_and(|&next| is_accent_above(next)) {
                if let Some(folded) = lookup(locale.before_accent_above(), c) {
                    out.push_str(folded);
                    continue;
                }
            }
        }
        match c {
            '\u{00DF}' | '\u{1E9E}' => out.push_str("ss"),
            _ if c.is_ascii() => out.push(c.to_ascii_lowercase()),
            _ => out.extend(c.to_lowercase()),
        }
    }
}

/// Case-fold a string with optional locale rules.
///
/// # Examples
///
/// ```
/// use stringmetrics::normalize::{Locale, fold_case};
///
/// assert_eq!(fold_case("ISTANBUL", Some(Locale::Tr)), "\u{0131}stanbul");
/// assert_eq!(fold_case("\u{0130}stanbul", Some(Locale::Tr)), "istanbul");
/// assert_eq!(fold_case("\u{0130}", None), "i\u{0307}");
/// assert_eq!(fold_case("Stra\u{00DF}e", None), "strasse");
/// ```
pub fn fold_case(s: &str, locale: Option<Locale>) -> String {
    let mut out = String::new();
    fold_case_into(s, locale, &mut out);
    out
}

/// Normalize `input` according to `preset`, with optional locale-aware case
/// folding.
///
/// Returns [`Cow::Borrowed`] for [`Preset::None`]; every other preset builds
/// a new string. The locale only affects presets that case-fold
/// ([`Preset::Default`] and [`Preset::Aggressive`]).
///
/// # Arguments
///
/// * `input` - Text to normalize
/// * `preset` - Which normalization bundle to apply
/// * `locale` - Optional case-folding override
///
/// # Examples
///
/// ```
/// use stringmetrics::normalize::{Locale, Preset, normalize};
///
/// assert_eq!(normalize("  Caf\u{00E9}  ", Preset::Minimal, None), "Caf\u{00E9}");
/// assert_eq!(normalize("  Caf\u{00E9}  ", Preset::Default, None), "caf\u{00E9}");
/// assert_eq!(normalize("  Caf\u{00E9}!  ", Preset::Aggressive, None), "cafe");
/// assert_eq!(normalize("KIRMIZI", Preset::Default, Some(Locale::Tr)), "k\u{0131}rm\u{0131}z\u{0131}");
/// ```
pub fn normalize(input: &str, preset: Preset, locale: Option<Locale>) -> Cow<'_, str> {
    match preset {
        Preset::None => Cow::Borrowed(input),
        Preset::Minimal => {
            let composed: String = input.nfc().collect();
            Cow::Owned(composed.trim().to_owned())
        }
        Preset::Default => {
            // Compose first so locale tables see precomposed capitals, then
            // recompose whatever the lowercase mapping decomposed.
            let composed: String = input.nfc().collect();
            let mut folded = String::new();
            fold_case_into(&composed, locale, &mut folded);
            let recomposed: String = folded.nfc().collect();
            Cow::Owned(recomposed.trim().to_owned())
        }
        Preset::Aggressive => {
            // Locale tables match precomposed capitals, so fold once before
            // decomposing. Compatibility forms such as U+210D can decompose to
            // capitals, so fold again after.
            let composed: String = input.nfc().collect();
            let mut folded = String::new();
            fold_case_into(&composed, locale, &mut folded);
            let decomposed: String = folded.nfkd().collect();
            let mut refolded = String::new();
            fold_case_into(&decomposed, locale, &mut refolded);
            let stripped: String = refolded
                .nfkd()
                .filter(|c| !is_combining_mark(*c))
                .filter(|c| c.is_alphanumeric() || c.is_whitespace())
                .collect();
            Cow::Owned(stripped.trim().to_owned())
        }
    }
}

/// Normalize using string identifiers for the preset and locale.
///
/// This is the boundary form of [`normalize`]: the identifiers are parsed
/// first and any unrecognized value is rejected rather than falling back.
///
/// # Errors
///
/// [`Error::InvalidArgument`] when `preset` or `locale` is not recognized.
///
/// # Examples
///
/// ```
/// use stringmetrics::normalize::normalize_with;
///
/// assert_eq!(normalize_with("Hello ", "default", None).unwrap(), "hello");
/// assert!(normalize_with("Hello", "shouty", None).is_err());
/// assert!(normalize_with("Hello", "default", Some("xx")).is_err());
/// ```
pub fn normalize_with(input: &str, preset: &str, locale: Option<&str>) -> Result<String> {
    let preset: Preset = preset.parse()?;
    let locale = locale.map(str::parse::<Locale>).transpose()?;
    Ok(normalize(input, preset, locale).into_owned())
}
