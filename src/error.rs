//! Error types shared by every fallible entry point.
//!
//! Only caller input can fail: an unrecognized preset, locale, or option
//! value, or a metric identifier the dispatcher does not know. Degenerate
//! inputs such as empty strings or empty candidate lists are defined results,
//! never errors.

use thiserror::Error;

/// Errors raised at the boundary where caller-supplied identifiers are parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An option carried a value outside its documented domain.
    #[error("invalid value for {name}: '{value}'")]
    InvalidArgument {
        /// Name of the offending option (e.g. `preset`, `locale`).
        name: &'static str,
        /// The rejected value as supplied by the caller.
        value: String,
    },

    /// A metric identifier did not resolve to any known metric.
    #[error("unknown metric: '{0}'")]
    UnknownMetric(String),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            value: value.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_names_option_and_value() {
        let err = Error::invalid("preset", "loud");
        assert_eq!(err.to_string(), "invalid value for preset: 'loud'");
    }

    #[test]
    fn unknown_metric_message() {
        let err = Error::UnknownMetric("cosine".to_owned());
        assert_eq!(err.to_string(), "unknown metric: 'cosine'");
    }
}
