use thiserror::Error;

/// Errors that can occur when parsing a single matcher
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatcherParseError {
    #[error("bad matcher format: {0}")]
    BadFormat(String),

    #[error("invalid label name '{0}'")]
    InvalidLabelName(String),

    #[error("invalid regular expression '{value}' for label '{label}': {reason}")]
    InvalidRegex {
        label: String,
        value: String,
        reason: String,
    },
}
