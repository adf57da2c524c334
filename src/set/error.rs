//! Error types for the set module.
//!
//! Set operations themselves are total. The only fallible entry point is
//! parsing a set back from its textual form.

/// Represents an error when parsing a [`StringSet`](super::StringSet) from text.
///
/// # Examples
///
/// ```rust
/// use stringset::set::{ParseStringSetError, StringSet};
///
/// let error = "a, b)".parse::<StringSet>().unwrap_err();
/// assert_eq!(error, ParseStringSetError::MissingOpeningParenthesis);
/// assert_eq!(format!("{error}"), "set literal must start with '('");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStringSetError {
    /// The input does not start with `(`.
    MissingOpeningParenthesis,
    /// The input does not end with `)`.
    MissingClosingParenthesis,
}

impl std::fmt::Display for ParseStringSetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOpeningParenthesis => {
                write!(formatter, "set literal must start with '('")
            }
            Self::MissingClosingParenthesis => {
                write!(formatter, "set literal must end with ')'")
            }
        }
    }
}

impl std::error::Error for ParseStringSetError {}
