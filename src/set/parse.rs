//! Parsing of the canonical `(e1, e2, ..., en)` form.

use std::str::FromStr;

use tracing::trace;

use super::{ParseStringSetError, StringSet};

const SEPARATOR: &str = ", ";

impl FromStr for StringSet {
    type Err = ParseStringSetError;

    /// Parses the textual form produced by `Display` / `as_string`.
    ///
    /// Surrounding whitespace is ignored, `"()"` is the empty set, and the
    /// body is split on `", "`. Elements that themselves contain `", "` cannot
    /// be recovered.
    ///
    /// # Errors
    ///
    /// Returns [`ParseStringSetError`] if the input is not wrapped in
    /// parentheses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stringset::set::StringSet;
    ///
    /// let set: StringSet = "(b, a, b)".parse().unwrap();
    /// assert_eq!(set.as_string(), "(a, b)");
    /// ```
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let body = text
            .trim()
            .strip_prefix('(')
            .ok_or(ParseStringSetError::MissingOpeningParenthesis)?
            .strip_suffix(')')
            .ok_or(ParseStringSetError::MissingClosingParenthesis)?;

        if body.is_empty() {
            return Ok(Self::empty());
        }

        let set = Self::new(body.split(SEPARATOR));
        trace!(size = set.size(), "parsed set literal");
        Ok(set)
    }
}
