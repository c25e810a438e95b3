//! Blog post excerpt type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Excerpt`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ExcerptError {
    /// The input string is empty.
    #[error("excerpt cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("excerpt must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A short blog post summary shown in list views and the homepage ticker.
///
/// ## Constraints
///
/// - Non-empty
/// - At most 150 characters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Excerpt(String);

impl Excerpt {
    /// Maximum length of an excerpt.
    pub const MAX_LENGTH: usize = 150;

    /// Parse an `Excerpt` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or longer than 150 characters.
    pub fn parse(s: &str) -> Result<Self, ExcerptError> {
        if s.is_empty() {
            return Err(ExcerptError::Empty);
        }

        if s.chars().count() > Self::MAX_LENGTH {
            return Err(ExcerptError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the excerpt as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Excerpt` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Excerpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Excerpt {
    type Err = ExcerptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Excerpt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let excerpt = Excerpt::parse("Fresh boerewors back in stock this weekend.").unwrap();
        assert_eq!(
            excerpt.as_str(),
            "Fresh boerewors back in stock this weekend."
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Excerpt::parse(""), Err(ExcerptError::Empty)));
    }

    #[test]
    fn test_parse_at_limit() {
        let at_limit = "x".repeat(150);
        assert!(Excerpt::parse(&at_limit).is_ok());
    }

    #[test]
    fn test_parse_too_long() {
        let long = "x".repeat(151);
        assert!(matches!(
            Excerpt::parse(&long),
            Err(ExcerptError::TooLong { max: 150 })
        ));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 150 multi-byte characters stay within the limit.
        let emoji = "🥩".repeat(150);
        assert!(Excerpt::parse(&emoji).is_ok());
    }
}
