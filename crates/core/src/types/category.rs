//! Product category types.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Category`] or [`CategoryFilter`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

/// A product category.
///
/// The catalog uses a fixed set of categories; free-form categories are not
/// supported. Serialized as the display name (`"Beef"`, `"Boerewors"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Beef,
    Chicken,
    Pork,
    Offals,
    Boerewors,
}

impl Category {
    /// All categories, in storefront display order.
    pub const ALL: [Self; 5] = [
        Self::Beef,
        Self::Chicken,
        Self::Pork,
        Self::Offals,
        Self::Boerewors,
    ];

    /// The display name, identical to the serialized form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beef => "Beef",
            Self::Chicken => "Chicken",
            Self::Pork => "Pork",
            Self::Offals => "Offals",
            Self::Boerewors => "Boerewors",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beef" => Ok(Self::Beef),
            "Chicken" => Ok(Self::Chicken),
            "Pork" => Ok(Self::Pork),
            "Offals" => Ok(Self::Offals),
            "Boerewors" => Ok(Self::Boerewors),
            other => Err(CategoryParseError(other.to_owned())),
        }
    }
}

/// A category selection for catalog filtering: a concrete category or the
/// `"All"` wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Matches every category.
    #[default]
    All,
    /// Matches exactly one category.
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(category) => category.fmt(f),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            Ok(Self::All)
        } else {
            s.parse::<Category>().map(Self::Only)
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);

            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }

    #[test]
    fn test_category_rejects_unknown() {
        assert!("Venison".parse::<Category>().is_err());
        assert!("beef".parse::<Category>().is_err());
    }

    #[test]
    fn test_filter_all_matches_everything() {
        for category in Category::ALL {
            assert!(CategoryFilter::All.matches(category));
        }
    }

    #[test]
    fn test_filter_only_is_exact() {
        let filter = CategoryFilter::Only(Category::Pork);
        assert!(filter.matches(Category::Pork));
        assert!(!filter.matches(Category::Beef));
    }

    #[test]
    fn test_filter_parses_wildcard_and_category() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Boerewors".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Boerewors)
        );
        assert!("all".parse::<CategoryFilter>().is_err());
    }
}
